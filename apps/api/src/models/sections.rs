//! Portfolio sections: profile, personal statement, skills, awards, experience, projects.
//!
//! Sections reference their portfolio by `portfolio_id` only. They are validated and
//! echoed back; nothing here is kept after the request completes.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::coerce;

/// Which section a request targets. Drives the route segment, the response key and the
/// confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Profile,
    PersonalStatement,
    Skill,
    Award,
    Experience,
    Project,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Profile,
        SectionKind::PersonalStatement,
        SectionKind::Skill,
        SectionKind::Award,
        SectionKind::Experience,
        SectionKind::Project,
    ];

    /// Last path segment under `/portfolio/:id/`.
    pub fn path_segment(self) -> &'static str {
        match self {
            SectionKind::Profile => "profile",
            SectionKind::PersonalStatement => "pr",
            SectionKind::Skill => "skills",
            SectionKind::Award => "award",
            SectionKind::Experience => "experience",
            SectionKind::Project => "project",
        }
    }

    /// Key the echoed record is returned under.
    pub fn response_key(self) -> &'static str {
        match self {
            SectionKind::Profile => "profile",
            SectionKind::PersonalStatement => "personal_statement",
            SectionKind::Skill => "skill",
            SectionKind::Award => "award",
            SectionKind::Experience => "experience",
            SectionKind::Project => "project",
        }
    }

    pub fn created_message(self) -> &'static str {
        match self {
            SectionKind::Profile => "프로필이 생성되었습니다.",
            SectionKind::PersonalStatement => "자기소개가 생성되었습니다.",
            SectionKind::Skill => "기술 스택이 생성되었습니다.",
            SectionKind::Award => "수상 경력이 생성되었습니다.",
            SectionKind::Experience => "경력이 생성되었습니다.",
            SectionKind::Project => "프로젝트가 생성되었습니다.",
        }
    }
}

/// Request body schema of one section kind.
pub trait SectionFields: DeserializeOwned + Serialize + Clone + Send + 'static {
    const KIND: SectionKind;
}

/// A section record: the owning portfolio id plus the section's own fields, serialized flat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<T> {
    pub portfolio_id: i64,
    #[serde(flatten)]
    pub fields: T,
}

/// Request body of a section create. `portfolio_id` may be repeated in the body; when
/// present it must equal the id in the path.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct SectionBody<T> {
    #[serde(default, deserialize_with = "coerce::opt_int")]
    pub portfolio_id: Option<i64>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> SectionBody<T> {
    /// The section fields, provided the body does not name a different portfolio.
    pub fn into_fields(self, path_id: i64) -> Result<T, AppError> {
        match self.portfolio_id {
            Some(body_id) if body_id != path_id => Err(AppError::BadRequest(format!(
                "portfolio_id {body_id} in the body does not match portfolio {path_id} in the path"
            ))),
            _ => Ok(self.fields),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub profile_image: String,
    pub banner_image: String,
    pub school_name: String,
    #[serde(default)]
    pub blog_url: Option<String>,
    pub major: String,
    pub degree: String,
}

impl SectionFields for Profile {
    const KIND: SectionKind = SectionKind::Profile;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalStatement {
    pub personality: String,
}

impl SectionFields for PersonalStatement {
    const KIND: SectionKind = SectionKind::PersonalStatement;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill_name: String,
    pub skill_group: String,
    pub description: String,
}

impl SectionFields for SkillEntry {
    const KIND: SectionKind = SectionKind::Skill;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub award_title: String,
    pub award_from: String,
    pub award_val: String,
    pub award_date: String,
}

impl SectionFields for Award {
    const KIND: SectionKind = SectionKind::Award;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub job_title: String,
    pub job_responsibility: String,
    pub job_exp: String,
    #[serde(deserialize_with = "coerce::int")]
    pub start_yr: i32,
    #[serde(deserialize_with = "coerce::int")]
    pub start_month: i32,
    #[serde(deserialize_with = "coerce::int")]
    pub end_yr: i32,
    #[serde(deserialize_with = "coerce::int")]
    pub end_month: i32,
}

impl SectionFields for Experience {
    const KIND: SectionKind = SectionKind::Experience;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_image: String,
    pub project_title: String,
    pub project_skills: String,
    pub project_responsibility: String,
    #[serde(default)]
    pub project_link: Option<String>,
    pub description: String,
    #[serde(deserialize_with = "coerce::int")]
    pub start_yr: i32,
    #[serde(deserialize_with = "coerce::int")]
    pub start_month: i32,
    #[serde(deserialize_with = "coerce::int")]
    pub end_yr: i32,
    #[serde(deserialize_with = "coerce::int")]
    pub end_month: i32,
}

impl SectionFields for Project {
    const KIND: SectionKind = SectionKind::Project;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_uses_camel_case_phone_number() {
        let profile: Profile = serde_json::from_value(json!({
            "username": "kim",
            "phoneNumber": "010-1234-5678",
            "profile_image": "p.png",
            "banner_image": "b.png",
            "school_name": "KAIST",
            "major": "CS",
            "degree": "BS"
        }))
        .unwrap();

        assert_eq!(profile.phone_number, "010-1234-5678");
        assert_eq!(profile.blog_url, None);

        let v = serde_json::to_value(&profile).unwrap();
        assert!(v.get("phoneNumber").is_some());
        assert!(v.get("phone_number").is_none());
    }

    #[test]
    fn test_profile_missing_required_field_is_rejected() {
        let result = serde_json::from_value::<Profile>(json!({
            "username": "kim",
            "phoneNumber": "010",
            "profile_image": "p.png",
            "banner_image": "b.png",
            "school_name": "KAIST",
            "major": "CS"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_experience_coerces_string_dates() {
        let exp: Experience = serde_json::from_value(json!({
            "job_title": "Backend Engineer",
            "job_responsibility": "APIs",
            "job_exp": "2 years",
            "start_yr": "2021",
            "start_month": 3,
            "end_yr": 2023,
            "end_month": "11"
        }))
        .unwrap();

        assert_eq!((exp.start_yr, exp.start_month), (2021, 3));
        assert_eq!((exp.end_yr, exp.end_month), (2023, 11));
    }

    #[test]
    fn test_project_link_may_be_null() {
        let project: Project = serde_json::from_value(json!({
            "project_image": "shot.png",
            "project_title": "Folio",
            "project_skills": "Rust",
            "project_responsibility": "Everything",
            "project_link": null,
            "description": "Portfolio site",
            "start_yr": 2024,
            "start_month": 1,
            "end_yr": 2024,
            "end_month": 6
        }))
        .unwrap();
        assert_eq!(project.project_link, None);
    }

    #[test]
    fn test_section_serializes_flat_with_portfolio_id() {
        let section = Section {
            portfolio_id: 7,
            fields: PersonalStatement {
                personality: "curious".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&section).unwrap(),
            json!({ "portfolio_id": 7, "personality": "curious" })
        );
    }

    #[test]
    fn test_section_body_without_portfolio_id_uses_path() {
        let body: SectionBody<PersonalStatement> =
            serde_json::from_value(json!({ "personality": "calm" })).unwrap();
        assert_eq!(body.portfolio_id, None);
        assert_eq!(body.into_fields(4).unwrap().personality, "calm");
    }

    #[test]
    fn test_section_body_matching_portfolio_id_is_accepted() {
        let body: SectionBody<SkillEntry> = serde_json::from_value(json!({
            "portfolio_id": "4",
            "skill_name": "Rust",
            "skill_group": "Language",
            "description": "async"
        }))
        .unwrap();
        assert_eq!(body.portfolio_id, Some(4));
        assert_eq!(body.into_fields(4).unwrap().skill_name, "Rust");
    }

    #[test]
    fn test_section_body_mismatched_portfolio_id_is_rejected() {
        let body: SectionBody<PersonalStatement> =
            serde_json::from_value(json!({ "portfolio_id": 9, "personality": "calm" })).unwrap();
        assert!(matches!(body.into_fields(4), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_section_kinds_have_distinct_segments() {
        let mut segments: Vec<_> = SectionKind::ALL.iter().map(|k| k.path_segment()).collect();
        segments.sort_unstable();
        segments.dedup();
        assert_eq!(segments.len(), SectionKind::ALL.len());
    }
}
