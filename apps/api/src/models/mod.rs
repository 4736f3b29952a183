pub mod coerce;
pub mod portfolio;
pub mod sections;
pub mod user;

pub use portfolio::Portfolio;
pub use sections::{
    Award, Experience, PersonalStatement, Profile, Project, Section, SectionBody, SectionFields,
    SectionKind, SkillEntry,
};
pub use user::User;
