//! Lenient integer fields.
//!
//! Clients of the portfolio forms post numbers either as JSON numbers or as the
//! string a form input produced (`"2024"`). Both are accepted; anything else is a
//! schema error.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// `deserialize_with` target for integer fields.
pub fn int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
    <T as TryFrom<i64>>::Error: Display,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => T::try_from(v).map_err(de::Error::custom),
        IntOrString::Str(s) => s
            .trim()
            .parse::<T>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

/// `deserialize_with` target for optional integer fields; `null` maps to `None`.
pub fn opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
    <T as TryFrom<i64>>::Error: Display,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(v)) => T::try_from(v).map(Some).map_err(de::Error::custom),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Year {
        #[serde(deserialize_with = "int")]
        value: i32,
    }

    #[test]
    fn test_accepts_json_number() {
        let y: Year = serde_json::from_str(r#"{"value": 2024}"#).unwrap();
        assert_eq!(y.value, 2024);
    }

    #[test]
    fn test_accepts_numeric_string() {
        let y: Year = serde_json::from_str(r#"{"value": " 2019 "}"#).unwrap();
        assert_eq!(y.value, 2019);
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        assert!(serde_json::from_str::<Year>(r#"{"value": "spring"}"#).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(serde_json::from_str::<Year>(r#"{"value": 9999999999}"#).is_err());
    }

    #[test]
    fn test_rejects_float() {
        assert!(serde_json::from_str::<Year>(r#"{"value": 3.5}"#).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct MaybeId {
        #[serde(default, deserialize_with = "opt_int")]
        id: Option<i64>,
    }

    #[test]
    fn test_optional_accepts_missing_null_and_string() {
        let missing: MaybeId = serde_json::from_str("{}").unwrap();
        let null: MaybeId = serde_json::from_str(r#"{"id": null}"#).unwrap();
        let text: MaybeId = serde_json::from_str(r#"{"id": "8"}"#).unwrap();
        assert_eq!((missing.id, null.id, text.id), (None, None, Some(8)));
    }
}
