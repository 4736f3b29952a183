use serde::{Deserialize, Serialize};

use crate::models::coerce;

/// A registered user. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "coerce::int")]
    pub id: i64,
    pub password: String,
}
