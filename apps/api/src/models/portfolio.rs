use serde::{Deserialize, Serialize};

use crate::models::coerce;

/// A portfolio. `user_id` is a soft reference; no user needs to exist for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(deserialize_with = "coerce::int")]
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(deserialize_with = "coerce::int")]
    pub user_id: i64,
}
