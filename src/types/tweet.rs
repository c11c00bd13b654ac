//! Status (tweet) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::user::User;
use crate::error::{RestError, Result};
use crate::traits::Entity;

/// A posted status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: u64,
    /// Status text; extended payloads carry it as `full_text`.
    #[serde(alias = "full_text", default)]
    pub text: String,
    /// Author, absent when the request trimmed user objects.
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub favorite_count: u64,
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub in_reply_to_status_id: Option<u64>,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Tweet {
    fn from_element(element: &Value) -> Result<Self> {
        Tweet::deserialize(element)
            .map_err(|e| RestError::ParseError(format!("invalid status object: {e}")))
    }
}
