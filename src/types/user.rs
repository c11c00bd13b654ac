//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RestError, Result};
use crate::traits::Entity;

/// A platform account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Immutable numeric id.
    pub id: u64,
    /// Handle; unique but changeable.
    pub screen_name: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub friends_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for User {
    fn from_element(element: &Value) -> Result<Self> {
        User::deserialize(element)
            .map_err(|e| RestError::ParseError(format!("invalid user object: {e}")))
    }
}
