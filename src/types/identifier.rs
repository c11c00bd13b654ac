//! User identifiers.
//!
//! Many endpoints accept a user either by numeric id or by screen name. Callers
//! may also hand over an entity they already fetched, or a profile URL. All of
//! these become a [`UserIdentifier`] at the API boundary; the merge helpers in
//! [`crate::params::merge`] turn one into the right query parameter.

use reqwest::Url;
use serde_json::Value;

use super::user::User;

/// Reference to an already materialized entity, kept by numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub id: u64,
}

impl EntityRef {
    pub const fn new(id: u64) -> Self {
        Self { id }
    }
}

/// A value referring to a user.
#[derive(Debug, Clone, PartialEq)]
pub enum UserIdentifier {
    /// The account's numeric id.
    Id(u64),
    /// The account's handle, e.g. `rustlang`.
    ScreenName(String),
    /// An entity the caller already holds.
    Entity(EntityRef),
    /// A profile URL; the last path segment is the handle.
    Url(Url),
    /// Any other shape. Merging one adds no parameter.
    Unrecognized(Value),
}

impl UserIdentifier {
    /// The handle carried by a `Url` identifier.
    pub(crate) fn url_screen_name(url: &Url) -> Option<&str> {
        url.path_segments()?.filter(|s| !s.is_empty()).next_back()
    }
}

impl From<u64> for UserIdentifier {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&u64> for UserIdentifier {
    fn from(id: &u64) -> Self {
        Self::Id(*id)
    }
}

impl From<&str> for UserIdentifier {
    fn from(name: &str) -> Self {
        Self::ScreenName(name.to_string())
    }
}

impl From<String> for UserIdentifier {
    fn from(name: String) -> Self {
        Self::ScreenName(name)
    }
}

impl From<&String> for UserIdentifier {
    fn from(name: &String) -> Self {
        Self::ScreenName(name.clone())
    }
}

impl From<EntityRef> for UserIdentifier {
    fn from(entity: EntityRef) -> Self {
        Self::Entity(entity)
    }
}

impl From<&User> for UserIdentifier {
    fn from(user: &User) -> Self {
        Self::Entity(EntityRef::new(user.id))
    }
}

impl From<Url> for UserIdentifier {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<&UserIdentifier> for UserIdentifier {
    fn from(id: &UserIdentifier) -> Self {
        id.clone()
    }
}

/// Classify an untyped value by shape.
///
/// Non-negative integers are ids, strings are handles, objects with a numeric
/// `id` are entity references. Everything else is `Unrecognized`.
impl From<Value> for UserIdentifier {
    fn from(value: Value) -> Self {
        match &value {
            // Platform ids are unsigned; negative or fractional numbers are
            // not ids.
            Value::Number(n) => match n.as_u64() {
                Some(id) => Self::Id(id),
                None => Self::Unrecognized(value),
            },
            Value::String(s) => Self::ScreenName(s.clone()),
            Value::Object(map) => match map.get("id").and_then(Value::as_u64) {
                Some(id) => Self::Entity(EntityRef::new(id)),
                None => Self::Unrecognized(value),
            },
            _ => Self::Unrecognized(value),
        }
    }
}
