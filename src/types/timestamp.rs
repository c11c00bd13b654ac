//! Serde helpers for the platform's timestamp format
//! (`Wed Oct 10 20:19:24 +0000 2018`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

const FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Deserialize an optional timestamp; unparseable values become `None`.
pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse))
}
