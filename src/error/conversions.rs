//! Type Conversions for RestError
//!
//! From trait implementations for converting common error types into
//! RestError.

use super::types::RestError;

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for RestError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::InternalError(format!("fetch task failed: {err}"))
    }
}
