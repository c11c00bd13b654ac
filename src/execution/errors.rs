//! HTTP error classification
//!
//! Maps a non-success status plus body into a `RestError`, keeping the
//! platform's own message intact so callers can compare it exactly (see
//! [`crate::error::handle_forbidden_error`]).

use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::RestError;

/// Extract the platform message from an error body.
///
/// Bodies look like `{"errors":[{"code":187,"message":"Status is a duplicate."}]}`
/// or `{"error":"Not authorized."}`.
pub fn extract_error_message(body: &Value) -> Option<String> {
    if let Some(msg) = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errs| errs.first())
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return Some(msg.to_string());
    }
    match body.get("error") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(obj) => obj.get("message").and_then(Value::as_str).map(str::to_string),
        None => None,
    }
}

/// Classify an HTTP failure.
pub fn classify_http_error(
    status: u16,
    body_text: &str,
    headers: &HeaderMap,
    fallback_message: Option<&str>,
) -> RestError {
    let details: Option<Value> = serde_json::from_str(body_text).ok();
    let message = details
        .as_ref()
        .and_then(extract_error_message)
        .or_else(|| fallback_message.map(str::to_string))
        .unwrap_or_else(|| body_text.chars().take(200).collect());

    match status {
        401 => RestError::AuthenticationError(message),
        403 => RestError::Forbidden { message, details },
        404 => RestError::NotFound(message),
        429 => {
            let reset = headers
                .get("x-rate-limit-reset")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            RestError::RateLimitError(format!("{message} reset={reset}"))
        }
        _ => RestError::ApiError {
            code: status,
            message,
            details,
        },
    }
}
