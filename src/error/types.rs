//! Core error types.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RestError>;

/// Coarse classification of a `RestError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network or transport failure before a status was received.
    Network,
    /// Credentials rejected by the platform.
    Authentication,
    /// 4xx responses other than auth and rate limiting.
    Client,
    /// 5xx responses.
    Server,
    /// Rate limited by the platform.
    RateLimit,
    /// Response body did not have the expected shape.
    Parsing,
    /// Invalid local configuration or parameters.
    Configuration,
    /// Anything else (task failures, internal invariants).
    Internal,
}

/// Errors produced by the REST layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Forbidden: {message}")]
    Forbidden {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("{}", crate::error::ForbiddenKind::AlreadyFavorited.message())]
    AlreadyFavorited,

    #[error("{}", crate::error::ForbiddenKind::AlreadyRetweeted.message())]
    AlreadyRetweeted,

    #[error("{}", crate::error::ForbiddenKind::DuplicateStatus.message())]
    DuplicateStatus,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl RestError {
    /// Build a generic API error for a status code.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Build a 403 error with the platform's message.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            details: None,
        }
    }

    /// HTTP status associated with this error, when one is known.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::AuthenticationError(_) => Some(401),
            Self::Forbidden { .. }
            | Self::AlreadyFavorited
            | Self::AlreadyRetweeted
            | Self::DuplicateStatus => Some(403),
            Self::NotFound(_) => Some(404),
            Self::RateLimitError(_) => Some(429),
            _ => None,
        }
    }

    /// The message the platform attached to this error.
    ///
    /// Unlike `Display`, this carries no prefix and is suitable for exact
    /// comparisons against known sentinel messages.
    pub fn message(&self) -> &str {
        match self {
            Self::HttpError(m)
            | Self::JsonError(m)
            | Self::ParseError(m)
            | Self::AuthenticationError(m)
            | Self::NotFound(m)
            | Self::RateLimitError(m)
            | Self::ConfigurationError(m)
            | Self::InvalidParameter(m)
            | Self::InternalError(m) => m,
            Self::ApiError { message, .. } | Self::Forbidden { message, .. } => message,
            Self::AlreadyFavorited => crate::error::ForbiddenKind::AlreadyFavorited.message(),
            Self::AlreadyRetweeted => crate::error::ForbiddenKind::AlreadyRetweeted.message(),
            Self::DuplicateStatus => crate::error::ForbiddenKind::DuplicateStatus.message(),
        }
    }

    /// Coarse category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::JsonError(_) | Self::ParseError(_) => ErrorCategory::Parsing,
            Self::AuthenticationError(_) => ErrorCategory::Authentication,
            Self::RateLimitError(_) => ErrorCategory::RateLimit,
            Self::ApiError { code, .. } if *code >= 500 => ErrorCategory::Server,
            Self::ApiError { .. }
            | Self::Forbidden { .. }
            | Self::NotFound(_)
            | Self::AlreadyFavorited
            | Self::AlreadyRetweeted
            | Self::DuplicateStatus => ErrorCategory::Client,
            Self::ConfigurationError(_) | Self::InvalidParameter(_) => {
                ErrorCategory::Configuration
            }
            Self::InternalError(_) => ErrorCategory::Internal,
        }
    }
}
