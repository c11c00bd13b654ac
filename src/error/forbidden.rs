//! Forbidden-action guard.
//!
//! The platform answers several distinct business conditions (liking a status
//! twice, resharing a status twice, posting a duplicate) with the same generic
//! 403. They can only be told apart by message text, so callers that expect one
//! of them pass the observed error through [`handle_forbidden_error`].

use super::types::RestError;

/// A 403 condition identified by an exact platform message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenKind {
    AlreadyFavorited,
    AlreadyRetweeted,
    DuplicateStatus,
}

impl ForbiddenKind {
    /// The sentinel message the platform sends for this condition.
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyFavorited => "You have already favorited this status.",
            Self::AlreadyRetweeted => {
                "sharing is not permissible for this status (Share validations failed)"
            }
            Self::DuplicateStatus => "Status is a duplicate.",
        }
    }

    /// A fresh error of this kind.
    pub const fn to_error(self) -> RestError {
        match self {
            Self::AlreadyFavorited => RestError::AlreadyFavorited,
            Self::AlreadyRetweeted => RestError::AlreadyRetweeted,
            Self::DuplicateStatus => RestError::DuplicateStatus,
        }
    }
}

/// Re-type `error` as `kind` when its message is exactly `kind`'s sentinel.
///
/// Any other error is returned unchanged.
pub fn handle_forbidden_error(kind: ForbiddenKind, error: RestError) -> RestError {
    if error.message() == kind.message() {
        kind.to_error()
    } else {
        error
    }
}
