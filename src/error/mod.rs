//! Error Handling Module
//!
//! This module provides error handling for the REST layer, including:
//! - Core error types (`RestError`, `ErrorCategory`)
//! - The forbidden-action guard that re-types generic 403 failures
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use chirp::error::{ErrorCategory, RestError};
//!
//! let error = RestError::api_error(404, "Not found");
//! assert_eq!(error.category(), ErrorCategory::Client);
//! ```

// Module declarations
mod conversions;
pub mod forbidden;
pub mod types;

// Re-exports for public API
pub use forbidden::*;
pub use types::*;
