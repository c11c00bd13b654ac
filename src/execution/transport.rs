//! HTTP transport abstraction.
//!
//! Every fetcher dispatches through a [`Transport`]. The crate ships a
//! `reqwest`-backed implementation; tests and embedders can inject their own to
//! observe the final method/path/params and return synthetic responses.

use async_trait::async_trait;
use reqwest::Method;

use crate::error::RestError;
use crate::types::{Options, Response};

/// Sends one request and returns the parsed response envelope.
///
/// Implementations surface non-success statuses as errors; the fetchers never
/// translate them.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Options,
    ) -> Result<Response, RestError>;
}
