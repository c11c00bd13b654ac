//! HTTP Interceptor interfaces
//!
//! Interceptors observe and tweak request builders before send, observe
//! responses, and are notified of errors. The hooks are best-effort and should
//! avoid expensive work.

use reqwest::Method;

use crate::error::RestError;
use crate::types::Options;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub request_id: String,
    pub method: Method,
    pub url: String,
}

/// Generate a unique id for correlating interceptor callbacks.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Interceptors may add headers or modify
    /// attributes on the request builder. Return the (possibly modified)
    /// builder or an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _params: &Options,
    ) -> Result<reqwest::RequestBuilder, RestError> {
        Ok(builder)
    }

    /// Called after a response is received (only for successful responses).
    fn on_response(&self, _ctx: &HttpRequestContext, _status: u16) {}

    /// Called when an error occurs during sending or classification.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &RestError) {}
}

/// A simple logging interceptor backed by `tracing` (no parameter values).
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        params: &Options,
    ) -> Result<reqwest::RequestBuilder, RestError> {
        tracing::debug!(target: "chirp::http", request_id=%ctx.request_id, method=%ctx.method, url=%ctx.url, params=params.len(), "sending request");
        Ok(builder)
    }

    fn on_response(&self, ctx: &HttpRequestContext, status: u16) {
        tracing::debug!(target: "chirp::http", request_id=%ctx.request_id, method=%ctx.method, url=%ctx.url, status=status, "response received");
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &RestError) {
        tracing::debug!(target: "chirp::http", request_id=%ctx.request_id, method=%ctx.method, url=%ctx.url, err=%error, "request error");
    }
}
