//! `reqwest`-backed transport.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Method, Url};
use std::sync::Arc;

use super::errors::classify_http_error;
use super::interceptor::{HttpInterceptor, HttpRequestContext, generate_request_id};
use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::RestError;
use crate::types::{Options, Response};

/// Sends requests with `reqwest`.
///
/// GET and DELETE carry parameters in the query string; every other method
/// sends them as an urlencoded form.
#[derive(Clone)]
pub struct ReqwestTransport {
    base_url: Url,
    client: reqwest::Client,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl ReqwestTransport {
    /// Build a transport (and its `reqwest::Client`) from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, RestError> {
        let mut builder = reqwest::Client::builder().default_headers(build_headers(config)?);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RestError::ConfigurationError(format!("Failed to build HTTP client: {e}")))?;
        Self::with_client(&config.base_url, client)
    }

    /// Use an existing client; configuration headers/timeouts are not applied.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, RestError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            RestError::ConfigurationError(format!("Invalid base URL '{base_url}': {e}"))
        })?;
        Ok(Self {
            base_url,
            client,
            interceptors: Vec::new(),
        })
    }

    /// Append interceptors (order preserved).
    pub fn with_interceptors(mut self, interceptors: Vec<Arc<dyn HttpInterceptor>>) -> Self {
        self.interceptors.extend(interceptors);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, RestError> {
        self.base_url
            .join(path)
            .map_err(|e| RestError::InvalidParameter(format!("Invalid request path '{path}': {e}")))
    }

    fn notify_error(&self, ctx: &HttpRequestContext, error: &RestError) {
        for it in &self.interceptors {
            it.on_error(ctx, error);
        }
    }
}

fn build_headers(config: &ClientConfig) -> Result<HeaderMap, RestError> {
    let mut headers = HeaderMap::new();
    if let Some(ua) = &config.user_agent {
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(ua)
                .map_err(|e| RestError::ConfigurationError(format!("Invalid user agent: {e}")))?,
        );
    }
    for (key, value) in &config.headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            RestError::ConfigurationError(format!("Invalid header name '{key}': {e}"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            RestError::ConfigurationError(format!("Invalid header value '{value}': {e}"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Options,
    ) -> Result<Response, RestError> {
        let url = self.url_for(path)?;
        let ctx = HttpRequestContext {
            request_id: generate_request_id(),
            method: method.clone(),
            url: url.to_string(),
        };

        let pairs = params.to_pairs();
        let mut rb = self.client.request(method.clone(), url);
        rb = if method == Method::GET || method == Method::DELETE {
            rb.query(&pairs)
        } else {
            rb.form(&pairs)
        };
        for it in &self.interceptors {
            rb = it.on_before_send(&ctx, rb, params)?;
        }

        let resp = match rb.send().await {
            Ok(resp) => resp,
            Err(e) => {
                let error = RestError::from(e);
                self.notify_error(&ctx, &error);
                return Err(error);
            }
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                let error = RestError::from(e);
                self.notify_error(&ctx, &error);
                return Err(error);
            }
        };

        if !status.is_success() {
            let error =
                classify_http_error(status.as_u16(), &text, &headers, status.canonical_reason());
            self.notify_error(&ctx, &error);
            return Err(error);
        }

        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(body) => body,
                Err(e) => {
                    let error = RestError::from(e);
                    self.notify_error(&ctx, &error);
                    return Err(error);
                }
            }
        };

        for it in &self.interceptors {
            it.on_response(&ctx, status.as_u16());
        }

        Ok(Response {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
