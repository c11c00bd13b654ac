//! Client configuration.
//!
//! `ClientConfig` and its builder configure the HTTP transport and the
//! fetchers. `Default` honours `CHIRP_BASE_URL` and `CHIRP_MAX_CONCURRENCY`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::defaults;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root joined with every request path
    pub base_url: String,
    /// Request timeout
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// User agent
    pub user_agent: Option<String>,
    /// Headers sent with every request
    pub headers: HashMap<String, String>,
    /// Upper bound on concurrent requests within one parallel fetch
    pub max_concurrency: usize,
    /// Identity cache capacity; `0` disables the cache
    pub identity_cache_capacity: usize,
    /// Path used to resolve the authenticated account
    pub verify_credentials_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base_url = std::env::var("CHIRP_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| defaults::http::BASE_URL.to_string());
        let max_concurrency = std::env::var("CHIRP_MAX_CONCURRENCY")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults::fetch::MAX_CONCURRENCY);
        Self {
            base_url,
            timeout: Some(defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(defaults::http::CONNECT_TIMEOUT),
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
            headers: HashMap::new(),
            max_concurrency,
            identity_cache_capacity: defaults::cache::IDENTITY_CAPACITY,
            verify_credentials_path: defaults::fetch::VERIFY_CREDENTIALS_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Returns a builder for constructing `ClientConfig`
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

/// Builder for `ClientConfig`
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Option<Duration>>,
    connect_timeout: Option<Option<Duration>>,
    user_agent: Option<Option<String>>,
    headers: HashMap<String, String>,
    max_concurrency: Option<usize>,
    identity_cache_capacity: Option<usize>,
    verify_credentials_path: Option<String>,
}

impl ClientConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = Some(user_agent.map(|s| s.into()));
        self
    }
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
    /// Values below 1 are raised to 1.
    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = Some(n.max(1));
        self
    }
    pub fn identity_cache_capacity(mut self, n: usize) -> Self {
        self.identity_cache_capacity = Some(n);
        self
    }
    pub fn verify_credentials_path(mut self, path: impl Into<String>) -> Self {
        self.verify_credentials_path = Some(path.into());
        self
    }

    /// Build the configuration, filling unset fields from `ClientConfig::default()`
    pub fn build(self) -> ClientConfig {
        let base = ClientConfig::default();
        let mut headers = base.headers;
        headers.extend(self.headers);
        ClientConfig {
            base_url: self.base_url.unwrap_or(base.base_url),
            timeout: self.timeout.unwrap_or(base.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(base.connect_timeout),
            user_agent: self.user_agent.unwrap_or(base.user_agent),
            headers,
            max_concurrency: self.max_concurrency.unwrap_or(base.max_concurrency),
            identity_cache_capacity: self
                .identity_cache_capacity
                .unwrap_or(base.identity_cache_capacity),
            verify_credentials_path: self
                .verify_credentials_path
                .unwrap_or(base.verify_credentials_path),
        }
    }
}

// Helper module for Duration serialization
mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
