//! Default Configuration Values
//!
//! This module centralizes the default values used throughout the crate.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default API root.
    pub const BASE_URL: &str = "https://api.twitter.com";

    /// Default request timeout for HTTP requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("chirp/", env!("CARGO_PKG_VERSION"));
}

/// Fetcher defaults
pub mod fetch {
    /// Upper bound on in-flight requests issued by a single parallel fetch.
    pub const MAX_CONCURRENCY: usize = 8;

    /// Cursor value meaning "first page".
    pub const FIRST_PAGE_CURSOR: i64 = -1;

    /// Endpoint resolving the authenticated account.
    pub const VERIFY_CREDENTIALS_PATH: &str = "/1.1/account/verify_credentials.json";
}

/// Identity cache defaults
pub mod cache {
    /// Number of entities kept before the least recently used is evicted.
    pub const IDENTITY_CAPACITY: usize = 1024;
}
