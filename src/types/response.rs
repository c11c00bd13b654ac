//! Response envelope returned by a transport.

use reqwest::header::HeaderMap;

/// Status, headers, and a body already parsed to JSON.
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body (`Null` for an empty body)
    pub body: serde_json::Value,
}

impl Response {
    /// A 200 response with no headers.
    pub fn ok(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            headers: HeaderMap::new(),
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
