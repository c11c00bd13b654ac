//! Cursor-paginated collections.
//!
//! A [`Cursor`] is one page of a cursored endpoint. It keeps everything needed
//! to request the following page: the client, the method and path, and the
//! exact options used for this page. Advancing re-runs
//! [`RestClient::cursor_from_response`] with only the `cursor` option changed.

use futures::Stream;
use reqwest::Method;
use serde_json::Value;

use crate::client::RestClient;
use crate::error::{RestError, Result};
use crate::traits::Entity;
use crate::types::{Options, Response};

/// How a cursored page was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub method: Method,
    pub path: String,
    /// Name of the client operation that produced the page, for diagnostics.
    pub resume_method: String,
}

impl PageRequest {
    pub fn new(method: Method, path: impl Into<String>, resume_method: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            resume_method: resume_method.into(),
        }
    }
}

/// One page of a cursored collection.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    response: Response,
    field: String,
    items: Vec<T>,
    client: RestClient,
    request: PageRequest,
    options: Options,
}

/// Read a cursor, preferring the numeric key and falling back to `{key}_str`
/// when the number is missing or not an exact `i64`.
fn cursor_value(body: &Value, key: &str) -> i64 {
    if let Some(n) = body.get(key).and_then(Value::as_i64) {
        return n;
    }
    let text_key = format!("{key}_str");
    match body.get(&text_key).and_then(Value::as_str) {
        Some(text) => text.parse().unwrap_or_else(|_| {
            tracing::warn!(target: "chirp::rest", key = %text_key, value = text, "unreadable cursor, treating as end");
            0
        }),
        None => {
            if body.get(key).is_some_and(|v| !v.is_null()) {
                tracing::warn!(target: "chirp::rest", key, "unreadable cursor, treating as end");
            }
            0
        }
    }
}

impl<T: Entity> Cursor<T> {
    /// Materialize a page from its response.
    ///
    /// `field` names the array inside the body holding this page's items.
    pub fn from_response(
        response: Response,
        field: impl Into<String>,
        client: RestClient,
        request: PageRequest,
        options: Options,
    ) -> Result<Self> {
        let field = field.into();
        let elements = response
            .body
            .get(&field)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                RestError::ParseError(format!(
                    "expected an array at '{field}' in response to {}",
                    request.path
                ))
            })?;
        let items = elements
            .iter()
            .map(|element| T::fetch_or_construct(element, client.identity_cache()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            response,
            field,
            items,
            client,
            request,
            options,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    /// The options this page was requested with (including `cursor`).
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn resume_method(&self) -> &str {
        &self.request.resume_method
    }

    /// `0` when there is no next page.
    pub fn next_cursor(&self) -> i64 {
        cursor_value(&self.response.body, "next_cursor")
    }

    /// `0` when there is no previous page.
    pub fn previous_cursor(&self) -> i64 {
        cursor_value(&self.response.body, "previous_cursor")
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor() == 0
    }

    /// Fetch the following page, or `None` on the last page.
    pub async fn next_page(&self) -> Result<Option<Cursor<T>>> {
        if self.is_last() {
            return Ok(None);
        }
        let options = self.options.clone().with("cursor", self.next_cursor());
        tracing::debug!(
            target: "chirp::rest",
            path = %self.request.path,
            resume = %self.request.resume_method,
            cursor = self.next_cursor(),
            "fetching next page"
        );
        self.client
            .cursor_from_response(
                &self.field,
                self.request.method.clone(),
                &self.request.path,
                options,
                &self.request.resume_method,
            )
            .await
            .map(Some)
    }

    /// Every item from this page onwards, fetching pages lazily.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send + 'static {
        async_stream::try_stream! {
            let mut page = self;
            loop {
                for item in std::mem::take(&mut page.items) {
                    yield item;
                }
                match page.next_page().await? {
                    Some(next) => page = next,
                    None => break,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_cursor_wins() {
        let body = json!({"next_cursor": 42, "next_cursor_str": "7"});
        assert_eq!(cursor_value(&body, "next_cursor"), 42);
    }

    #[test]
    fn inexact_number_falls_back_to_string_key() {
        // float-encoded cursors lose precision; the string form is exact
        let body = json!({
            "next_cursor": 1.6e18,
            "next_cursor_str": "1600000000000000123"
        });
        assert_eq!(cursor_value(&body, "next_cursor"), 1600000000000000123);
    }

    #[test]
    fn missing_cursor_is_zero() {
        assert_eq!(cursor_value(&json!({}), "previous_cursor"), 0);
        assert_eq!(cursor_value(&json!({"next_cursor": null}), "next_cursor"), 0);
    }

    #[test]
    #[tracing_test::traced_test]
    fn out_of_range_cursor_is_reported() {
        let body = json!({
            "next_cursor": 18446744073709551000u64,
            "next_cursor_str": "18446744073709551000"
        });
        assert_eq!(cursor_value(&body, "next_cursor"), 0);
        assert!(logs_contain("unreadable cursor"));
    }
}
