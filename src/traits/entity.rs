//! Entity capability trait.

use serde_json::Value;

use crate::cache::IdentityCache;
use crate::error::Result;
use crate::types::Response;

/// A typed domain object materialized from a response.
///
/// Implementors only need [`Entity::from_element`]; the single-object path
/// defaults to reading the envelope's body, and the collection path defaults to
/// an identity-cache lookup keyed by the element's numeric `id`.
pub trait Entity: Sized + Clone + Send + Sync + 'static {
    /// Build from one element of a response body.
    fn from_element(element: &Value) -> Result<Self>;

    /// Build from a whole response envelope.
    fn from_response(response: &Response) -> Result<Self> {
        Self::from_element(&response.body)
    }

    /// Identity of a raw element, if it carries one.
    fn identity(element: &Value) -> Option<u64> {
        element.get("id").and_then(Value::as_u64)
    }

    /// Return the cached instance for this element's identity, or build one.
    fn fetch_or_construct(element: &Value, cache: &IdentityCache) -> Result<Self> {
        match Self::identity(element) {
            Some(id) => cache.fetch_or_insert_with(id, || Self::from_element(element)),
            None => Self::from_element(element),
        }
    }
}
