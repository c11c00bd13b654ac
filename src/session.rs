//! Per-session state shared by clones of a client.

use std::future::Future;
use tokio::sync::OnceCell;

use crate::error::Result;

/// Session-scoped values resolved at most once.
#[derive(Debug, Default)]
pub struct Session {
    screen_name: OnceCell<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose authenticated handle is already known.
    pub fn with_screen_name(screen_name: impl Into<String>) -> Self {
        Self {
            screen_name: OnceCell::new_with(Some(screen_name.into())),
        }
    }

    /// The authenticated handle, if resolved.
    pub fn screen_name(&self) -> Option<&str> {
        self.screen_name.get().map(String::as_str)
    }

    /// Resolve the authenticated handle with `init` on first use.
    ///
    /// Concurrent first callers wait on a single `init`; a failed `init`
    /// leaves the cell empty so a later call can retry.
    pub async fn screen_name_or_try_init<F, Fut>(&self, init: F) -> Result<&str>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        self.screen_name
            .get_or_try_init(init)
            .await
            .map(String::as_str)
    }
}
