//! REST client: request helpers and response materialization.
//!
//! `RestClient` owns the transport, the session, and the identity cache. Every
//! higher-level endpoint is expressed through the fetchers defined here:
//!
//! - `object_from_response`: one request, one entity built from the whole envelope
//! - `objects_from_response`: one request, an array body mapped element-wise
//! - `parallel_*`: one single-object request per identifier, run concurrently,
//!   collated in input order
//! - `cursor_from_response`: one request for a cursored page, returning a
//!   [`Cursor`] that can fetch the pages after it
//!
//! Cloning a client is cheap; clones share the transport, session, and cache.

use futures::future::try_join_all;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::cache::IdentityCache;
use crate::config::ClientConfig;
use crate::defaults;
use crate::error::{RestError, Result};
use crate::execution::interceptor::HttpInterceptor;
use crate::execution::{ReqwestTransport, Transport};
use crate::params::{IdArgs, UserArgs, merge_user, merge_user_mut};
use crate::session::Session;
use crate::traits::Entity;
use crate::types::{Cursor, Options, PageRequest, Response, User, UserIdentifier};

/// Client for the platform's REST API.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
    session: Arc<Session>,
    cache: Arc<IdentityCache>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.config.base_url)
            .field("session", &self.session)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Create a client over any transport.
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        let cache = IdentityCache::new(config.identity_cache_capacity);
        Self {
            transport,
            config: Arc::new(config),
            session: Arc::new(Session::new()),
            cache: Arc::new(cache),
        }
    }

    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// Replace the session (e.g. one with a known screen name).
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Arc::new(session);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn identity_cache(&self) -> &IdentityCache {
        &self.cache
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    /// Send one request through the transport.
    pub async fn perform_request(
        &self,
        method: Method,
        path: &str,
        options: &Options,
    ) -> Result<Response> {
        tracing::debug!(target: "chirp::rest", %method, path, params = options.len(), "perform request");
        self.transport.send(method, path, options).await
    }

    pub async fn perform_get(&self, path: &str, options: &Options) -> Result<Response> {
        self.perform_request(Method::GET, path, options).await
    }

    pub async fn perform_post(&self, path: &str, options: &Options) -> Result<Response> {
        self.perform_request(Method::POST, path, options).await
    }

    // ========================================================================
    // Single object and collections
    // ========================================================================

    /// One request, one entity built from the whole response envelope.
    pub async fn object_from_response<T: Entity>(
        &self,
        method: Method,
        path: &str,
        options: Options,
    ) -> Result<T> {
        let response = self.perform_request(method, path, &options).await?;
        T::from_response(&response)
    }

    /// One request whose body must be an array; each element becomes an entity.
    pub async fn objects_from_response<T: Entity>(
        &self,
        method: Method,
        path: &str,
        options: Options,
    ) -> Result<Vec<T>> {
        let response = self.perform_request(method, path, &options).await?;
        let items = self.objects_from_array::<T>(&response.body)?;
        tracing::debug!(target: "chirp::rest", path, items = items.len(), "materialized collection");
        Ok(items)
    }

    /// Map an array body element-wise, consulting the identity cache.
    pub fn objects_from_array<T: Entity>(&self, body: &Value) -> Result<Vec<T>> {
        let elements = body.as_array().ok_or_else(|| {
            RestError::ParseError(format!("expected an array body, got {}", json_kind(body)))
        })?;
        elements
            .iter()
            .map(|element| T::fetch_or_construct(element, &self.cache))
            .collect()
    }

    /// Collection fetch where the trailing identifier selects whose
    /// collection is listed. Without an identifier the options pass through.
    pub async fn objects_from_response_with_user<T: Entity>(
        &self,
        method: Method,
        path: &str,
        args: UserArgs,
    ) -> Result<Vec<T>> {
        let UserArgs { mut users, mut options } = args;
        if let Some(user) = users.pop() {
            merge_user_mut(&mut options, &user, None);
        }
        self.objects_from_response(method, path, options).await
    }

    /// User collection fetch defaulting to the authenticated user when neither
    /// `user_id` nor `screen_name` is set and no identifier is given.
    pub async fn user_objects_from_response(
        &self,
        method: Method,
        path: &str,
        args: UserArgs,
    ) -> Result<Vec<User>> {
        let options = self.merge_default_user(args).await?;
        self.objects_from_response(method, path, options).await
    }

    // ========================================================================
    // Parallel fetches
    // ========================================================================

    /// One single-object request per id, with `id` set on top of the shared
    /// options. Results follow the order of `args.ids`.
    pub async fn parallel_object_from_response<T: Entity>(
        &self,
        method: Method,
        path: &str,
        args: IdArgs,
    ) -> Result<Vec<T>> {
        let IdArgs { ids, options } = args;
        let units = ids
            .into_iter()
            .map(|id| options.clone().with("id", id))
            .collect();
        self.parallel_fetch(method, path, units).await
    }

    /// One single-object request per user identifier. Results follow the
    /// order of `args.users`.
    pub async fn parallel_user_objects_from_response(
        &self,
        method: Method,
        path: &str,
        args: UserArgs,
    ) -> Result<Vec<User>> {
        let UserArgs { users, options } = args;
        let units = users
            .iter()
            .map(|user| merge_user(&options, user, None))
            .collect();
        self.parallel_fetch(method, path, units).await
    }

    /// Fan out one task per options bag, bounded by `max_concurrency`.
    ///
    /// Tasks are detached from the join: when one fails the aggregate fails
    /// immediately while the remaining requests run to completion.
    async fn parallel_fetch<T: Entity>(
        &self,
        method: Method,
        path: &str,
        units: Vec<Options>,
    ) -> Result<Vec<T>> {
        tracing::debug!(target: "chirp::rest", %method, path, units = units.len(), "parallel fetch");
        let permits = Arc::new(Semaphore::new(self.config.max_concurrency.max(1)));
        let path: Arc<str> = Arc::from(path);

        let handles = units.into_iter().map(|options| {
            let client = self.clone();
            let method = method.clone();
            let path = Arc::clone(&path);
            let permits = Arc::clone(&permits);
            tokio::spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| RestError::InternalError(format!("fetch limiter closed: {e}")))?;
                client.object_from_response::<T>(method, &path, options).await
            })
        });

        try_join_all(handles.map(|handle| async move { handle.await? })).await
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    /// Fetch one cursored page.
    ///
    /// `cursor` defaults to `-1` (first page) only when absent; an explicit
    /// value, including `0`, is sent as given. `field` names the array of
    /// items in the body and `resume_method` labels the page for diagnostics.
    pub async fn cursor_from_response<T: Entity>(
        &self,
        field: &str,
        method: Method,
        path: &str,
        mut options: Options,
        resume_method: &str,
    ) -> Result<Cursor<T>> {
        options.insert_if_absent("cursor", defaults::fetch::FIRST_PAGE_CURSOR);
        let response = self.perform_request(method.clone(), path, &options).await?;
        Cursor::from_response(
            response,
            field,
            self.clone(),
            PageRequest::new(method, path, resume_method),
            options,
        )
    }

    /// Cursored fetch with the same identity defaulting as
    /// [`RestClient::user_objects_from_response`].
    pub async fn cursor_from_response_with_user<T: Entity>(
        &self,
        field: &str,
        method: Method,
        path: &str,
        args: UserArgs,
        resume_method: &str,
    ) -> Result<Cursor<T>> {
        let options = self.merge_default_user(args).await?;
        self.cursor_from_response(field, method, path, options, resume_method)
            .await
    }

    // ========================================================================
    // Current user
    // ========================================================================

    /// The authenticated account.
    pub async fn verify_credentials(&self) -> Result<User> {
        self.object_from_response(
            Method::GET,
            &self.config.verify_credentials_path,
            Options::new(),
        )
        .await
    }

    /// The authenticated account's handle, resolved once per session.
    pub async fn current_screen_name(&self) -> Result<String> {
        self.session
            .screen_name_or_try_init(|| async {
                let user = self.verify_credentials().await?;
                tracing::debug!(target: "chirp::rest", screen_name = %user.screen_name, "resolved current user");
                Ok(user.screen_name)
            })
            .await
            .map(str::to_string)
    }

    async fn merge_default_user(&self, args: UserArgs) -> Result<Options> {
        let UserArgs { mut users, mut options } = args;
        if options.contains_key("user_id") || options.contains_key("screen_name") {
            return Ok(options);
        }
        let user = match users.pop() {
            Some(user) => user,
            None => UserIdentifier::ScreenName(self.current_screen_name().await?),
        };
        merge_user_mut(&mut options, &user, None);
        Ok(options)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builder for [`RestClient`].
#[derive(Default)]
pub struct RestClientBuilder {
    config: Option<ClientConfig>,
    transport: Option<Arc<dyn Transport>>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
    http_debug: bool,
    session: Option<Session>,
}

impl RestClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom transport instead of `reqwest`. Interceptors only apply to
    /// the built-in transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Enable the built-in `tracing` logging interceptor.
    pub fn http_debug(mut self, enabled: bool) -> Self {
        self.http_debug = enabled;
        self
    }

    pub fn screen_name(mut self, screen_name: impl Into<String>) -> Self {
        self.session = Some(Session::with_screen_name(screen_name));
        self
    }

    pub fn build(self) -> Result<RestClient> {
        let config = self.config.unwrap_or_default();
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let mut interceptors = self.interceptors;
                if self.http_debug {
                    interceptors.push(Arc::new(crate::execution::LoggingInterceptor));
                }
                Arc::new(ReqwestTransport::new(&config)?.with_interceptors(interceptors))
            }
        };
        let client = RestClient::new(transport, config);
        Ok(match self.session {
            Some(session) => client.with_session(session),
            None => client,
        })
    }
}
