//! Shared fixtures for integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use chirp::prelude::*;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One request observed by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub params: Options,
}

struct Route {
    method: Method,
    path: String,
    params: Options,
    delay: Duration,
    reply: Result<Value, RestError>,
}

impl Route {
    fn matches(&self, method: &Method, path: &str, params: &Options) -> bool {
        self.method == *method
            && self.path == path
            && self
                .params
                .iter()
                .all(|(k, v)| params.get(k).map(ToString::to_string) == Some(v.to_string()))
    }
}

/// In-memory transport with per-path, per-parameter canned replies.
///
/// Routes are matched in registration order; a route matches when the method
/// and path are equal and every parameter it names renders the same in the
/// request. Unmatched requests fail with `NotFound`.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    calls: Mutex<Vec<Call>>,
    completed: Mutex<Vec<Call>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn route(
        &self,
        method: Method,
        path: &str,
        params: Options,
        delay: Duration,
        reply: Result<Value, RestError>,
    ) {
        self.routes.lock().unwrap().push(Route {
            method,
            path: path.to_string(),
            params,
            delay,
            reply,
        });
    }

    pub fn respond(&self, method: Method, path: &str, body: Value) {
        self.route(method, path, Options::new(), Duration::ZERO, Ok(body));
    }

    pub fn respond_when(&self, method: Method, path: &str, params: Options, body: Value) {
        self.route(method, path, params, Duration::ZERO, Ok(body));
    }

    pub fn respond_after(
        &self,
        method: Method,
        path: &str,
        params: Options,
        delay: Duration,
        body: Value,
    ) {
        self.route(method, path, params, delay, Ok(body));
    }

    pub fn fail_when(
        &self,
        method: Method,
        path: &str,
        params: Options,
        delay: Duration,
        error: RestError,
    ) {
        self.route(method, path, params, delay, Err(error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }

    /// Requests whose reply has been produced, in completion order.
    pub fn completed(&self) -> Vec<Call> {
        self.completed.lock().unwrap().clone()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Options,
    ) -> Result<Response, RestError> {
        let call = Call {
            method: method.clone(),
            path: path.to_string(),
            params: params.clone(),
        };
        self.calls.lock().unwrap().push(call.clone());

        let found = {
            let routes = self.routes.lock().unwrap();
            routes
                .iter()
                .find(|r| r.matches(&method, path, params))
                .map(|r| (r.delay, r.reply.clone()))
        };
        let (delay, reply) = found.unwrap_or_else(|| {
            (
                Duration::ZERO,
                Err(RestError::NotFound(format!("no route for {method} {path}"))),
            )
        });

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.lock().unwrap().push(call);

        reply.map(Response::ok)
    }
}

pub fn client_with(transport: Arc<MockTransport>, config: ClientConfig) -> RestClient {
    RestClient::new(transport, config)
}

pub fn client(transport: Arc<MockTransport>) -> RestClient {
    client_with(
        transport,
        ClientConfig::builder().base_url("http://mock.invalid").build(),
    )
}

pub fn user_json(id: u64, screen_name: &str) -> Value {
    serde_json::json!({ "id": id, "screen_name": screen_name })
}
