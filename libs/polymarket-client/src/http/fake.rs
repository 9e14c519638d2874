//! In-memory transport for tests

use super::{HttpRequest, HttpResponse, HttpTransport, Method, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct FakeState {
    responses: HashMap<(Method, String), HttpResponse>,
    requests: Vec<HttpRequest>,
}

/// Replays canned responses keyed by method and path, and records every request
///
/// Clones share state, so a test can hand one clone to a client and inspect
/// the recorded traffic through another. Unregistered routes answer 404.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for `method path`
    pub fn add_response(&self, method: Method, path: impl Into<String>, response: HttpResponse) {
        self.state
            .lock()
            .responses
            .insert((method, path.into()), response);
    }

    /// Register a JSON response for `method path`
    pub fn add_json_response(
        &self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        body: Value,
    ) {
        self.add_response(method, path, HttpResponse::json_body(status, &body));
    }

    /// All requests seen so far, oldest first
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().requests.last().cloned()
    }

    pub fn has_request(&self, method: Method, path: &str) -> bool {
        self.state
            .lock()
            .requests
            .iter()
            .any(|r| r.method == method && r.path == path)
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.responses.clear();
        state.requests.clear();
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut state = self.state.lock();
        let key = (request.method, request.path.clone());
        let response = state.responses.get(&key).cloned().unwrap_or_else(|| {
            HttpResponse::json_body(
                404,
                &json!({
                    "error": "Not Found",
                    "message": format!("No fake response registered for {} {}", key.0, key.1),
                }),
            )
        });
        state.requests.push(request);
        Ok(response)
    }
}
