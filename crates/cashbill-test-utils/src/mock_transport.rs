//! Mock implementation of the `HttpTransport` trait for testing.
//!
//! Replays scripted responses in order and records every request sent,
//! so tests can assert on URLs, parameters and call counts.

use async_trait::async_trait;
use cashbill_client::{
    ClientError, ClientResult, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

struct MockTransportInner {
    /// Responses returned in order, one per request.
    responses: VecDeque<HttpResponse>,
    /// Returned once the queue is empty.
    fallback: Option<HttpResponse>,
    /// Every request received, in order.
    requests: Vec<HttpRequest>,
    /// When true, every request fails with a transport error.
    should_fail: bool,
}

/// A mock implementation of the `HttpTransport` trait for testing.
///
/// Uses `Arc<RwLock<...>>` internally, so it is cheap to clone and all
/// clones share the same state. Hand one clone to the client and keep the
/// other for assertions.
#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<RwLock<MockTransportInner>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Create a transport with no scripted responses.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MockTransportInner {
                responses: VecDeque::new(),
                fallback: None,
                requests: Vec::new(),
                should_fail: false,
            })),
        }
    }

    /// Queue a response.
    pub fn with_response(self, response: HttpResponse) -> Self {
        self.push_response(response);
        self
    }

    /// Queue a 200 response carrying `body` as JSON.
    pub fn with_json(self, body: serde_json::Value) -> Self {
        self.with_response(HttpResponse::ok(body.to_string()))
    }

    /// Response returned whenever the queue is empty.
    pub fn with_fallback(self, response: HttpResponse) -> Self {
        self.inner.write().unwrap().fallback = Some(response);
        self
    }

    /// Configure the mock to fail all requests.
    pub fn with_failure(self) -> Self {
        self.inner.write().unwrap().should_fail = true;
        self
    }

    /// Queue a response at runtime.
    pub fn push_response(&self, response: HttpResponse) {
        self.inner.write().unwrap().responses.push_back(response);
    }

    /// Set the failure mode at runtime.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.inner.write().unwrap().should_fail = should_fail;
    }

    // =========================================================================
    // Assertion Helpers
    // =========================================================================

    /// Get all requests received.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.read().unwrap().requests.clone()
    }

    /// Get the most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.read().unwrap().requests.last().cloned()
    }

    /// Get the number of requests received.
    pub fn request_count(&self) -> usize {
        self.inner.read().unwrap().requests.len()
    }

    /// Get the number of requests received with the given method.
    pub fn count_method(&self, method: HttpMethod) -> usize {
        self.inner
            .read()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .count()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let mut inner = self.inner.write().unwrap();
        inner.requests.push(request);

        if inner.should_fail {
            return Err(ClientError::Transport("mock: configured to fail".into()));
        }

        match inner.responses.pop_front() {
            Some(response) => Ok(response),
            None => inner
                .fallback
                .clone()
                .ok_or_else(|| ClientError::Transport("mock: no response queued".into())),
        }
    }
}
