//! Scripted HTTP client for testing.
//!
//! Responses are served in the order they were pushed, which is what retry
//! tests need: "503, 503, then 200".

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// One scripted outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Mock HTTP client that replays a queue of responses.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.push_status(503, json!({}));
/// client.push_status(200, json!({"candidates": []}));
/// // first post -> 503, second -> 200, later posts -> fallback or error
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<VecDeque<MockResponse>>>,
    fallback: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response.
    pub fn push_response(&self, response: MockResponse) {
        self.script.lock().unwrap().push_back(response);
    }

    /// Queue a response with the given status and JSON body.
    pub fn push_status(&self, status: u16, body: serde_json::Value) {
        self.push_response(MockResponse::Success(Response::json_body(status, &body)));
    }

    /// Queue a transport error.
    pub fn push_error(&self, error: HttpError) {
        self.push_response(MockResponse::Error(error));
    }

    /// Response used once the script is exhausted.
    pub fn set_fallback(&self, response: MockResponse) {
        *self.fallback.lock().unwrap() = Some(response);
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_response(&self) -> Option<MockResponse> {
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return Some(next);
        }
        self.fallback.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });

        match self.next_response() {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
