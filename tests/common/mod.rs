//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use signboard::adapters::{MockHttpClient, RecordingSleeper, ReqwestHttpClient};
use signboard::app::App;
use signboard::config::QueryConfig;
use signboard::dispatch::Viewport;
use signboard::query::QueryClient;

pub const TEST_MODEL: &str = "test-model";
pub const TEST_KEY: &str = "test-key";

/// Path the client posts to for [`TEST_MODEL`].
pub fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", TEST_MODEL)
}

/// A successful `generateContent` body answering `text`.
pub fn answer_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    })
}

/// An API error body carrying `message`.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": { "code": 400, "message": message, "status": "INVALID_ARGUMENT" } })
}

pub fn test_config(api_url: &str) -> QueryConfig {
    QueryConfig::default()
        .with_api_url(api_url)
        .with_model(TEST_MODEL)
        .with_api_key(TEST_KEY)
}

/// Client against a real HTTP endpoint with backoff waits recorded, not
/// slept.
pub fn http_client(config: QueryConfig, sleeper: &RecordingSleeper) -> QueryClient {
    let http = ReqwestHttpClient::with_timeout(config.request_timeout).expect("reqwest client");
    QueryClient::new(config, Arc::new(http), Arc::new(sleeper.clone()))
}

pub fn mock_client(http: &MockHttpClient) -> QueryClient {
    QueryClient::new(
        test_config("http://signboard.test"),
        Arc::new(http.clone()),
        Arc::new(RecordingSleeper::new()),
    )
}

/// App on a 100x40 viewport backed by `http`.
pub fn test_app(http: &MockHttpClient) -> App {
    App::new(mock_client(http), Viewport::new(100, 40)).expect("default scene")
}

pub fn millis(values: &[u64]) -> Vec<Duration> {
    values.iter().map(|ms| Duration::from_millis(*ms)).collect()
}
