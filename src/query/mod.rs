//! Assistant query client.
//!
//! [`QueryClient::query`] turns a free-text question into the model's answer,
//! retrying transient failures with [`BackoffPolicy`].

pub mod backoff;
pub mod client;
pub mod payload;

pub use backoff::{BackoffPolicy, RetryState};
pub use client::{validate_question, QueryClient, QueryResult};
pub use payload::{GenerateRequest, GenerateResponse};
