//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client replaying a scripted queue of responses
//! - [`RecordingSleeper`] - Sleeper that records backoff delays without waiting

pub mod http;
pub mod sleep;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use sleep::RecordingSleeper;
