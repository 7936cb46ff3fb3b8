//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TokioSleeper`] - Backoff waits on the tokio timer
//!
//! The [`mock`] submodule provides the test doubles:
//! - [`mock::MockHttpClient`] - Scripted HTTP responses
//! - [`mock::RecordingSleeper`] - Records delays, never waits

pub mod mock;
pub mod reqwest_http;
pub mod tokio_sleep;

pub use mock::{MockHttpClient, MockResponse, RecordingSleeper};
pub use reqwest_http::ReqwestHttpClient;
pub use tokio_sleep::TokioSleeper;
