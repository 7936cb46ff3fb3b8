//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP POST to the generative-text endpoint
//! - [`Sleeper`] - Backoff waits between retry attempts

pub mod http;
pub mod sleep;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use sleep::Sleeper;
