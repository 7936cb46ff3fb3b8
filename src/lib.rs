//! Signboard - a terminal signboard with clickable signs and an assistant
//! panel backed by a retrying generative-text client.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod query;
pub mod scene;
pub mod terminal;
pub mod traits;
pub mod ui;
