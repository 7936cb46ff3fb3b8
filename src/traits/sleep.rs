//! Timer abstraction used between retry attempts.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the calling task for a backoff delay.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
