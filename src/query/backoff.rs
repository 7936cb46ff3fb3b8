//! Exponential backoff between query attempts.

use std::time::Duration;

use crate::config::QueryConfig;

/// Delay schedule: `base * 2^(n-1)` before retry `n`, optionally capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Option<Duration>,
}

impl BackoffPolicy {
    pub fn from_config(config: &QueryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: config.base_delay,
            max_delay: config.max_delay,
        }
    }

    /// Delay before retry `n` (1-based). Saturates instead of overflowing.
    pub fn delay_for_retry(&self, n: u32) -> Duration {
        let exponent = n.saturating_sub(1).min(31);
        let delay = self
            .base_delay
            .checked_mul(1u32 << exponent)
            .unwrap_or(Duration::MAX);
        match self.max_delay {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }

    /// Fresh per-invocation retry state.
    pub fn start(&self) -> RetryState {
        RetryState {
            attempt: 0,
            policy: *self,
        }
    }
}

/// Attempt counter for one query invocation.
#[derive(Debug, Clone)]
pub struct RetryState {
    attempt: u32,
    policy: BackoffPolicy,
}

impl RetryState {
    /// Zero-based index of the attempt about to be made.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Attempts made so far, once the current one has completed.
    pub fn attempts_made(&self) -> u32 {
        self.attempt + 1
    }

    /// Whether another attempt is allowed after the current one.
    pub fn has_remaining(&self) -> bool {
        self.attempt + 1 < self.policy.max_attempts
    }

    /// Advance to the next attempt, returning the delay to wait first.
    pub fn advance(&mut self) -> Duration {
        self.attempt += 1;
        self.policy.delay_for_retry(self.attempt)
    }
}
