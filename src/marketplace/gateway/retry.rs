//! Retry policy for transport failures.

use std::time::Duration;

use reqwest::Method;

use crate::marketplace::error::ClientError;

const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_BACKOFF_MILLIS: u64 = 250;

/// How often and how patiently a failed request is retried.
///
/// Only idempotent requests are retried, and only when the failure happened
/// in transport. The wait grows linearly: the first retry waits `backoff`,
/// the second `2 × backoff`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// Creates a policy allowing `max_retries` extra attempts.
    #[must_use]
    pub const fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Returns the number of retries allowed after the first attempt.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Decides whether the request should be attempted again.
    ///
    /// `retries_so_far` counts retries already made, not the first attempt.
    #[must_use]
    pub fn should_retry(&self, method: &Method, error: &ClientError, retries_so_far: u32) -> bool {
        retries_so_far < self.max_retries && error.is_retryable() && is_idempotent(method)
    }

    /// Delay before retry number `retry` (1-based).
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.backoff.saturating_mul(retry)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_RETRIES,
            Duration::from_millis(DEFAULT_BACKOFF_MILLIS),
        )
    }
}

fn is_idempotent(method: &Method) -> bool {
    [Method::GET, Method::HEAD, Method::PUT, Method::DELETE].contains(method)
}
