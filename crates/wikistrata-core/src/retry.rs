//! Retry policy for upstream requests.

use std::time::Duration;

/// Retry policy applied to each SPARQL request.
///
/// `max_attempts` counts the initial attempt, so the default of 3 means
/// one request plus at most two retries. The delay between attempts is
/// fixed; Wikidata's rate limiter reacts badly to bursts, not to shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub retry_on_status: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_millis(1000),
            retry_on_status: vec![429, 503, 504],
        }
    }
}

impl RetryConfig {
    pub fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts,
            retry_delay,
            ..Self::default()
        }
    }

    /// A policy that never retries. Used by tests that assert terminal
    /// classification without waiting out delays.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            retry_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Whether a non-2xx status is worth another attempt.
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_on_status.contains(&status)
    }
}
