//! Retry with exponential backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// How often and how patiently an outbound call is retried.
///
/// Shared read-only by every request; build it once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt (total attempts = 1 + max_retries)
    pub max_retries: u32,
    /// Backoff unit; retry `n` waits `base_delay * 2^n`
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    /// 3 retries waiting 2s, 4s and 8s.
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// A policy that makes a single attempt.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Sum of every backoff delay the policy can incur.
    pub fn total_backoff(&self) -> Duration {
        (1..=self.max_retries)
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }

    /// Longest a full retry sequence can take when every attempt runs to
    /// `attempt_timeout`.
    pub fn worst_case(&self, attempt_timeout: Duration) -> Duration {
        attempt_timeout
            .saturating_mul(self.max_retries.saturating_add(1))
            .saturating_add(self.total_backoff())
    }
}

/// Runs `operation` until it succeeds or the policy's retries are used up.
///
/// Retries are sequential. Dropping the returned future abandons the current
/// attempt and any pending backoff.
pub async fn with_retry<F, Fut, T, E>(policy: RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(val) => return Ok(val),
            Err(err) => {
                if attempt >= policy.max_retries {
                    return Err(err);
                }
                attempt += 1;
                let delay = policy.delay_for(attempt);
                warn!(
                    error = %err,
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "Upstream call failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
