use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::domain::common::{RetryConfig, entities::app_errors::CoreError};

/// Bounded retry with randomized exponential backoff.
///
/// Before attempt `n + 1` the policy sleeps a random duration drawn from
/// `[min_backoff, clamp(min_backoff * 2^(n - 1), min_backoff, max_backoff)]`.
/// Errors that are not [`CoreError::is_retryable`] end the loop immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    min_backoff: Duration,
    max_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, min_backoff: Duration, max_backoff: Duration) -> Self {
        let max_backoff = max_backoff.max(min_backoff);
        Self {
            max_attempts: max_attempts.max(1),
            min_backoff,
            max_backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Upper bound of the wait that follows the given (1-based) failed attempt.
    pub fn backoff_ceiling(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.min_backoff
            .saturating_mul(factor)
            .clamp(self.min_backoff, self.max_backoff)
    }

    pub fn backoff(&self, attempt: u32) -> Duration {
        let low = self.min_backoff.as_secs_f64();
        let high = self.backoff_ceiling(attempt).as_secs_f64();
        let secs = rand::thread_rng().gen_range(low..=high);
        Duration::from_secs_f64(secs)
    }

    /// Runs `operation` until it succeeds, fails with a non-retryable error,
    /// or the attempt budget is spent. The closure receives the 1-based
    /// attempt number. The last error is returned on exhaustion.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, CoreError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) if attempt >= self.max_attempts => {
                    warn!(attempt, "giving up after {} attempts: {}", attempt, e);
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.backoff(attempt);
                    warn!(attempt, "attempt failed: {}", e);
                    debug!("backing off for {:?} before retry", delay);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl From<RetryConfig> for RetryPolicy {
    fn from(config: RetryConfig) -> Self {
        Self::new(config.max_attempts, config.min_backoff, config.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryConfig::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_secs(1), Duration::from_secs(4))
    }

    #[test]
    fn test_backoff_ceiling_grows_and_caps() {
        let policy = policy();
        assert_eq!(policy.backoff_ceiling(1), Duration::from_secs(1));
        assert_eq!(policy.backoff_ceiling(2), Duration::from_secs(2));
        assert_eq!(policy.backoff_ceiling(3), Duration::from_secs(4));
        assert_eq!(policy.backoff_ceiling(10), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_stays_within_window() {
        let policy = policy();
        for attempt in 1..6 {
            let delay = policy.backoff(attempt);
            assert!(delay >= Duration::from_secs(1));
            assert!(delay <= policy.backoff_ceiling(attempt));
        }
    }

    #[test]
    fn test_new_normalizes_bounds() {
        let policy = RetryPolicy::new(0, Duration::from_secs(3), Duration::from_secs(1));
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.backoff_ceiling(5), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = policy()
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err(CoreError::UpstreamServiceError("flaky".to_string()))
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_returns_last_error_when_exhausted() {
        let calls = AtomicU32::new(0);
        let result: Result<(), CoreError> = policy()
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(CoreError::UpstreamServiceError(format!("failure {attempt}"))) }
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::UpstreamServiceError("failure 3".to_string()))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_does_not_retry_configuration_errors() {
        let calls = AtomicU32::new(0);
        let result: Result<(), CoreError> = policy()
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(CoreError::ConfigurationError("missing key".to_string())) }
            })
            .await;

        assert!(matches!(result, Err(CoreError::ConfigurationError(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
