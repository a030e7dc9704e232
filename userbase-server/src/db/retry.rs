//! Fixed-interval bounded retry
//!
//! Every failed attempt except the last is followed by the same delay.
//! No backoff, no jitter. Sleeping goes through `tokio::time`, so tests can
//! run with a paused clock.

use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Default number of attempts, including the first one
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Default pause between attempts
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// How many times to try and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// `attempts` is clamped to at least one.
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Worst-case time spent sleeping before giving up
    pub fn max_wait(&self) -> Duration {
        self.delay * (self.attempts - 1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPTS, DEFAULT_DELAY)
    }
}

/// Returned when every attempt failed
#[derive(Debug)]
pub struct Exhausted<E> {
    pub attempts: u32,
    pub last: E,
}

/// Run `op` until it succeeds or `policy.attempts()` attempts have failed.
///
/// `op` receives the 1-based attempt number.
pub async fn retry_fixed<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, Exhausted<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(attempt, "succeeded after retrying");
                }
                return Ok(value);
            }
            Err(last) if attempt >= policy.attempts => {
                tracing::error!(attempts = attempt, error = %last, "giving up");
                return Err(Exhausted {
                    attempts: attempt,
                    last,
                });
            }
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts = policy.attempts,
                    error = %e,
                    "attempt failed, retrying in {:?}",
                    policy.delay
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    // Paused clock advances to timer deadlines, which tokio rounds to whole
    // milliseconds.
    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(10),
            "elapsed {:?}, expected {:?}",
            elapsed,
            expected
        );
    }

    #[test]
    fn zero_attempts_clamps_to_one() {
        let policy = RetryPolicy::new(0, Duration::from_secs(2));
        assert_eq!(policy.attempts(), 1);
        assert_eq!(policy.max_wait(), Duration::ZERO);
    }

    #[test]
    fn default_worst_case_wait() {
        assert_eq!(RetryPolicy::default().max_wait(), Duration::from_secs(18));
    }

    #[tokio::test(start_paused = true)]
    async fn first_success_does_not_sleep() {
        let start = Instant::now();
        let result = retry_fixed(RetryPolicy::default(), |_| async { Ok::<_, &str>(7) }).await;

        assert_eq!(result.unwrap(), 7);
        assert_elapsed(start, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_on_third_attempt() {
        let mut calls = 0;
        let start = Instant::now();

        let result = retry_fixed(RetryPolicy::default(), |attempt| {
            calls += 1;
            async move {
                if attempt < 3 {
                    Err("connection refused")
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls, 3);
        // two fixed delays, no growth
        assert_elapsed(start, Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_all_attempts() {
        let mut calls = 0;
        let start = Instant::now();

        let result: Result<(), _> = retry_fixed(RetryPolicy::default(), |_| {
            calls += 1;
            async { Err("connection refused") }
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.attempts, 10);
        assert_eq!(err.last, "connection refused");
        assert_eq!(calls, 10);
        // no sleep after the final attempt
        assert_elapsed(start, Duration::from_secs(18));
    }

    #[tokio::test(start_paused = true)]
    async fn single_attempt_policy_fails_fast() {
        let start = Instant::now();
        let result: Result<(), _> =
            retry_fixed(RetryPolicy::new(1, Duration::from_secs(30)), |_| async {
                Err("unreachable")
            })
            .await;

        assert_eq!(result.unwrap_err().attempts, 1);
        assert_elapsed(start, Duration::ZERO);
    }
}
