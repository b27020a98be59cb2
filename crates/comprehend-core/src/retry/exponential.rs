//! Exponential backoff with jitter.

use super::strategy::BackoffStrategy;
use std::time::Duration;

/// Exponential backoff strategy with configurable jitter.
///
/// Delays grow as `initial_delay * multiplier^attempt`, are randomized by
/// `±jitter` and capped at `max_delay`.
///
/// ```text
/// base_delay   = initial_delay * (multiplier ^ n)
/// jittered     = base_delay + base_delay * jitter * random(-1.0, 1.0)
/// final_delay  = min(jittered, max_delay)
/// ```
///
/// # Examples
///
/// ```rust
/// use comprehend_core::retry::ExponentialBackoff;
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(5)
///     .initial_delay(Duration::from_millis(100))
///     .max_delay(Duration::from_secs(20))
///     .jitter(0.1)
///     .build();
/// # let _ = backoff;
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    max_retries: u32,
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: f64,
    jitter: f64,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// A strategy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

impl Default for ExponentialBackoff {
    /// Defaults: 3 retries, 100ms initial delay, 20s cap, doubling, 10% jitter.
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(20),
            multiplier: 2.0,
            jitter: 0.1,
        }
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        // attempt 0 is the delay before the first retry
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let base_delay = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);

        let jittered = if self.jitter > 0.0 {
            let jitter_amount = base_delay * self.jitter * (rand::random::<f64>() - 0.5) * 2.0;
            base_delay + jitter_amount
        } else {
            base_delay
        };

        let capped = jittered.min(self.max_delay.as_secs_f64()).max(0.0);
        Some(Duration::from_secs_f64(capped))
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

/// Builder for configuring [`ExponentialBackoff`].
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    max_retries: Option<u32>,
    initial_delay: Option<Duration>,
    max_delay: Option<Duration>,
    multiplier: Option<f64>,
    jitter: Option<f64>,
}

impl ExponentialBackoffBuilder {
    /// Set the maximum number of retry attempts. Default: 3
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Set the delay before the first retry. Default: 100ms
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Set the maximum delay between retries. Default: 20s
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = Some(delay);
        self
    }

    /// Set the exponential multiplier. Default: 2.0
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Set the jitter factor, clamped to `0.0..=1.0`. Default: 0.1
    pub fn jitter(mut self, jitter: f64) -> Self {
        self.jitter = Some(jitter.clamp(0.0, 1.0));
        self
    }

    /// Build the `ExponentialBackoff`, using defaults for unset parameters.
    pub fn build(self) -> ExponentialBackoff {
        let defaults = ExponentialBackoff::default();
        ExponentialBackoff {
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            initial_delay: self.initial_delay.unwrap_or(defaults.initial_delay),
            max_delay: self.max_delay.unwrap_or(defaults.max_delay),
            multiplier: self.multiplier.unwrap_or(defaults.multiplier),
            jitter: self.jitter.unwrap_or(defaults.jitter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::{RetryDecision, Retryable};
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, thiserror::Error)]
    enum TestError {
        #[error("transient")]
        Transient,
        #[error("fatal")]
        Fatal,
        #[error("throttled")]
        Throttled,
    }

    impl Retryable for TestError {
        fn retry_decision(&self) -> RetryDecision {
            match self {
                TestError::Transient => RetryDecision::Retry,
                TestError::Fatal => RetryDecision::Stop,
                TestError::Throttled => RetryDecision::RetryAfter(Duration::from_millis(5)),
            }
        }
    }

    fn fast(max_retries: u32) -> ExponentialBackoff {
        ExponentialBackoff::builder()
            .max_retries(max_retries)
            .initial_delay(Duration::from_millis(1))
            .jitter(0.0)
            .build()
    }

    #[test]
    fn test_exponential_delay_calculation() {
        let backoff = ExponentialBackoff {
            max_retries: 5,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
            jitter: 0.0,
        };

        assert_eq!(backoff.next_delay(0).unwrap(), Duration::from_millis(100));
        assert_eq!(backoff.next_delay(1).unwrap(), Duration::from_millis(200));
        assert_eq!(backoff.next_delay(2).unwrap(), Duration::from_millis(400));
        assert_eq!(backoff.next_delay(3).unwrap(), Duration::from_millis(800));
    }

    #[test]
    fn test_max_delay_cap() {
        let backoff = ExponentialBackoff {
            max_retries: 100,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(5),
            multiplier: 10.0,
            jitter: 0.0,
        };

        for attempt in 5..10 {
            assert!(backoff.next_delay(attempt).unwrap() <= Duration::from_secs(5));
        }
    }

    #[tokio::test]
    async fn test_retry_success_on_third_attempt() {
        let backoff = fast(5);
        let attempts = Arc::new(AtomicU32::new(0));

        let result = backoff
            .execute(|_| {
                let attempts = Arc::clone(&attempts);
                async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(TestError::Transient)
                    } else {
                        Ok(42)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_attempt_index_is_passed_through() {
        let backoff = fast(3);
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

        let _ = backoff
            .execute(|attempt| {
                let seen = Arc::clone(&seen);
                async move {
                    seen.lock().unwrap().push(attempt);
                    Err::<(), _>(TestError::Transient)
                }
            })
            .await;

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_max_retries_exceeded() {
        let backoff = fast(2);
        let attempts = Arc::new(AtomicU32::new(0));

        let result = backoff
            .execute(|_| {
                let attempts = Arc::clone(&attempts);
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(TestError::Transient)
                }
            })
            .await;

        assert!(matches!(result, Err(TestError::Transient)));
        // initial attempt + 2 retries
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_stop_decision_is_not_retried() {
        let backoff = fast(5);
        let attempts = Arc::new(AtomicU32::new(0));

        let result = backoff
            .execute(|_| {
                let attempts = Arc::clone(&attempts);
                async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(TestError::Fatal)
                }
            })
            .await;

        assert!(matches!(result, Err(TestError::Fatal)));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_after_hint_is_honoured() {
        let backoff = fast(1);
        let attempts = Arc::new(AtomicU32::new(0));
        let started = std::time::Instant::now();

        let result = backoff
            .execute(|_| {
                let attempts = Arc::clone(&attempts);
                async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(TestError::Throttled)
                    } else {
                        Ok("ok")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "ok");
        assert!(started.elapsed() >= Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_custom_classifier_overrides_error() {
        let backoff = fast(5);
        let attempts = Arc::new(AtomicU32::new(0));

        // Transient errors are normally retried; this classifier refuses.
        let result = backoff
            .execute_with(
                |_| {
                    let attempts = Arc::clone(&attempts);
                    async move {
                        attempts.fetch_add(1, Ordering::SeqCst);
                        Err::<(), _>(TestError::Transient)
                    }
                },
                |_err: &TestError, _| RetryDecision::Stop,
            )
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_jitter_variation() {
        let backoff = ExponentialBackoff {
            max_retries: 10,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            multiplier: 2.0,
            jitter: 0.5,
        };

        let delays: Vec<_> = (0..20).map(|_| backoff.next_delay(0).unwrap()).collect();
        for delay in &delays {
            assert!((500..=1500).contains(&delay.as_millis()));
        }
        assert!(!delays.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_builder_defaults() {
        let backoff = ExponentialBackoff::builder().build();

        assert_eq!(backoff.max_retries, 3);
        assert_eq!(backoff.initial_delay, Duration::from_millis(100));
        assert_eq!(backoff.max_delay, Duration::from_secs(20));
        assert_eq!(backoff.multiplier, 2.0);
        assert_eq!(backoff.jitter, 0.1);
    }

    #[test]
    fn test_none_never_retries() {
        let backoff = ExponentialBackoff::none();
        assert_eq!(backoff.max_retries(), 0);

        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();
        let result: Result<(), TestError> = tokio_test::block_on(backoff.execute(|_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(TestError::Transient)
            }
        }));

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_jitter_clamped() {
        assert_eq!(ExponentialBackoff::builder().jitter(2.0).build().jitter, 1.0);
        assert_eq!(ExponentialBackoff::builder().jitter(-0.5).build().jitter, 0.0);
    }

    proptest! {
        #[test]
        fn prop_delay_never_exceeds_cap(attempt in 0u32..64, jitter in 0.0f64..1.0, cap_ms in 1u64..30_000) {
            let backoff = ExponentialBackoff::builder()
                .initial_delay(Duration::from_millis(50))
                .max_delay(Duration::from_millis(cap_ms))
                .jitter(jitter)
                .build();
            let delay = backoff.next_delay(attempt).unwrap();
            prop_assert!(delay <= Duration::from_millis(cap_ms));
        }
    }
}
