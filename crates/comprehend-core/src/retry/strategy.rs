//! The retry loop and the classification contract it relies on.

use async_trait::async_trait;
use std::error::Error;
use std::future::Future;
use std::time::Duration;

/// What to do after an attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Try again after the strategy's computed delay.
    Retry,
    /// Try again, waiting at least this long (a server-provided hint).
    RetryAfter(Duration),
    /// Give up and hand the error back to the caller.
    Stop,
}

impl RetryDecision {
    /// Whether this decision allows another attempt.
    pub fn should_retry(&self) -> bool {
        !matches!(self, RetryDecision::Stop)
    }
}

/// An error that knows whether the operation that produced it may be repeated.
pub trait Retryable {
    /// Classify this error.
    fn retry_decision(&self) -> RetryDecision;
}

/// A strategy for retrying failed operations with backoff.
///
/// Implementors only supply the delay schedule ([`next_delay`](Self::next_delay))
/// and the attempt budget ([`max_retries`](Self::max_retries)); the loop itself
/// is shared. The operation closure receives the zero-based attempt number so
/// callers can record how many retries a result took.
///
/// # Examples
///
/// ```rust
/// use comprehend_core::retry::{BackoffStrategy, ExponentialBackoff, RetryDecision};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), std::io::Error> {
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(2)
///     .initial_delay(Duration::from_millis(10))
///     .build();
///
/// // Retry everything except `NotFound`.
/// let value = backoff
///     .execute_with(
///         |_attempt| async { Ok::<_, std::io::Error>("done") },
///         |err: &std::io::Error, _attempt| match err.kind() {
///             std::io::ErrorKind::NotFound => RetryDecision::Stop,
///             _ => RetryDecision::Retry,
///         },
///     )
///     .await?;
/// assert_eq!(value, "done");
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BackoffStrategy: Send + Sync {
    /// Execute an operation, letting the error type decide about retries.
    ///
    /// Equivalent to [`execute_with`](Self::execute_with) using
    /// [`Retryable::retry_decision`] as the classifier.
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Fn(u32) -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Retryable + Send + Sync + 'static,
    {
        self.execute_with(operation, |err: &E, _attempt| err.retry_decision())
            .await
    }

    /// Execute an operation with an explicit classifier.
    ///
    /// The operation is called until it succeeds, the classifier returns
    /// [`RetryDecision::Stop`], or [`max_retries`](Self::max_retries) retries
    /// have been spent. The last error is returned unchanged.
    async fn execute_with<F, Fut, T, E, C>(&self, operation: F, classify: C) -> Result<T, E>
    where
        F: Fn(u32) -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static,
        C: Fn(&E, u32) -> RetryDecision + Send + Sync,
    {
        let mut attempt = 0;
        loop {
            let err = match operation(attempt).await {
                Ok(result) => return Ok(result),
                Err(err) => err,
            };

            let decision = classify(&err, attempt);
            if !decision.should_retry() || attempt >= self.max_retries() {
                return Err(err);
            }

            let computed = self.next_delay(attempt).unwrap_or_default();
            let delay = match decision {
                RetryDecision::RetryAfter(hint) => computed.max(hint),
                _ => computed,
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                attempt = attempt + 1,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Retrying after failed attempt"
            );

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            attempt += 1;
        }
    }

    /// Calculate the delay before the next retry attempt.
    ///
    /// Called after a failure and before sleeping; `attempt` is the zero-based
    /// index of the attempt that just failed. Returning `None` means "retry
    /// immediately".
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Maximum number of retries after the initial attempt.
    ///
    /// With `max_retries() == 3` the operation runs at most 4 times.
    fn max_retries(&self) -> u32;
}
