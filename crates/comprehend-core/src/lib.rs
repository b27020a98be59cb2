#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions shared by the comprehend client crates.
//!
//! The only concern that lives here today is retrying: the HTTP layer of the
//! client decides *whether* a failed attempt may be repeated (see
//! [`retry::Retryable`]), and a [`retry::BackoffStrategy`] decides *when*.
//!
//! ```rust
//! use comprehend_core::prelude::*;
//! use std::time::Duration;
//!
//! #[derive(Debug)]
//! struct Flaky;
//!
//! impl std::fmt::Display for Flaky {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("flaky")
//!     }
//! }
//!
//! impl std::error::Error for Flaky {}
//!
//! impl Retryable for Flaky {
//!     fn retry_decision(&self) -> RetryDecision {
//!         RetryDecision::Retry
//!     }
//! }
//!
//! # async fn example() -> Result<(), Flaky> {
//! let backoff = ExponentialBackoff::builder()
//!     .max_retries(3)
//!     .initial_delay(Duration::from_millis(100))
//!     .build();
//!
//! let value = backoff.execute(|_attempt| async { Ok::<_, Flaky>(42) }).await?;
//! assert_eq!(value, 42);
//! # Ok(())
//! # }
//! ```

pub mod retry;

/// Convenient re-exports of commonly used items.
pub mod prelude {
    pub use crate::retry::{
        BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder, RetryDecision, Retryable,
    };
}
