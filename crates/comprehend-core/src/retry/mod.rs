//! Retry strategies and backoff implementations.
//!
//! # Key Types
//!
//! - [`Retryable`] - lets an error type classify itself
//! - [`RetryDecision`] - the outcome of that classification
//! - [`BackoffStrategy`] - drives the attempt loop
//! - [`ExponentialBackoff`] - exponential backoff with jitter

mod exponential;
mod strategy;

pub use exponential::{ExponentialBackoff, ExponentialBackoffBuilder};
pub use strategy::{BackoffStrategy, RetryDecision, Retryable};
