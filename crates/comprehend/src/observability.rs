//! Structured logging for operation calls
//!
//! Every HTTP attempt is logged through this module so field names stay
//! consistent: `operation`, `status`, `elapsed_ms`, `body_size`, `retries`.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Request-side metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Wire operation name, e.g. `DetectEntities`
    pub operation: &'static str,
    /// Request body size in bytes
    pub body_size: usize,
    /// Zero-based attempt number
    pub attempt: u32,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(operation: &'static str, body_size: usize) -> Self {
        Self {
            operation,
            body_size,
            attempt: 0,
        }
    }

    /// Set the attempt number
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            operation = self.operation,
            body_size = self.body_size,
            attempt = self.attempt,
            "Sending request"
        );
    }
}

/// Response-side metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code, absent when no response arrived
    pub status: Option<u16>,
    /// Response body size in bytes
    pub body_size: Option<usize>,
    /// Time elapsed since the first attempt
    pub elapsed: Duration,
    /// Number of retries taken
    pub retries: u32,
    /// `x-amzn-RequestId`, if any
    pub request_id: Option<String>,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(elapsed: Duration) -> Self {
        Self {
            status: None,
            body_size: None,
            elapsed,
            retries: 0,
            request_id: None,
        }
    }

    /// Set the status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the response body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Set the number of retries
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Set the request id
    pub fn with_request_id(mut self, request_id: Option<&str>) -> Self {
        self.request_id = request_id.map(String::from);
        self
    }

    /// Log successful call
    pub fn log_success(&self, request: &RequestMetadata) {
        info!(
            operation = request.operation,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis() as u64,
            body_size = self.body_size,
            retries = self.retries,
            request_id = self.request_id.as_deref(),
            "Operation succeeded"
        );
    }

    /// Log failed call
    pub fn log_error(&self, request: &RequestMetadata, error: &crate::Error) {
        warn!(
            operation = request.operation,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis() as u64,
            retries = self.retries,
            request_id = self.request_id.as_deref(),
            error = %error,
            "Operation failed"
        );
    }
}

/// Timer for measuring request duration
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Log a client-side validation failure
pub fn log_validation_error(operation: &str, field: &str) {
    debug!(operation, field, "Request validation failed");
}

/// Log that a failed non-idempotent call is not retried
pub fn log_idempotence_hazard(operation: &str, error: &crate::Error) {
    warn!(
        operation,
        error = %error,
        "Not retrying: {operation} creates server-side work and may already have been processed"
    );
}

/// Install a `tracing-subscriber` formatter filtered by `RUST_LOG`.
///
/// Defaults to `comprehend=info` when `RUST_LOG` is unset. Calling this more
/// than once is harmless; later calls are ignored.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("comprehend=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
