//! Error types for the Comprehend client
//!
//! Service-reported failures are classified into the closed
//! [`ServiceErrorKind`] taxonomy and surfaced as [`Error::Service`].
//! Discriminators the client does not know degrade to
//! [`Error::UnhandledService`], which keeps the raw status and body.
//! Everything else is a client-side failure: validation, credentials,
//! signing, or the network.

use std::fmt;
use std::time::Duration;

use comprehend_core::retry::{RetryDecision, Retryable};
use thiserror::Error;

/// Result type alias for operations that can fail with a Comprehend client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Closed set of error kinds the Comprehend service reports.
///
/// Each kind corresponds to one wire-level discriminator, e.g.
/// `InvalidRequestException`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// The request is invalid.
    InvalidRequest,
    /// The size of the input text exceeds the limit.
    TextSizeLimitExceeded,
    /// The number of documents in the request exceeds the limit.
    BatchSizeLimitExceeded,
    /// The language of the input documents is not supported.
    UnsupportedLanguage,
    /// The specified resource ARN was not found.
    ResourceNotFound,
    /// The specified resource name is already in use.
    ResourceInUse,
    /// The specified resource is not available.
    ResourceUnavailable,
    /// The maximum number of resources per account has been exceeded.
    ResourceLimitExceeded,
    /// The specified job was not found.
    JobNotFound,
    /// The number of requests exceeds the limit.
    TooManyRequests,
    /// The request contains more tags than can be associated with a resource.
    TooManyTags,
    /// The request contains more tag keys than can be removed at once.
    TooManyTagKeys,
    /// The filter specified for the operation is invalid.
    InvalidFilter,
    /// The KMS customer managed key could not be validated.
    KmsKeyValidation,
    /// Concurrent modification of the tags associated with a resource.
    ConcurrentModification,
    /// An internal server error occurred.
    InternalServer,
}

impl ServiceErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ServiceErrorKind; 16] = [
        ServiceErrorKind::InvalidRequest,
        ServiceErrorKind::TextSizeLimitExceeded,
        ServiceErrorKind::BatchSizeLimitExceeded,
        ServiceErrorKind::UnsupportedLanguage,
        ServiceErrorKind::ResourceNotFound,
        ServiceErrorKind::ResourceInUse,
        ServiceErrorKind::ResourceUnavailable,
        ServiceErrorKind::ResourceLimitExceeded,
        ServiceErrorKind::JobNotFound,
        ServiceErrorKind::TooManyRequests,
        ServiceErrorKind::TooManyTags,
        ServiceErrorKind::TooManyTagKeys,
        ServiceErrorKind::InvalidFilter,
        ServiceErrorKind::KmsKeyValidation,
        ServiceErrorKind::ConcurrentModification,
        ServiceErrorKind::InternalServer,
    ];

    /// The wire-level discriminator for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceErrorKind::InvalidRequest => "InvalidRequestException",
            ServiceErrorKind::TextSizeLimitExceeded => "TextSizeLimitExceededException",
            ServiceErrorKind::BatchSizeLimitExceeded => "BatchSizeLimitExceededException",
            ServiceErrorKind::UnsupportedLanguage => "UnsupportedLanguageException",
            ServiceErrorKind::ResourceNotFound => "ResourceNotFoundException",
            ServiceErrorKind::ResourceInUse => "ResourceInUseException",
            ServiceErrorKind::ResourceUnavailable => "ResourceUnavailableException",
            ServiceErrorKind::ResourceLimitExceeded => "ResourceLimitExceededException",
            ServiceErrorKind::JobNotFound => "JobNotFoundException",
            ServiceErrorKind::TooManyRequests => "TooManyRequestsException",
            ServiceErrorKind::TooManyTags => "TooManyTagsException",
            ServiceErrorKind::TooManyTagKeys => "TooManyTagKeysException",
            ServiceErrorKind::InvalidFilter => "InvalidFilterException",
            ServiceErrorKind::KmsKeyValidation => "KmsKeyValidationException",
            ServiceErrorKind::ConcurrentModification => "ConcurrentModificationException",
            ServiceErrorKind::InternalServer => "InternalServerException",
        }
    }

    /// Map a sanitized discriminator to a kind.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Main error type for the Comprehend client.
#[derive(Debug, Error)]
pub enum Error {
    /// The service reported an error from the closed taxonomy.
    #[error("{kind} (status {status}): {message}")]
    Service {
        /// Classified error kind
        kind: ServiceErrorKind,
        /// Human-readable message from the service
        message: String,
        /// HTTP status code
        status: u16,
        /// Wire discriminator with any namespace prefix and `:` suffix removed
        error_type: String,
        /// `x-amzn-RequestId` of the failed call
        request_id: Option<String>,
    },

    /// The service returned an error the client could not classify.
    #[error("Unhandled service error (status {status}): {}", error_type.as_deref().unwrap_or("unknown error type"))]
    UnhandledService {
        /// HTTP status code
        status: u16,
        /// Discriminator, if one could be read
        error_type: Option<String>,
        /// Message, if one could be read
        message: Option<String>,
        /// Raw response body
        body: String,
        /// `x-amzn-RequestId` of the failed call
        request_id: Option<String>,
    },

    /// A required request member was not set.
    #[error("{operation}: missing required parameter `{field}`")]
    MissingParameter {
        /// Operation name, e.g. `DetectSentiment`
        operation: &'static str,
        /// Name of the missing member
        field: &'static str,
    },

    /// Invalid request parameters detected client-side.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Credentials could not be resolved.
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// The request could not be signed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// The connection could not be established (DNS, refused, TLS handshake).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request failed after it may have reached the service.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// A successful response body did not match the expected shape.
    #[error("Failed to parse service response: {0}")]
    ResponseValidation(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A spawned operation was cancelled before it completed.
    #[error("Operation {operation} was cancelled")]
    Cancelled {
        /// Operation name
        operation: &'static str,
    },

    /// A spawned operation panicked or its worker went away.
    #[error("Operation task failed: {0}")]
    TaskFailed(String),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        /// Context description
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Error::InvalidRequest(err.to_string())
    }
}

impl Error {
    /// Build an error from a non-2xx response.
    ///
    /// The discriminator is read from the `x-amzn-ErrorType` header first,
    /// then from the body's `__type` or `code` member.
    pub fn from_response(status: u16, body: &[u8], headers: &http::HeaderMap) -> Self {
        let request_id = header_str(headers, "x-amzn-requestid").map(String::from);
        let parsed = ErrorBody::parse(body);

        let raw_type = header_str(headers, "x-amzn-errortype")
            .map(String::from)
            .or(parsed.error_type)
            .or(parsed.code);
        let message = parsed.message;

        if let Some(raw_type) = raw_type {
            let code = sanitize_error_code(&raw_type);
            if let Some(kind) = ServiceErrorKind::from_code(code) {
                return Error::Service {
                    kind,
                    message: message.unwrap_or_default(),
                    status,
                    error_type: code.to_string(),
                    request_id,
                };
            }

            tracing::debug!(status, error_type = %code, "Unrecognized service error type");
            return Error::UnhandledService {
                status,
                error_type: Some(code.to_string()),
                message,
                body: String::from_utf8_lossy(body).into_owned(),
                request_id,
            };
        }

        Error::UnhandledService {
            status,
            error_type: None,
            message,
            body: String::from_utf8_lossy(body).into_owned(),
            request_id,
        }
    }

    /// The classified service error kind, if this is a service error.
    pub fn kind(&self) -> Option<ServiceErrorKind> {
        match self {
            Error::Service { kind, .. } => Some(*kind),
            Error::WithContext { source, .. } => source.downcast_ref::<Error>().and_then(Error::kind),
            _ => None,
        }
    }

    /// HTTP status code for service-reported errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } | Error::UnhandledService { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Service-provided message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Service { message, .. } => Some(message),
            Error::UnhandledService { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// `x-amzn-RequestId` of the failed call, if the service returned one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Service { request_id, .. } | Error::UnhandledService { request_id, .. } => {
                request_id.as_deref()
            }
            _ => None,
        }
    }

    /// Whether this is an invalid-request-class error, reported either by the
    /// service or detected before sending.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter { .. } | Error::InvalidRequest(_)
        ) || self.kind() == Some(ServiceErrorKind::InvalidRequest)
    }

    /// Whether this is a network-level failure rather than a service error.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::Connection(_) | Error::Network(_) | Error::Timeout(_)
        )
    }

    /// Whether the service throttled the call.
    pub fn is_throttling(&self) -> bool {
        self.kind() == Some(ServiceErrorKind::TooManyRequests)
            || matches!(self, Error::UnhandledService { status: 429, .. })
    }

    /// Check if this error is retryable for an idempotent operation.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Service { kind, .. } => matches!(
                kind,
                ServiceErrorKind::TooManyRequests | ServiceErrorKind::InternalServer
            ),
            Error::UnhandledService { status, .. } => *status >= 500 || *status == 429,
            Error::Connection(_) | Error::Network(_) | Error::Timeout(_) => true,
            _ => false,
        }
    }

    /// Check if this error is retryable for an operation that creates
    /// server-side work: only when the request provably was not processed.
    pub fn is_retryable_non_idempotent(&self) -> bool {
        self.is_throttling() || matches!(self, Error::Connection(_))
    }

    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

impl Retryable for Error {
    fn retry_decision(&self) -> RetryDecision {
        if self.is_retryable() {
            RetryDecision::Retry
        } else {
            RetryDecision::Stop
        }
    }
}

/// Strip the namespace prefix (`aws.protocoltests#`) and the trailing
/// `:http://...` suffix some front ends append to error discriminators.
pub(crate) fn sanitize_error_code(raw: &str) -> &str {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    let code = without_suffix
        .rsplit('#')
        .next()
        .unwrap_or(without_suffix);
    code.trim()
}

/// Members of a JSON error body.
///
/// Each member is read on its own, so a duplicate or mistyped sibling never
/// hides the discriminator.
#[derive(Debug, Default)]
struct ErrorBody {
    error_type: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn parse(body: &[u8]) -> Self {
        let Ok(serde_json::Value::Object(members)) = serde_json::from_slice(body) else {
            return Self::default();
        };
        let text = |key: &str| {
            members
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(String::from)
        };

        Self {
            error_type: text("__type"),
            code: text("code"),
            message: text("message")
                .or_else(|| text("Message"))
                .or_else(|| text("errorMessage")),
        }
    }
}

fn header_str<'a>(headers: &'a http::HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn no_headers() -> http::HeaderMap {
        http::HeaderMap::new()
    }

    #[test]
    fn test_error_invalid_request_parsing() {
        let body = br#"{"__type":"InvalidRequestException","message":"Text is empty"}"#;

        match Error::from_response(400, body, &no_headers()) {
            Error::Service {
                kind,
                message,
                status,
                error_type,
                ..
            } => {
                assert_eq!(kind, ServiceErrorKind::InvalidRequest);
                assert_eq!(message, "Text is empty");
                assert_eq!(status, 400);
                assert_eq!(error_type, "InvalidRequestException");
            }
            other => panic!("Expected Service variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_type_from_header_wins() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "x-amzn-ErrorType",
            "TooManyRequestsException:http://internal.amazon.com/coral/com.amazonaws.comprehend/"
                .parse()
                .unwrap(),
        );
        headers.insert("x-amzn-RequestId", "req-123".parse().unwrap());
        let body = br#"{"__type":"InternalServerException","Message":"slow down"}"#;

        let error = Error::from_response(400, body, &headers);
        assert_eq!(error.kind(), Some(ServiceErrorKind::TooManyRequests));
        assert_eq!(error.message(), Some("slow down"));
        assert_eq!(error.request_id(), Some("req-123"));
    }

    #[test]
    fn test_namespaced_type_is_sanitized() {
        let body = br#"{"__type":"com.amazonaws.comprehend#JobNotFoundException","message":"no job"}"#;
        let error = Error::from_response(400, body, &no_headers());
        assert_eq!(error.kind(), Some(ServiceErrorKind::JobNotFound));
        assert!(matches!(
            &error,
            Error::Service { error_type, .. } if error_type == "JobNotFoundException"
        ));
    }

    #[test]
    fn test_duplicate_message_keys_keep_discriminator() {
        let body = br#"{"__type":"InvalidRequestException","message":"a","Message":"b"}"#;
        let error = Error::from_response(400, body, &no_headers());

        assert_eq!(error.kind(), Some(ServiceErrorKind::InvalidRequest));
        assert_eq!(error.message(), Some("a"));
    }

    #[test]
    fn test_mistyped_sibling_keeps_discriminator() {
        let body = br#"{"__type":"ResourceInUseException","code":409,"errorMessage":"busy"}"#;
        let error = Error::from_response(400, body, &no_headers());

        assert_eq!(error.kind(), Some(ServiceErrorKind::ResourceInUse));
        assert_eq!(error.message(), Some("busy"));
    }

    #[test]
    fn test_code_member_is_a_fallback_discriminator() {
        let body = br#"{"__type":42,"code":"KmsKeyValidationException","message":"bad key"}"#;
        let error = Error::from_response(400, body, &no_headers());

        assert_eq!(error.kind(), Some(ServiceErrorKind::KmsKeyValidation));
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let body = br#"{"__type":"BrandNewException","message":"surprise"}"#;

        match Error::from_response(418, body, &no_headers()) {
            Error::UnhandledService {
                status,
                error_type,
                message,
                body,
                ..
            } => {
                assert_eq!(status, 418);
                assert_eq!(error_type.as_deref(), Some("BrandNewException"));
                assert_eq!(message.as_deref(), Some("surprise"));
                assert!(body.contains("BrandNewException"));
            }
            other => panic!("Expected UnhandledService, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let error = Error::from_response(502, b"<html>Bad Gateway</html>", &no_headers());
        match error {
            Error::UnhandledService {
                status,
                error_type,
                body,
                ..
            } => {
                assert_eq!(status, 502);
                assert!(error_type.is_none());
                assert_eq!(body, "<html>Bad Gateway</html>");
            }
            other => panic!("Expected UnhandledService, got {other:?}"),
        }
    }

    #[test]
    fn test_every_kind_round_trips_through_code() {
        for kind in ServiceErrorKind::ALL {
            assert_eq!(ServiceErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ServiceErrorKind::from_code("Nope"), None);
    }

    #[test]
    fn test_error_is_retryable() {
        let throttled = Error::from_response(
            400,
            br#"{"__type":"TooManyRequestsException"}"#,
            &no_headers(),
        );
        assert!(throttled.is_retryable());
        assert!(throttled.is_throttling());
        assert!(throttled.is_retryable_non_idempotent());

        let internal = Error::from_response(
            500,
            br#"{"__type":"InternalServerException"}"#,
            &no_headers(),
        );
        assert!(internal.is_retryable());
        assert!(!internal.is_retryable_non_idempotent());

        assert!(Error::Connection("refused".into()).is_retryable_non_idempotent());
        assert!(!Error::Network("reset".into()).is_retryable_non_idempotent());
        assert!(Error::Timeout(Duration::from_secs(1)).is_retryable());

        let missing = Error::MissingParameter {
            operation: "DetectSentiment",
            field: "text",
        };
        assert!(!missing.is_retryable());
        assert_eq!(missing.retry_decision(), RetryDecision::Stop);
    }

    #[test]
    fn test_invalid_request_class() {
        assert!(
            Error::MissingParameter {
                operation: "DetectSentiment",
                field: "text"
            }
            .is_invalid_request()
        );
        let service = Error::from_response(
            400,
            br#"{"__type":"InvalidRequestException","message":"job completed"}"#,
            &no_headers(),
        );
        assert!(service.is_invalid_request());
        assert!(!Error::Timeout(Duration::from_secs(1)).is_invalid_request());
    }

    #[test]
    fn test_network_errors_are_distinct() {
        assert!(Error::Connection("dns".into()).is_network());
        assert!(Error::Timeout(Duration::from_secs(3)).is_network());
        assert!(!Error::Credentials("none".into()).is_network());
    }

    #[test]
    fn test_error_context_preserves_kind() {
        let error = Error::from_response(
            400,
            br#"{"__type":"ResourceNotFoundException","message":"gone"}"#,
            &no_headers(),
        )
        .context("describing classifier");

        assert!(error.to_string().starts_with("describing classifier"));
        assert_eq!(error.kind(), Some(ServiceErrorKind::ResourceNotFound));
    }

    #[test]
    fn test_sanitize_error_code() {
        assert_eq!(sanitize_error_code("FooException"), "FooException");
        assert_eq!(sanitize_error_code("ns#FooException"), "FooException");
        assert_eq!(sanitize_error_code("FooException:http://x/y"), "FooException");
        assert_eq!(sanitize_error_code("a.b#FooException:http://x"), "FooException");
    }

    proptest! {
        #[test]
        fn prop_sanitize_keeps_only_the_shape_name(
            namespace in "[a-z][a-z.]{0,24}",
            name in "[A-Z][A-Za-z]{0,40}",
            suffix in "[a-z/.]{0,32}",
        ) {
            let raw = format!("{namespace}#{name}:http://{suffix}");
            prop_assert_eq!(sanitize_error_code(&raw), name.as_str());
            prop_assert_eq!(sanitize_error_code(&name), name.as_str());
        }
    }
}
