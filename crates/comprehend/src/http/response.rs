//! HTTP response handling

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::REQUEST_ID_HEADER;

/// HTTP response as returned by a [`Transport`](super::Transport).
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    /// Retries spent before this response arrived
    pub retries_taken: u32,
    /// Time from the first attempt to this response
    pub elapsed: Duration,
}

/// A parsed response together with its HTTP metadata.
///
/// Returned by [`Client::execute_raw`](crate::Client::execute_raw) for
/// callers that need the request id, the retry count or the timing of a call.
///
/// # Example
///
/// ```rust,no_run
/// # use comprehend::{Client, types::{DetectSentimentRequest, LanguageCode}};
/// # async fn example(client: Client) -> comprehend::Result<()> {
/// let request = DetectSentimentRequest::builder()
///     .text("I love this")
///     .language_code(LanguageCode::En)
///     .build()?;
///
/// let raw = client.execute_raw(request).await?;
/// println!("Request ID: {:?}", raw.request_id());
/// println!("Retries: {}", raw.retries_taken());
/// println!("Sentiment: {:?}", raw.parsed().sentiment);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RawResponse<T> {
    parsed: T,
    status: StatusCode,
    headers: HeaderMap,
    retries_taken: u32,
    elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            retries_taken: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body as a string.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| Error::ResponseValidation(e.to_string()))
    }

    /// `x-amzn-RequestId` of this call.
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON. An empty body parses as `{}`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &self.body
        };
        serde_json::from_slice(body).map_err(|e| {
            Error::ResponseValidation(format!("{e} (status {})", self.status.as_u16()))
        })
    }

    /// Check if the response is successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if the response is an error (anything outside 2xx).
    pub fn is_error(&self) -> bool {
        !self.status.is_success()
    }

    /// Turn an error status into a classified [`Error`], passing successes through.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_error() {
            return Err(Error::from_response(
                self.status.as_u16(),
                &self.body,
                &self.headers,
            ));
        }
        Ok(self)
    }

    /// Parse a successful response, converting HTTP errors to client errors.
    pub fn parse_result<T: DeserializeOwned>(self) -> Result<T> {
        self.error_for_status()?.json()
    }

    /// Parse a successful response into a `RawResponse`, converting HTTP errors to client errors.
    pub fn into_parsed_raw<T: DeserializeOwned>(self) -> Result<RawResponse<T>> {
        let response = self.error_for_status()?;
        let parsed = response.json()?;
        Ok(RawResponse {
            parsed,
            status: response.status,
            headers: response.headers,
            retries_taken: response.retries_taken,
            elapsed: response.elapsed,
        })
    }
}

impl<T> RawResponse<T> {
    /// Get a reference to the parsed response body.
    pub fn parsed(&self) -> &T {
        &self.parsed
    }

    /// Consume this raw response and return the parsed body.
    pub fn into_parsed(self) -> T {
        self.parsed
    }

    /// Get the HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get a reference to the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Number of retries taken for this request (0 if no retries).
    pub fn retries_taken(&self) -> u32 {
        self.retries_taken
    }

    /// Time elapsed for the complete request/response cycle, retries included.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get a specific header value by name.
    pub fn get_header(&self, name: &str) -> Option<&http::HeaderValue> {
        self.headers.get(name)
    }

    /// `x-amzn-RequestId` of this call, useful for support cases.
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq, Default)]
    #[serde(rename_all = "PascalCase")]
    struct Out {
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn test_empty_body_parses_as_empty_object() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), Bytes::new());
        let out: Out = response.parse_result().unwrap();
        assert_eq!(out, Out::default());
    }

    #[test]
    fn test_error_status_is_classified() {
        let response = Response::new(
            StatusCode::BAD_REQUEST,
            HeaderMap::new(),
            r#"{"__type":"JobNotFoundException","message":"missing"}"#,
        );
        let err = response.parse_result::<Out>().unwrap_err();
        assert_eq!(err.kind(), Some(crate::ServiceErrorKind::JobNotFound));
    }

    #[test]
    fn test_malformed_success_body() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), "not json");
        let err = response.parse_result::<Out>().unwrap_err();
        assert!(matches!(err, Error::ResponseValidation(_)));
    }

    #[test]
    fn test_raw_response_metadata() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, "abc-123".parse().unwrap());
        let mut response = Response::new(StatusCode::OK, headers, r#"{"Name":"x"}"#);
        response.retries_taken = 2;
        response.elapsed = Duration::from_millis(40);

        let raw: RawResponse<Out> = response.into_parsed_raw().unwrap();
        assert_eq!(raw.parsed().name.as_deref(), Some("x"));
        assert_eq!(raw.request_id(), Some("abc-123"));
        assert_eq!(raw.retries_taken(), 2);
        assert_eq!(raw.elapsed(), Duration::from_millis(40));
        assert_eq!(raw.status_code(), 200);
    }
}
