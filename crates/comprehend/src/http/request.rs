//! HTTP request construction for the JSON 1.1 protocol

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

use crate::error::{Error, Result};
use crate::{CONTENT_TYPE, TARGET_PREFIX};

/// A fully built HTTP request, ready to be signed and sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Bytes,
}

impl HttpRequest {
    /// Value of a header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The operation named by `X-Amz-Target`, without the service prefix.
    pub fn operation(&self) -> Option<&str> {
        self.header("x-amz-target")
            .and_then(|target| target.rsplit('.').next())
    }
}

/// Builder for HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Bytes,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// A `POST /` carrying the content type and target header of one operation.
    pub fn operation(endpoint: &Url, operation: &str) -> Result<Self> {
        let url = endpoint.join("/").map_err(|e| {
            Error::InvalidUrl(format!("Failed to construct URL from '{endpoint}': {e}"))
        })?;

        Self::new(Method::POST, url)
            .try_header("content-type", CONTENT_TYPE)?
            .try_header("x-amz-target", format!("{TARGET_PREFIX}.{operation}"))
    }

    /// Try to set a header, returning an error if the name or value is invalid.
    ///
    /// # Errors
    /// Returns an error if the header name or value contains invalid characters.
    pub fn try_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Add headers that are not already set.
    pub fn default_headers(mut self, headers: &HeaderMap) -> Self {
        for (key, value) in headers {
            if !self.headers.contains_key(key) {
                self.headers.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Finish the request.
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_request_shape() {
        let endpoint = Url::parse("https://comprehend.us-east-1.amazonaws.com").unwrap();
        let request = RequestBuilder::operation(&endpoint, "DetectSentiment")
            .unwrap()
            .body(r#"{"Text":"hi"}"#)
            .build();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/");
        assert_eq!(request.header("content-type"), Some("application/x-amz-json-1.1"));
        assert_eq!(
            request.header("x-amz-target"),
            Some("Comprehend_20171127.DetectSentiment")
        );
        assert_eq!(request.operation(), Some("DetectSentiment"));
    }

    #[test]
    fn test_default_headers_do_not_override() {
        let endpoint = Url::parse("http://localhost:8080/some/prefix").unwrap();
        let mut defaults = HeaderMap::new();
        defaults.insert("content-type", "text/plain".parse().unwrap());
        defaults.insert("x-team", "nlp".parse().unwrap());

        let request = RequestBuilder::operation(&endpoint, "ListEndpoints")
            .unwrap()
            .default_headers(&defaults)
            .build();

        assert_eq!(request.url.as_str(), "http://localhost:8080/");
        assert_eq!(request.header("content-type"), Some("application/x-amz-json-1.1"));
        assert_eq!(request.header("x-team"), Some("nlp"));
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let endpoint = Url::parse("http://localhost").unwrap();
        let result = RequestBuilder::new(Method::POST, endpoint).try_header("x-ok", "bad\nvalue");
        assert!(matches!(result, Err(Error::InvalidHeaderValue(_))));
    }
}
