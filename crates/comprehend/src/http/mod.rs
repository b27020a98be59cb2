//! HTTP layer: request construction, signing, transport and responses
//!
//! One operation call builds a [`HttpRequest`] with [`RequestBuilder`],
//! signs it with [`RequestSigner`], and hands it to a [`Transport`].

pub use request::{HttpRequest, RequestBuilder};
pub use response::{RawResponse, Response};
pub use signing::RequestSigner;
pub use transport::{ReqwestTransport, ReqwestTransportBuilder, Transport};

mod request;
mod response;
mod signing;
mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
