//! # Amazon Comprehend client
//!
//! A typed Rust client for the Amazon Comprehend natural language processing
//! service. Every operation of the service is available as an async method
//! on [`Client`] and, with the `blocking` feature, as a blocking method on
//! [`BlockingClient`].
//!
//! Each call validates the request's required members, serializes it to the
//! service's JSON protocol, signs it with AWS Signature Version 4, sends it,
//! and parses the response into a typed record. Failures come back as an
//! [`Error`]: service errors are classified into [`ServiceErrorKind`], and
//! network failures are kept apart from them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use comprehend::{Client, DetectSentimentRequest, LanguageCode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().region("eu-west-1").build()?;
//!
//!     let response = client
//!         .detect_sentiment(
//!             DetectSentimentRequest::builder()
//!                 .text("The service was quick and friendly.")
//!                 .language_code(LanguageCode::En)
//!                 .build()?,
//!         )
//!         .await?;
//!
//!     println!("{:?}", response.sentiment);
//!     Ok(())
//! }
//! ```
//!
//! ## Background calls
//!
//! [`Client::spawn`] runs an operation as a task and hands back an
//! [`OperationHandle`] right away. The handle is a future, can be waited on
//! from synchronous code, and can be cancelled.
//!
//! ```rust,no_run
//! # use comprehend::{Client, DetectDominantLanguageRequest};
//! # async fn example(client: Client) -> comprehend::Result<()> {
//! let handle = client.spawn(
//!     DetectDominantLanguageRequest::builder().text("Bonjour tout le monde").build()?,
//! );
//! let languages = handle.await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, ConnectionPoolConfig};
pub use credentials::{
    Credentials, CredentialsProviderChain, EnvironmentCredentialsProvider, ProvideCredentials,
    SharedCredentialsProvider, StaticCredentialsProvider,
};
pub use error::{Error, Result, ServiceErrorKind};
pub use http::RawResponse;
pub use operation::{Operation, OperationHandle};
pub use operations::OperationInfo;
pub use types::*;

#[cfg(feature = "aws-config")]
pub use credentials::SdkCredentialsProvider;

#[cfg(feature = "blocking")]
pub use blocking::BlockingClient;

// Module declarations
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod operation;
pub mod operations;
pub mod types;

// Optional blocking client
#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use comprehend::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Error, Operation, OperationHandle, Result, ServiceErrorKind,
        credentials::ProvideCredentials,
        types::{BatchResponse, JobStatus, LanguageCode, PageRequest, Paginated},
    };

    #[cfg(feature = "blocking")]
    pub use crate::blocking::BlockingClient;
}

/// Client version, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// Signing name and endpoint prefix of the service
pub const SERVICE_NAME: &str = "comprehend";

/// Prefix of the `X-Amz-Target` header value
pub const TARGET_PREFIX: &str = "Comprehend_20171127";

/// Content type of the JSON protocol
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header carrying the service-assigned request id
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";
