//! AWS Signature Version 4 request signing

use std::time::SystemTime;

use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings, sign};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use http::{HeaderName, HeaderValue};

use super::HttpRequest;
use crate::credentials::Credentials;
use crate::error::{Error, Result};

/// Signs requests for one region and service.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    region: String,
    service: String,
}

impl RequestSigner {
    /// Create a signer.
    pub fn new(region: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
        }
    }

    /// The signing region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sign `request` in place with the current time.
    pub fn sign(&self, request: &mut HttpRequest, credentials: &Credentials) -> Result<()> {
        self.sign_at(request, credentials, SystemTime::now())
    }

    /// Sign `request` in place as of `time`.
    pub fn sign_at(
        &self,
        request: &mut HttpRequest,
        credentials: &Credentials,
        time: SystemTime,
    ) -> Result<()> {
        let identity: Identity = credentials.to_signing_credentials().into();
        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(&self.service)
            .time(time)
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| Error::Signing(e.to_string()))?
            .into();

        let headers: Vec<(&str, &str)> = request
            .headers
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v)))
            .collect();

        let signable = SignableRequest::new(
            request.method.as_str(),
            request.url.as_str(),
            headers.into_iter(),
            SignableBody::Bytes(request.body.as_ref()),
        )
        .map_err(|e| Error::Signing(e.to_string()))?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|e| Error::Signing(e.to_string()))?
            .into_parts();

        let mut signed = Vec::new();
        for (name, value) in instructions.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidHeaderName(name.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidHeaderValue(name.to_string()))?;
            signed.push((name, value));
        }
        for (name, value) in signed {
            request.headers.insert(name, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::RequestBuilder;
    use url::Url;

    fn request() -> HttpRequest {
        let endpoint = Url::parse("https://comprehend.us-east-1.amazonaws.com").unwrap();
        RequestBuilder::operation(&endpoint, "DetectDominantLanguage")
            .unwrap()
            .body(r#"{"Text":"Bonjour"}"#)
            .build()
    }

    #[test]
    fn test_sign_adds_authorization() {
        let signer = RequestSigner::new("us-east-1", "comprehend");
        let mut request = request();
        signer
            .sign(&mut request, &Credentials::new("AKIDEXAMPLE", "secret"))
            .unwrap();

        let auth = request.header("authorization").unwrap();
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
        assert!(auth.contains("/us-east-1/comprehend/aws4_request"));
        assert!(auth.contains("x-amz-target"));
        assert!(request.header("x-amz-date").is_some());
        assert!(request.header("x-amz-security-token").is_none());
    }

    #[test]
    fn test_session_token_is_sent() {
        let signer = RequestSigner::new("eu-west-1", "comprehend");
        let mut request = request();
        let credentials = Credentials::new("AKID", "secret").with_session_token("session");
        signer.sign(&mut request, &credentials).unwrap();

        assert_eq!(request.header("x-amz-security-token"), Some("session"));
    }

    #[test]
    fn test_signature_is_deterministic_for_fixed_time() {
        let signer = RequestSigner::new("us-east-1", "comprehend");
        let credentials = Credentials::new("AKID", "secret");
        let at = SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_700_000_000);

        let mut first = request();
        let mut second = request();
        signer.sign_at(&mut first, &credentials, at).unwrap();
        signer.sign_at(&mut second, &credentials, at).unwrap();

        assert_eq!(first.header("authorization"), second.header("authorization"));
        assert_eq!(first.header("x-amz-date"), Some("20231114T221320Z"));
    }
}
