//! Credential resolution
//!
//! Operations ask an injected [`ProvideCredentials`] implementation for
//! credentials right before signing. The client never caches what a provider
//! returns; providers that talk to remote sources cache on their own.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// AWS credentials used to sign a request.
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: SecretString,
    session_token: Option<SecretString>,
    expiry: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Create long-term credentials.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::new(secret_access_key.into().into_boxed_str()),
            session_token: None,
            expiry: None,
        }
    }

    /// Attach a session token (temporary credentials).
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(SecretString::new(token.into().into_boxed_str()));
        self
    }

    /// Attach an expiry time.
    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// The access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The session token, if these are temporary credentials.
    pub fn session_token(&self) -> Option<&SecretString> {
        self.session_token.as_ref()
    }

    /// When these credentials stop being valid.
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expiry
    }

    /// Whether the credentials have expired.
    pub fn is_expired(&self) -> bool {
        self.expiry.is_some_and(|expiry| expiry <= Utc::now())
    }

    pub(crate) fn to_signing_credentials(&self) -> aws_credential_types::Credentials {
        aws_credential_types::Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.expose_secret().to_string(),
            self.session_token
                .as_ref()
                .map(|token| token.expose_secret().to_string()),
            self.expiry.map(SystemTime::from),
            "comprehend",
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .field("expiry", &self.expiry)
            .finish()
    }
}

/// Source of credentials for request signing.
#[async_trait]
pub trait ProvideCredentials: Send + Sync + fmt::Debug {
    /// Resolve credentials. Failures are reported as [`Error::Credentials`].
    async fn provide_credentials(&self) -> Result<Credentials>;

    /// Provider name for logging.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Shared handle to a credentials provider.
pub type SharedCredentialsProvider = Arc<dyn ProvideCredentials>;

/// Always returns the same credentials.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    /// Create a provider from fixed credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl ProvideCredentials for StaticCredentialsProvider {
    async fn provide_credentials(&self) -> Result<Credentials> {
        Ok(self.credentials.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and the optional
/// `AWS_SESSION_TOKEN` on every call.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCredentialsProvider;

impl EnvironmentCredentialsProvider {
    /// Create the provider.
    pub fn new() -> Self {
        Self
    }

    fn read() -> Result<Credentials> {
        let access_key_id = non_empty_var("AWS_ACCESS_KEY_ID")
            .ok_or_else(|| Error::Credentials("AWS_ACCESS_KEY_ID is not set".to_string()))?;
        let secret_access_key = non_empty_var("AWS_SECRET_ACCESS_KEY")
            .ok_or_else(|| Error::Credentials("AWS_SECRET_ACCESS_KEY is not set".to_string()))?;

        let credentials = Credentials::new(access_key_id, secret_access_key);
        Ok(match non_empty_var("AWS_SESSION_TOKEN") {
            Some(token) => credentials.with_session_token(token),
            None => credentials,
        })
    }
}

#[async_trait]
impl ProvideCredentials for EnvironmentCredentialsProvider {
    async fn provide_credentials(&self) -> Result<Credentials> {
        Self::read()
    }

    fn name(&self) -> &'static str {
        "environment"
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Tries providers in order; the first success wins.
#[derive(Debug, Clone, Default)]
pub struct CredentialsProviderChain {
    providers: Vec<SharedCredentialsProvider>,
}

impl CredentialsProviderChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider to the chain.
    pub fn or_else(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Append an already shared provider to the chain.
    pub fn or_else_shared(mut self, provider: SharedCredentialsProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// The chain used when nothing else is configured: the environment,
    /// followed by the AWS default chain when the `aws-config` feature is on.
    pub fn default_chain() -> Self {
        let chain = Self::new().or_else(EnvironmentCredentialsProvider::new());
        #[cfg(feature = "aws-config")]
        let chain = chain.or_else(SdkCredentialsProvider::new());
        chain
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl ProvideCredentials for CredentialsProviderChain {
    async fn provide_credentials(&self) -> Result<Credentials> {
        let mut failures = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.provide_credentials().await {
                Ok(credentials) => {
                    tracing::debug!(provider = provider.name(), "Resolved credentials");
                    return Ok(credentials);
                }
                Err(err) => {
                    tracing::debug!(provider = provider.name(), error = %err, "Credentials provider failed");
                    failures.push(format!("{}: {err}", provider.name()));
                }
            }
        }

        Err(Error::Credentials(if failures.is_empty() {
            "no credentials providers configured".to_string()
        } else {
            format!("no provider in the chain returned credentials ({})", failures.join("; "))
        }))
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

/// The AWS SDK default credential chain: environment, shared profile files,
/// web identity, ECS and EC2 instance metadata.
#[cfg(feature = "aws-config")]
#[derive(Debug, Default)]
pub struct SdkCredentialsProvider {
    profile: Option<String>,
    inner: tokio::sync::OnceCell<aws_credential_types::provider::SharedCredentialsProvider>,
}

#[cfg(feature = "aws-config")]
impl SdkCredentialsProvider {
    /// Create a provider using the default profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider using a named profile.
    pub fn with_profile(profile: impl Into<String>) -> Self {
        Self {
            profile: Some(profile.into()),
            inner: tokio::sync::OnceCell::new(),
        }
    }

    async fn load(&self) -> Result<aws_credential_types::provider::SharedCredentialsProvider> {
        use aws_config::BehaviorVersion;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        loader
            .load()
            .await
            .credentials_provider()
            .ok_or_else(|| Error::Credentials("AWS default chain has no provider".to_string()))
    }
}

#[cfg(feature = "aws-config")]
#[async_trait]
impl ProvideCredentials for SdkCredentialsProvider {
    async fn provide_credentials(&self) -> Result<Credentials> {
        use aws_credential_types::provider::ProvideCredentials as _;

        let provider = self.inner.get_or_try_init(|| self.load()).await?;
        let resolved = provider
            .provide_credentials()
            .await
            .map_err(|err| Error::Credentials(err.to_string()))?;

        let mut credentials =
            Credentials::new(resolved.access_key_id(), resolved.secret_access_key());
        if let Some(token) = resolved.session_token() {
            credentials = credentials.with_session_token(token);
        }
        if let Some(expiry) = resolved.expiry() {
            credentials = credentials.with_expiry(DateTime::<Utc>::from(expiry));
        }
        Ok(credentials)
    }

    fn name(&self) -> &'static str {
        "aws-config"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Failing;

    #[async_trait]
    impl ProvideCredentials for Failing {
        async fn provide_credentials(&self) -> Result<Credentials> {
            Err(Error::Credentials("nope".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticCredentialsProvider::new(Credentials::new("AKID", "secret"));
        let credentials = provider.provide_credentials().await.unwrap();
        assert_eq!(credentials.access_key_id(), "AKID");
        assert!(credentials.session_token().is_none());
    }

    #[tokio::test]
    async fn test_chain_first_success_wins() {
        let chain = CredentialsProviderChain::new()
            .or_else(Failing)
            .or_else(StaticCredentialsProvider::new(Credentials::new("first", "s")))
            .or_else(StaticCredentialsProvider::new(Credentials::new("second", "s")));

        let credentials = chain.provide_credentials().await.unwrap();
        assert_eq!(credentials.access_key_id(), "first");
    }

    #[tokio::test]
    async fn test_chain_reports_every_failure() {
        let chain = CredentialsProviderChain::new().or_else(Failing).or_else(Failing);
        let err = chain.provide_credentials().await.unwrap_err();
        match err {
            Error::Credentials(message) => assert_eq!(message.matches("failing: ").count(), 2),
            other => panic!("Expected Credentials error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_chain_fails() {
        let err = CredentialsProviderChain::new()
            .provide_credentials()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Credentials(_)));
    }

    #[test]
    fn test_environment_provider() {
        temp_env::with_vars(
            [
                ("AWS_ACCESS_KEY_ID", Some("AKIDENV")),
                ("AWS_SECRET_ACCESS_KEY", Some("envsecret")),
                ("AWS_SESSION_TOKEN", Some("token")),
            ],
            || {
                let credentials = EnvironmentCredentialsProvider::read().unwrap();
                assert_eq!(credentials.access_key_id(), "AKIDENV");
                assert!(credentials.session_token().is_some());
            },
        );
    }

    #[test]
    fn test_environment_provider_missing_secret() {
        temp_env::with_vars(
            [
                ("AWS_ACCESS_KEY_ID", Some("AKIDENV")),
                ("AWS_SECRET_ACCESS_KEY", None::<&str>),
            ],
            || {
                let err = EnvironmentCredentialsProvider::read().unwrap_err();
                assert!(err.to_string().contains("AWS_SECRET_ACCESS_KEY"));
            },
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("AKID", "very-secret").with_session_token("tok");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("AKID"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("tok\""));
    }

    #[test]
    fn test_expiry() {
        let expired = Credentials::new("a", "b").with_expiry(Utc::now() - chrono::Duration::seconds(5));
        assert!(expired.is_expired());
        assert!(!Credentials::new("a", "b").is_expired());
    }
}
