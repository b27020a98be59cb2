//! Configuration for the Comprehend client

use http::HeaderMap;
use secrecy::SecretString;
use std::time::Duration;

use crate::{DEFAULT_REGION, SERVICE_NAME};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(100);
const DEFAULT_RETRY_MAX_DELAY: Duration = Duration::from_secs(20);

/// Configuration for the Comprehend client.
///
/// Holds the read-only settings every operation shares: where to send
/// requests, how long to wait, and how often to retry. Credentials given
/// here are used as a static provider; an explicit provider passed to the
/// client builder takes precedence.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// AWS region, used for the default endpoint and for signing
    pub region: String,

    /// Endpoint override, e.g. a VPC endpoint or a local mock
    pub endpoint: Option<String>,

    /// Static access key id
    pub access_key_id: Option<String>,

    /// Static secret access key
    pub secret_access_key: Option<SecretString>,

    /// Static session token for temporary credentials
    pub session_token: Option<SecretString>,

    /// Overall timeout for a single HTTP attempt
    pub timeout: Duration,

    /// Timeout for establishing a connection
    pub connect_timeout: Duration,

    /// Maximum number of retries for failed requests
    pub max_retries: u32,

    /// Delay before the first retry
    pub retry_base_delay: Duration,

    /// Upper bound on the delay between retries
    pub retry_max_delay: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTPS proxy URL
    pub proxy: Option<String>,

    /// Suffix appended to the default `User-Agent`
    pub user_agent_suffix: Option<String>,

    /// Connection pool configuration
    pub connection_pool: ConnectionPoolConfig,

    /// Worker threads of the runtime owned by the blocking client
    pub worker_threads: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
            retry_max_delay: DEFAULT_RETRY_MAX_DELAY,
            default_headers: HeaderMap::new(),
            proxy: None,
            user_agent_suffix: None,
            connection_pool: ConnectionPoolConfig::default(),
            worker_threads: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for a region.
    pub fn with_region(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }

    /// Create a configuration with static credentials.
    pub fn with_credentials(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: Some(access_key_id.into()),
            secret_access_key: Some(SecretString::new(
                secret_access_key.into().into_boxed_str(),
            )),
            ..Default::default()
        }
    }

    /// The endpoint requests are sent to: the override if set, otherwise
    /// `https://comprehend.<region>.amazonaws.com`.
    pub fn resolved_endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{SERVICE_NAME}.{}.amazonaws.com", self.region),
        }
    }

    /// Whether a complete pair of static keys is configured.
    pub fn has_static_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    /// This will look for:
    /// - `AWS_REGION` or `AWS_DEFAULT_REGION` for the region
    /// - `AWS_ENDPOINT_URL_COMPREHEND` or `AWS_ENDPOINT_URL` for the endpoint
    /// - `AWS_MAX_ATTEMPTS` for the total attempt count (retries + 1)
    /// - `COMPREHEND_TIMEOUT` for request timeout (in seconds)
    /// - `HTTPS_PROXY` for the proxy
    ///
    /// Credentials are not read here; the environment credentials provider
    /// picks them up at call time.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        let _ = dotenvy::dotenv();
        let mut config = Self::default();

        if let Ok(region) = env::var("AWS_REGION").or_else(|_| env::var("AWS_DEFAULT_REGION"))
            && !region.trim().is_empty()
        {
            config.region = region.trim().to_string();
        }

        if let Ok(endpoint) =
            env::var("AWS_ENDPOINT_URL_COMPREHEND").or_else(|_| env::var("AWS_ENDPOINT_URL"))
            && !endpoint.is_empty()
        {
            config.endpoint = Some(endpoint);
        }

        if let Ok(attempts) = env::var("AWS_MAX_ATTEMPTS") {
            let attempts = attempts
                .parse::<u32>()
                .ok()
                .filter(|&attempts| attempts > 0)
                .ok_or_else(|| {
                    crate::Error::InvalidRequest(format!(
                        "AWS_MAX_ATTEMPTS must be a positive integer, got `{attempts}`"
                    ))
                })?;
            config.max_retries = attempts - 1;
        }

        if let Ok(timeout_str) = env::var("COMPREHEND_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Ok(proxy) = env::var("HTTPS_PROXY").or_else(|_| env::var("https_proxy")) {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.region != DEFAULT_REGION {
            self.region = other.region;
        }
        if other.endpoint.is_some() {
            self.endpoint = other.endpoint;
        }
        if other.access_key_id.is_some() {
            self.access_key_id = other.access_key_id;
        }
        if other.secret_access_key.is_some() {
            self.secret_access_key = other.secret_access_key;
        }
        if other.session_token.is_some() {
            self.session_token = other.session_token;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        if other.connect_timeout != DEFAULT_CONNECT_TIMEOUT {
            self.connect_timeout = other.connect_timeout;
        }
        if other.max_retries != DEFAULT_MAX_RETRIES {
            self.max_retries = other.max_retries;
        }
        if other.retry_base_delay != DEFAULT_RETRY_BASE_DELAY {
            self.retry_base_delay = other.retry_base_delay;
        }
        if other.retry_max_delay != DEFAULT_RETRY_MAX_DELAY {
            self.retry_max_delay = other.retry_max_delay;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.user_agent_suffix.is_some() {
            self.user_agent_suffix = other.user_agent_suffix;
        }
        if other.worker_threads.is_some() {
            self.worker_threads = other.worker_threads;
        }
        if other.connection_pool != ConnectionPoolConfig::default() {
            self.connection_pool = other.connection_pool;
        }

        self
    }
}

/// Configuration for HTTP connection pooling.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host
    pub max_idle_per_host: usize,

    /// Idle connection timeout
    pub idle_timeout: Duration,

    /// TCP keep-alive interval
    pub tcp_keepalive: Option<Duration>,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 50,
            idle_timeout: Duration::from_secs(90),
            tcp_keepalive: Some(Duration::from_secs(60)),
        }
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        self
    }

    /// Set the endpoint override.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Set static credentials.
    pub fn credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.config.access_key_id = Some(access_key_id.into());
        self.config.secret_access_key = Some(SecretString::new(
            secret_access_key.into().into_boxed_str(),
        ));
        self
    }

    /// Set the session token for temporary credentials.
    pub fn session_token(mut self, token: impl Into<String>) -> Self {
        self.config.session_token = Some(SecretString::new(token.into().into_boxed_str()));
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the base and maximum retry delays.
    pub fn retry_delays(mut self, base: Duration, max: Duration) -> Self {
        self.config.retry_base_delay = base;
        self.config.retry_max_delay = max;
        self
    }

    /// Add a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Set the HTTPS proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Append a suffix to the `User-Agent` header.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Set connection pool configuration.
    pub fn connection_pool(mut self, config: ConnectionPoolConfig) -> Self {
        self.config.connection_pool = config;
        self
    }

    /// Set the worker thread count of the blocking client's runtime.
    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.config.worker_threads = Some(threads.max(1));
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
