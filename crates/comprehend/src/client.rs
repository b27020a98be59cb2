//! Main client implementation for Amazon Comprehend

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use comprehend_core::retry::{BackoffStrategy, ExponentialBackoff, RetryDecision};
use http::HeaderMap;
use secrecy::ExposeSecret;
use tokio::runtime::Handle;
use tracing::Instrument;
use url::Url;

use crate::{
    SERVICE_NAME, TARGET_PREFIX,
    config::ClientConfig,
    credentials::{
        Credentials, CredentialsProviderChain, ProvideCredentials, SharedCredentialsProvider,
        StaticCredentialsProvider,
    },
    error::{Error, Result},
    http::{RawResponse, ReqwestTransport, RequestBuilder, RequestSigner, Response, Transport},
    observability::{self, RequestMetadata, RequestTimer, ResponseMetadata},
    operation::{Operation, OperationHandle},
    operations,
    types::{PageRequest, Paginated},
};

/// Main client for Amazon Comprehend.
///
/// Every service operation is an async method on this type, e.g.
/// [`detect_sentiment`](Client::detect_sentiment). The client handles
/// validation, signing, retries and error classification. Cloning is cheap:
/// clones share one connection pool and credentials provider.
///
/// # Example
///
/// ```rust,no_run
/// use comprehend::{Client, Credentials};
///
/// # fn example() -> comprehend::Result<()> {
/// let client = Client::builder()
///     .region("us-west-2")
///     .credentials(Credentials::new("AKIDEXAMPLE", "secret"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    credentials: SharedCredentialsProvider,
    signer: RequestSigner,
    endpoint: Url,
    backoff: ExponentialBackoff,
    default_headers: HeaderMap,
    runtime: Option<Handle>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("region", &self.inner.signer.region())
            .field("transport", &self.inner.transport.name())
            .field("credentials", &self.inner.credentials.name())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for a region, with credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built.
    pub fn new(region: impl Into<String>) -> Result<Self> {
        Self::builder().region(region).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        ClientBuilder::from_config(config).build()
    }

    /// Create a client from the environment (see [`ClientConfig::from_env`]).
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// The signing region.
    pub fn region(&self) -> &str {
        self.inner.signer.region()
    }

    /// Wire names of every operation this client can call.
    pub fn operation_names() -> Vec<&'static str> {
        operations::CATALOG.iter().map(|info| info.name).collect()
    }

    /// Run one operation and return its parsed response.
    ///
    /// The per-operation methods call this; it is public so generic code can
    /// run any request type.
    pub async fn execute<O: Operation>(&self, request: O) -> Result<O::Output> {
        Ok(self.execute_raw(request).await?.into_parsed())
    }

    /// Run one operation and return the parsed response with its HTTP
    /// metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] without any I/O when a required
    /// member is absent; otherwise the classified failure of the last
    /// attempt.
    pub async fn execute_raw<O: Operation>(&self, request: O) -> Result<RawResponse<O::Output>> {
        request.validate()?;

        let span = tracing::info_span!(
            "comprehend.operation",
            operation = O::NAME,
            target = %format_args!("{TARGET_PREFIX}.{}", O::NAME),
        );

        async move {
            let body = Bytes::from(serde_json::to_vec(&request)?);
            let metadata = RequestMetadata::new(O::NAME, body.len());
            let timer = RequestTimer::start();

            let result = self
                .inner
                .backoff
                .execute_with(
                    |attempt| self.send_once(O::NAME, body.clone(), attempt),
                    |err: &Error, _attempt| classify::<O>(err),
                )
                .await;

            let elapsed = timer.elapsed();
            match result {
                Ok(mut response) => {
                    response.elapsed = elapsed;
                    ResponseMetadata::new(elapsed)
                        .with_status(response.status().as_u16())
                        .with_body_size(response.body().len())
                        .with_retries(response.retries_taken)
                        .with_request_id(response.request_id())
                        .log_success(&metadata);
                    response.into_parsed_raw()
                }
                Err(err) => {
                    let mut outcome =
                        ResponseMetadata::new(elapsed).with_request_id(err.request_id());
                    if let Some(status) = err.status() {
                        outcome = outcome.with_status(status);
                    }
                    outcome.log_error(&metadata, &err);
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// One signed HTTP attempt.
    async fn send_once(&self, operation: &'static str, body: Bytes, attempt: u32) -> Result<Response> {
        let mut request = RequestBuilder::operation(&self.inner.endpoint, operation)?
            .default_headers(&self.inner.default_headers)
            .body(body)
            .build();

        let credentials = self.inner.credentials.provide_credentials().await?;
        self.inner.signer.sign(&mut request, &credentials)?;

        RequestMetadata::new(operation, request.body.len())
            .with_attempt(attempt)
            .log_request();

        let mut response = self.inner.transport.send(request).await?;
        response.retries_taken = attempt;
        response.error_for_status()
    }

    /// Start an operation as a background task.
    ///
    /// The task runs on the runtime handle given to the builder, or on the
    /// ambient tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when no runtime handle was configured and the call is made
    /// outside a tokio runtime, like [`tokio::spawn`].
    pub fn spawn<O: Operation>(&self, request: O) -> OperationHandle<O::Output> {
        let client = self.clone();
        self.spawn_task(O::NAME, async move { client.execute(request).await })
    }

    /// Start an operation as a background task and call `callback` with its
    /// result once it completes.
    ///
    /// The callback runs exactly once, on the worker thread, before the
    /// handle resolves.
    pub fn spawn_with_callback<O, F>(&self, request: O, callback: F) -> OperationHandle<O::Output>
    where
        O: Operation,
        F: FnOnce(&Result<O::Output>) + Send + 'static,
    {
        let client = self.clone();
        self.spawn_task(O::NAME, async move {
            let result = client.execute(request).await;
            callback(&result);
            result
        })
    }

    fn spawn_task<T, F>(&self, operation: &'static str, future: F) -> OperationHandle<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let handle = match &self.inner.runtime {
            Some(runtime) => runtime.spawn(future),
            None => tokio::spawn(future),
        };
        OperationHandle::new(operation, handle)
    }

    /// Call a `List*` operation until the last page and collect every item.
    ///
    /// # Errors
    ///
    /// Fails with the first failing page, or with [`Error::ResponseValidation`]
    /// if the service hands back a continuation token it already returned.
    pub async fn paginate<O>(&self, mut request: O) -> Result<Vec<<O::Output as Paginated>::Item>>
    where
        O: Operation + PageRequest,
        O::Output: Paginated,
    {
        let mut items = Vec::new();
        let mut seen = HashSet::new();

        loop {
            let page = self.execute(request.clone()).await?;
            items.extend_from_slice(page.items());

            let Some(token) = page.next_token() else {
                return Ok(items);
            };
            if !seen.insert(token.to_string()) {
                return Err(Error::ResponseValidation(format!(
                    "{} returned next token '{token}' more than once",
                    O::NAME
                )));
            }

            tracing::debug!(operation = O::NAME, items_so_far = items.len(), "Fetching next page");
            request.set_next_token(Some(token.to_string()));
        }
    }

    /// Call an operation by wire name with a JSON request body.
    ///
    /// The body is deserialized into the operation's request type, so
    /// validation and retries behave exactly as for the typed methods.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for an unknown operation name.
    pub async fn invoke(
        &self,
        operation: &str,
        request: serde_json::Value,
    ) -> Result<serde_json::Value> {
        match operations::dispatch(self, operation, request) {
            Some(call) => call.await,
            None => Err(Error::InvalidRequest(format!("unknown operation '{operation}'"))),
        }
    }
}

/// Retry classification shared by every operation.
fn classify<O: Operation>(err: &Error) -> RetryDecision {
    if !err.is_retryable() {
        return RetryDecision::Stop;
    }
    if O::IDEMPOTENT || err.is_retryable_non_idempotent() {
        return RetryDecision::Retry;
    }
    observability::log_idempotence_hazard(O::NAME, err);
    RetryDecision::Stop
}

/// Builder for creating a configured [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    credentials: Option<SharedCredentialsProvider>,
    runtime: Option<Handle>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("transport", &self.transport.as_ref().map(|t| t.name()))
            .field("credentials", &self.credentials.as_ref().map(|c| c.name()))
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    /// Start from an existing configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration built so far.
    pub fn current_config(&self) -> &ClientConfig {
        &self.config
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        self
    }

    /// Send requests to this endpoint instead of the regional default.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Sign with fixed credentials.
    pub fn credentials(self, credentials: Credentials) -> Self {
        self.credentials_provider(StaticCredentialsProvider::new(credentials))
    }

    /// Resolve credentials from a provider at call time.
    pub fn credentials_provider(self, provider: impl ProvideCredentials + 'static) -> Self {
        self.shared_credentials_provider(Arc::new(provider))
    }

    /// Resolve credentials from an already shared provider.
    pub fn shared_credentials_provider(mut self, provider: SharedCredentialsProvider) -> Self {
        self.credentials = Some(provider);
        self
    }

    /// Use a custom transport, e.g. a recording fake in tests.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Run [`Client::spawn`] tasks on this runtime.
    pub fn runtime_handle(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Set the timeout of a single HTTP attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the delay before the first retry and the cap on later delays.
    pub fn retry_delays(mut self, base: Duration, max: Duration) -> Self {
        self.config.retry_base_delay = base;
        self.config.retry_max_delay = max;
        self
    }

    /// Build the client with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for an empty or non-HTTP endpoint and
    /// [`Error::HttpClient`] if the default transport cannot be built.
    pub fn build(self) -> Result<Client> {
        let endpoint = parse_endpoint(&self.config.resolved_endpoint())?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&self.config)?),
        };

        let credentials = match self.credentials {
            Some(provider) => provider,
            None => default_credentials(&self.config),
        };

        let backoff = if self.config.max_retries == 0 {
            ExponentialBackoff::none()
        } else {
            ExponentialBackoff::builder()
                .max_retries(self.config.max_retries)
                .initial_delay(self.config.retry_base_delay)
                .max_delay(self.config.retry_max_delay)
                .build()
        };

        tracing::debug!(
            endpoint = %endpoint,
            region = %self.config.region,
            transport = transport.name(),
            credentials = credentials.name(),
            "Built Comprehend client"
        );

        Ok(Client {
            inner: Arc::new(ClientInner {
                transport,
                credentials,
                signer: RequestSigner::new(self.config.region.clone(), SERVICE_NAME),
                endpoint,
                backoff,
                default_headers: self.config.default_headers,
                runtime: self.runtime,
            }),
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidUrl("Endpoint cannot be empty".to_string()));
    }

    let endpoint: Url = raw
        .trim()
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{e}")))?;

    match endpoint.scheme() {
        "http" | "https" => Ok(endpoint),
        scheme => Err(Error::InvalidUrl(format!(
            "Invalid URL scheme '{scheme}'. Only 'http' and 'https' are supported."
        ))),
    }
}

fn default_credentials(config: &ClientConfig) -> SharedCredentialsProvider {
    if let (Some(id), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
        let mut credentials = Credentials::new(id.clone(), secret.expose_secret());
        if let Some(token) = &config.session_token {
            credentials = credentials.with_session_token(token.expose_secret());
        }
        return Arc::new(StaticCredentialsProvider::new(credentials));
    }
    Arc::new(CredentialsProviderChain::default_chain())
}
