//! Blocking client
//!
//! [`BlockingClient`] owns a multi-thread tokio runtime and runs every call
//! of an inner [`Client`] on it. Each operation is a plain method that
//! blocks the calling thread; `submit` and `submit_with_callback` return an
//! [`OperationHandle`] immediately instead.
//!
//! Do not call the blocking methods from inside an async context: they block
//! the executor thread.

use std::fmt;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::client::{Client, ClientBuilder};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::operation::{Operation, OperationHandle};
use crate::types::{PageRequest, Paginated};

/// Blocking facade over [`Client`].
///
/// Every operation of [`Client`] has a blocking method of the same name.
/// The runtime is shut down when the last clone is dropped.
///
/// # Example
///
/// ```rust,no_run
/// use comprehend::{BlockingClient, ClientConfig, DetectDominantLanguageRequest};
///
/// # fn example() -> comprehend::Result<()> {
/// let client = BlockingClient::new(ClientConfig::with_region("us-east-1"))?;
/// let response = client.detect_dominant_language(
///     DetectDominantLanguageRequest::builder().text("Hola a todos").build()?,
/// )?;
/// println!("{:?}", response.languages);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BlockingClient {
    client: Client,
    runtime: Arc<OwnedRuntime>,
}

/// Runtime that shuts down without blocking when dropped.
///
/// The last [`BlockingClient`] clone may be dropped on one of the runtime's
/// own workers, e.g. from a `submit_with_callback` closure, where a plain
/// `Runtime` drop panics.
struct OwnedRuntime(Option<Runtime>);

impl OwnedRuntime {
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match &self.0 {
            Some(runtime) => runtime.block_on(future),
            None => unreachable!("runtime is only taken on drop"),
        }
    }
}

impl Drop for OwnedRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            runtime.shutdown_background();
        }
    }
}

impl fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingClient")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl BlockingClient {
    /// Create a blocking client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or the client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::from_builder(ClientBuilder::from_config(config))
    }

    /// Create a blocking client from a prepared builder, keeping its
    /// transport and credentials provider.
    pub fn from_builder(builder: ClientBuilder) -> Result<Self> {
        let runtime = build_runtime(builder.current_config().worker_threads)?;
        let client = builder.runtime_handle(runtime.handle().clone()).build()?;

        Ok(Self {
            client,
            runtime: Arc::new(OwnedRuntime(Some(runtime))),
        })
    }

    /// The async client all calls go through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Run one operation to completion on the owned runtime.
    pub fn execute<O: Operation>(&self, request: O) -> Result<O::Output> {
        self.runtime.block_on(self.client.execute(request))
    }

    /// Run a `List*` operation over every page.
    pub fn paginate<O>(&self, request: O) -> Result<Vec<<O::Output as Paginated>::Item>>
    where
        O: Operation + PageRequest,
        O::Output: Paginated,
    {
        self.runtime.block_on(self.client.paginate(request))
    }

    /// Start an operation on the owned runtime and return right away.
    pub fn submit<O: Operation>(&self, request: O) -> OperationHandle<O::Output> {
        self.client.spawn(request)
    }

    /// Start an operation on the owned runtime; `callback` receives the
    /// result once it completes.
    pub fn submit_with_callback<O, F>(&self, request: O, callback: F) -> OperationHandle<O::Output>
    where
        O: Operation,
        F: FnOnce(&Result<O::Output>) + Send + 'static,
    {
        self.client.spawn_with_callback(request, callback)
    }
}

fn build_runtime(worker_threads: Option<usize>) -> Result<Runtime> {
    let mut builder = Builder::new_multi_thread();
    builder.thread_name("comprehend-worker").enable_all();
    if let Some(threads) = worker_threads {
        builder.worker_threads(threads.max(1));
    }
    builder.build().map_err(Error::Io)
}
