//! The contract every service operation implements, and the handle returned
//! by background calls

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::error::{Error, Result, ServiceErrorKind};

/// A request record bound to one service operation.
///
/// Implemented for every `<Op>Request` type by the catalog in
/// [`crate::operations`]; the request type alone determines the wire
/// operation, the response type and the retry policy.
pub trait Operation: Serialize + Send + Sync + 'static {
    /// Response record of the operation
    type Output: DeserializeOwned + Serialize + Send + 'static;

    /// Wire operation name, e.g. `DetectSentiment`
    const NAME: &'static str;

    /// Whether repeating the call verbatim is safe.
    ///
    /// `false` for calls that create server-side work (`Start*Job`,
    /// `Create*`, `ImportModel`, `StartFlywheelIteration`).
    const IDEMPOTENT: bool;

    /// Service error kinds the operation is documented to return
    const ERRORS: &'static [ServiceErrorKind];

    /// Check that every required member is present.
    fn validate(&self) -> Result<()>;
}

/// Handle to an operation running in the background.
///
/// Resolves to the operation's result when awaited. Dropping the handle
/// detaches the task; it still runs to completion.
#[derive(Debug)]
#[must_use = "dropping the handle detaches the operation"]
pub struct OperationHandle<T> {
    operation: &'static str,
    handle: JoinHandle<Result<T>>,
}

impl<T> OperationHandle<T> {
    pub(crate) fn new(operation: &'static str, handle: JoinHandle<Result<T>>) -> Self {
        Self { operation, handle }
    }

    /// Name of the running operation.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Whether the task has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Ask the task to stop.
    ///
    /// Advisory: a request already on the wire may still reach the service.
    /// Awaiting a cancelled handle yields [`Error::Cancelled`] unless the
    /// task finished first.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Block the current thread until the operation finishes.
    ///
    /// Must not be called from inside an async context.
    pub fn wait(self) -> Result<T> {
        futures::executor::block_on(self)
    }
}

impl<T> Future for OperationHandle<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let operation = self.operation;
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(err)) if err.is_cancelled() => {
                Poll::Ready(Err(Error::Cancelled { operation }))
            }
            Poll::Ready(Err(err)) => Poll::Ready(Err(Error::TaskFailed(err.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::time::Duration;

    #[tokio::test]
    async fn test_handle_resolves() {
        let handle = OperationHandle::new("DetectSentiment", tokio::spawn(async { Ok(7) }));
        assert_eq!(handle.operation(), "DetectSentiment");
        assert_eq!(handle.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_handle_pending_until_task_finishes() {
        let (tx, rx) = tokio::sync::oneshot::channel::<u32>();
        let handle = OperationHandle::new(
            "DescribeFlywheel",
            tokio::spawn(async move { Ok(rx.await.unwrap_or_default()) }),
        );

        let mut polled = tokio_test::task::spawn(handle);
        tokio_test::assert_pending!(polled.poll());
        assert!(!polled.is_finished());

        tx.send(3).unwrap();
        assert_eq!(polled.await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_cancelled_handle() {
        let handle: OperationHandle<()> = OperationHandle::new(
            "StartTopicsDetectionJob",
            tokio::spawn(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            }),
        );
        handle.cancel();

        assert_matches!(
            handle.await,
            Err(Error::Cancelled { operation: "StartTopicsDetectionJob" })
        );
    }

    #[tokio::test]
    async fn test_panicking_task() {
        let handle: OperationHandle<()> = OperationHandle::new(
            "DetectSyntax",
            tokio::spawn(async {
                if true {
                    panic!("boom");
                }
                Ok(())
            }),
        );

        assert_matches!(handle.await, Err(Error::TaskFailed(_)));
    }

    #[test]
    fn test_wait_from_sync_code() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let handle = OperationHandle::new("DetectKeyPhrases", runtime.spawn(async { Ok("done") }));

        assert_eq!(handle.wait().unwrap(), "done");
    }
}
