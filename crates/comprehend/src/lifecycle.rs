//! State machine of asynchronous analysis jobs
//!
//! ```text
//! SUBMITTED -> IN_PROGRESS -> COMPLETED | FAILED | STOPPED | PARTIAL_SUCCESS
//!                   |
//!                   +-> STOP_REQUESTED -> COMPLETED | STOPPED
//! ```
//!
//! The service owns the machine; the client only sees the status reported
//! by a `Describe*Job` call. These helpers let callers reason about that
//! status, for example when polling. Polling policy stays with the caller.

use crate::types::JobStatus;

impl JobStatus {
    /// Whether the job has stopped changing state.
    ///
    /// Unknown statuses are not terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Failed | JobStatus::Stopped | JobStatus::PartialSuccess
        )
    }

    /// Whether a `Stop*Job` call will be accepted in this state.
    pub fn is_stoppable(&self) -> bool {
        self.stop_outcome().is_some()
    }

    /// Status a stop call leaves the job in, or `None` when the service
    /// rejects the call with `InvalidRequestException`.
    pub fn stop_outcome(&self) -> Option<JobStatus> {
        match self {
            JobStatus::Submitted | JobStatus::InProgress | JobStatus::StopRequested => {
                Some(JobStatus::StopRequested)
            }
            _ => None,
        }
    }

    /// Whether the service may move a job from this status to `next`.
    pub fn can_transition_to(&self, next: &JobStatus) -> bool {
        use JobStatus::*;

        match (self, next) {
            (Submitted, InProgress | Failed | StopRequested) => true,
            (
                InProgress,
                Completed | Failed | Stopped | PartialSuccess | StopRequested,
            ) => true,
            (StopRequested, Completed | Stopped | Failed) => true,
            _ => false,
        }
    }
}
