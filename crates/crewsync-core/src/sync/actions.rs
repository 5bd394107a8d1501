//! User-initiated task mutations (apply-after-confirm).
//!
//! Despite the product calling these "optimistic", nothing is applied
//! before the backend answers: on success the one targeted task is patched
//! from the confirmed record and a full refetch is triggered; on failure
//! the local list is left exactly as it was and the error becomes a toast.

use crate::domain::{TaskId, TaskRecord, TaskStatus};
use crate::error::ClientError;
use crate::ports::Notification;

use super::TaskSync;

/// Which mutation the user asked for; drives endpoint choice and wording.
#[derive(Debug, Clone, Copy)]
enum TaskAction {
    Start,
    Complete,
    Stop,
    SetStatus(TaskStatus),
}

impl TaskAction {
    fn verb(self) -> &'static str {
        match self {
            TaskAction::Start => "start",
            TaskAction::Complete => "complete",
            TaskAction::Stop => "stop",
            TaskAction::SetStatus(_) => "update",
        }
    }

    fn success_message(self) -> String {
        match self {
            TaskAction::Start => "Task started! Timer is now running.".to_string(),
            TaskAction::Complete => "Task completed successfully!".to_string(),
            TaskAction::Stop => "Task timer stopped".to_string(),
            TaskAction::SetStatus(_) => "Task status updated successfully".to_string(),
        }
    }

    /// Permission denials get their own wording; everything else collapses
    /// to a generic retry prompt, network problems slightly more specific.
    fn failure_message(self, error: &ClientError) -> String {
        match error {
            ClientError::Permission(_) => {
                format!("You don't have permission to {} this task.", self.verb())
            }
            ClientError::Network(_) => "Network error. Please try again.".to_string(),
            _ => format!("Failed to {} task. Please try again.", self.verb()),
        }
    }
}

impl TaskSync {
    /// Start the task's timer.
    pub async fn start(&self, id: &TaskId) {
        let result = self.api.start_task(id).await;
        self.settle(id, TaskAction::Start, result).await;
    }

    /// Complete the task. The completion date comes from the confirmed
    /// record, or is stamped locally when the backend omits it.
    pub async fn complete(&self, id: &TaskId) {
        let result = self.api.complete_task(id).await;
        self.settle(id, TaskAction::Complete, result).await;
    }

    /// Stop the timer without completing.
    pub async fn stop(&self, id: &TaskId) {
        let result = self.api.stop_task(id).await;
        self.settle(id, TaskAction::Stop, result).await;
    }

    /// Set the status directly (admin/manager flow).
    pub async fn set_status(&self, id: &TaskId, status: TaskStatus) {
        let result = self.api.update_status(id, status).await;
        self.settle(id, TaskAction::SetStatus(status), result).await;
    }

    async fn settle(
        &self,
        id: &TaskId,
        action: TaskAction,
        result: crate::error::Result<TaskRecord>,
    ) {
        match result {
            Ok(confirmed) => {
                let completed_at = match action {
                    TaskAction::Complete => {
                        Some(confirmed.completed_date.unwrap_or_else(|| self.clock.now()))
                    }
                    _ => None,
                };

                let seq = self.next_seq();
                if !self.store.patch_confirmed(seq, &confirmed, completed_at).await {
                    tracing::debug!(task = %id, "confirmed task not in local cache");
                }

                self.sink.notify(Notification::ActionSucceeded {
                    message: action.success_message(),
                });

                // Mirror the dashboard: a confirmed mutation re-fetches the
                // whole list. Failure here is a log line, not a toast; the
                // next poll tick covers it.
                if let Err(e) = self.refresh().await {
                    tracing::warn!(error = %e, "refetch after mutation failed");
                }
            }
            Err(error) => {
                tracing::warn!(task = %id, verb = action.verb(), error = %error, "task action failed");
                self.sink.notify(Notification::ActionFailed {
                    message: action.failure_message(&error),
                });
            }
        }
    }
}
