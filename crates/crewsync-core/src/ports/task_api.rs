//! Task API port.
//!
//! The seam between the sync loop and the REST backend. The production
//! implementation is `api::RestApi`; tests script this trait directly.

use async_trait::async_trait;

use crate::domain::{TaskId, TaskRecord, TaskStatus};
use crate::error::Result;

/// Read/mutate operations the backend exposes for tasks.
///
/// Design intent:
/// - `list_tasks` is an idempotent read: a result always fully replaces the
///   caller's snapshot, never merges into it.
/// - Mutations return the updated task so the caller can patch local state
///   after confirmation, not before.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// All tasks visible to the current user, in backend order.
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>>;

    /// Start the task's timer (`pending` -> `in_progress`).
    async fn start_task(&self, id: &TaskId) -> Result<TaskRecord>;

    /// Complete the task (`in_progress` -> `completed`).
    async fn complete_task(&self, id: &TaskId) -> Result<TaskRecord>;

    /// Stop the timer without completing.
    async fn stop_task(&self, id: &TaskId) -> Result<TaskRecord>;

    /// Set the status directly (admin/manager flow).
    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<TaskRecord>;
}
