//! View-local task state.
//!
//! One mutable snapshot, one writer at a time. Every full list response is
//! tagged with a sequence number allocated when the read was issued; the
//! store discards a response whose tag is below the last applied one, so
//! "last write wins" is decided by request order instead of arrival order.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{StatusSnapshot, StatusTransition, TaskRecord};
use crate::observability::StatusCounts;

/// Result of offering a full list response to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The list replaced the snapshot; these transitions were observed.
    Applied(Vec<StatusTransition>),

    /// The response was older than what is already applied; dropped whole.
    Stale,
}

struct StoreState {
    tasks: Vec<TaskRecord>,

    /// Baseline for the next diff. Rebuilt only by applied polls; local
    /// patches leave it alone so the next poll still reports the change,
    /// as the dashboard always has.
    baseline: StatusSnapshot,

    /// Sequence number of the newest write (poll or patch).
    applied_seq: u64,
}

/// Shared handle to the task cache. Cheap to clone.
#[derive(Clone)]
pub struct TaskStore {
    state: Arc<Mutex<StoreState>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                tasks: Vec::new(),
                baseline: StatusSnapshot::default(),
                applied_seq: 0,
            })),
        }
    }

    /// Offer a full list response tagged with its request sequence.
    ///
    /// On success the list replaces the cache wholesale (no merge), the
    /// diff against the old baseline is returned, and the new list becomes
    /// the baseline unconditionally.
    pub async fn apply(&self, seq: u64, tasks: Vec<TaskRecord>) -> ApplyOutcome {
        let mut state = self.state.lock().await;

        if seq < state.applied_seq {
            return ApplyOutcome::Stale;
        }

        let transitions = state.baseline.diff(&tasks);
        state.baseline = StatusSnapshot::from_tasks(&tasks);
        state.tasks = tasks;
        state.applied_seq = seq;

        ApplyOutcome::Applied(transitions)
    }

    /// Patch exactly one task from a backend-confirmed mutation.
    ///
    /// Only the targeted task's status, time tracking, and (optionally)
    /// completion date change; every other record is untouched. Advancing
    /// the sequence here is what fences out list responses that were
    /// already in flight when the mutation was confirmed.
    ///
    /// Returns false when the task is not in the cache (it may have been
    /// reassigned away); the sequence still advances.
    pub async fn patch_confirmed(
        &self,
        seq: u64,
        confirmed: &TaskRecord,
        completed_at: Option<DateTime<Utc>>,
    ) -> bool {
        let mut state = self.state.lock().await;
        state.applied_seq = state.applied_seq.max(seq);

        let Some(task) = state.tasks.iter_mut().find(|t| t.id == confirmed.id) else {
            return false;
        };

        task.status = confirmed.status;
        task.time_tracking = confirmed.time_tracking;
        if let Some(at) = completed_at {
            task.completed_date = Some(at);
        }
        true
    }

    /// Current cache contents (cloned).
    pub async fn tasks(&self) -> Vec<TaskRecord> {
        self.state.lock().await.tasks.clone()
    }

    pub async fn counts(&self) -> StatusCounts {
        let state = self.state.lock().await;
        StatusCounts::from_tasks(&state.tasks)
    }

    /// Sequence of the newest applied write (for diagnostics and tests).
    pub async fn applied_seq(&self) -> u64 {
        self.state.lock().await.applied_seq
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
