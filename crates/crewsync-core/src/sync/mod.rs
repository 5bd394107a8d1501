//! Sync - タスク同期ループ
//!
//! # 主要コンポーネント
//! - **TaskSync**: fetch → diff → notify の表面（façade）
//! - **TaskStore**: view-local キャッシュ（sequence ガード付き）
//! - **actions**: apply-after-confirm のミューテーション
//! - **Poller**: 固定間隔のスケジューラ
//!
//! Control flow: the poller (or a mutation-triggered refetch) allocates a
//! sequence number, fetches the authoritative list, and offers it to the
//! store; applied responses replace the snapshot wholesale and their status
//! transitions fan out through the notification sink.

mod actions;
mod poller;
mod store;

pub use poller::{PollPhase, Poller};
pub use store::{ApplyOutcome, TaskStore};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::ports::{Clock, Notification, NotificationSink, TaskApi};

/// Synchronization façade: owns the API port, the store, the notification
/// sink, and the read-sequence counter.
pub struct TaskSync {
    api: Arc<dyn TaskApi>,
    sink: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
    store: TaskStore,
    seq: AtomicU64,
}

impl TaskSync {
    pub fn new(
        api: Arc<dyn TaskApi>,
        sink: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            sink,
            clock,
            store: TaskStore::new(),
            seq: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Allocate the tag for the next outstanding read or confirmed write.
    /// Monotonic across the whole view; never reused.
    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Fetch the authoritative task list and reconcile.
    ///
    /// The sequence number is taken *before* the request goes out, so a
    /// response that raced with a newer write comes back stale and is
    /// dropped without side effects.
    pub async fn refresh(&self) -> Result<()> {
        let seq = self.next_seq();
        let tasks = self.api.list_tasks().await?;

        match self.store.apply(seq, tasks).await {
            ApplyOutcome::Applied(transitions) => {
                for transition in transitions {
                    tracing::debug!(
                        task = %transition.task_id,
                        from = %transition.from,
                        to = %transition.to,
                        "status transition observed"
                    );
                    self.sink.notify(Notification::StatusChanged(transition));
                }
            }
            ApplyOutcome::Stale => {
                tracing::debug!(seq, "discarded stale task list response");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::domain::{TaskId, TaskRecord, TaskStatus, TimeTracking};
    use crate::error::{ClientError, Result};
    use crate::ports::{Notification, NotificationSink, TaskApi};

    pub(crate) fn task(id: &str, title: &str, status: TaskStatus) -> TaskRecord {
        TaskRecord {
            id: TaskId::new(id),
            title: title.to_string(),
            description: None,
            status,
            priority: None,
            assigned_to: None,
            assigned_by: None,
            start_date: None,
            due_date: None,
            completed_date: None,
            time_tracking: TimeTracking::default(),
        }
    }

    /// Scripted API double: queued responses, consumed in order. An
    /// exhausted script answers with a network error so tests never apply
    /// an accidental empty list.
    #[derive(Default)]
    pub(crate) struct ScriptedApi {
        lists: Mutex<VecDeque<Result<Vec<TaskRecord>>>>,
        mutations: Mutex<VecDeque<Result<TaskRecord>>>,
        pub(crate) list_calls: AtomicUsize,
    }

    impl ScriptedApi {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn push_list(&self, response: Result<Vec<TaskRecord>>) {
            self.lists.lock().unwrap().push_back(response);
        }

        pub(crate) fn push_mutation(&self, response: Result<TaskRecord>) {
            self.mutations.lock().unwrap().push_back(response);
        }

        pub(crate) fn list_call_count(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        fn exhausted() -> ClientError {
            ClientError::Network("script exhausted".to_string())
        }

        fn next_mutation(&self) -> Result<TaskRecord> {
            self.mutations
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Self::exhausted()))
        }
    }

    #[async_trait]
    impl TaskApi for ScriptedApi {
        async fn list_tasks(&self) -> Result<Vec<TaskRecord>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.lists
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Self::exhausted()))
        }

        async fn start_task(&self, _id: &TaskId) -> Result<TaskRecord> {
            self.next_mutation()
        }

        async fn complete_task(&self, _id: &TaskId) -> Result<TaskRecord> {
            self.next_mutation()
        }

        async fn stop_task(&self, _id: &TaskId) -> Result<TaskRecord> {
            self.next_mutation()
        }

        async fn update_status(&self, _id: &TaskId, _status: TaskStatus) -> Result<TaskRecord> {
            self.next_mutation()
        }
    }

    /// Records every notification for later assertions.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        notes: Mutex<Vec<Notification>>,
    }

    impl RecordingSink {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn recorded(&self) -> Vec<Notification> {
            self.notes.lock().unwrap().clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: Notification) {
            self.notes.lock().unwrap().push(notification);
        }
    }
}
