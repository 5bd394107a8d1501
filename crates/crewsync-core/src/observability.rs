//! Status views over the local task cache.

use serde::{Deserialize, Serialize};

use crate::domain::{TaskRecord, TaskStatus};

/// Counts of cached tasks per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn from_tasks(tasks: &[TaskRecord]) -> Self {
        let mut counts = StatusCounts::default();
        for task in tasks {
            match task.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::Overdue => counts.overdue += 1,
                TaskStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed + self.overdue + self.cancelled
    }
}
