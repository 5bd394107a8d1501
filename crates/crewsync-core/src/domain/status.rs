//! Task status as reported by the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status (backend-owned enumeration).
///
/// The backend computes `overdue` server-side; the client never derives it
/// into this enum, it only displays what it was told (see
/// `TaskRecord::is_overdue` for the due-date highlight, which is a separate
/// concern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Assigned, not started.
    Pending,

    /// Timer running, someone is on it.
    InProgress,

    /// Done.
    Completed,

    /// Past its due date without completion (backend-computed).
    Overdue,

    /// Abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Human-readable label used in notifications ("in progress", not
    /// "in_progress").
    pub fn human(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    /// Is this a terminal status (no further transitions expected)?
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.human())
    }
}
