//! Task record: the unit the dashboard synchronizes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{TaskId, UserId};
use super::status::TaskStatus;

/// Priority as assigned by whoever created the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Minimal reference to a person embedded in a task payload.
///
/// The backend populates `assignedTo`/`assignedBy` with these; the client
/// only ever needs a display name out of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl PersonRef {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Time-tracking aggregate maintained by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTracking {
    /// Total elapsed time in milliseconds.
    #[serde(default)]
    pub total_time_spent: u64,
}

impl TimeTracking {
    /// Render the aggregate for display: "Not started", "4h 5m", "2d 4h 5m".
    pub fn human_duration(&self) -> String {
        if self.total_time_spent == 0 {
            return "Not started".to_string();
        }

        let hours = self.total_time_spent / (1000 * 60 * 60);
        let minutes = (self.total_time_spent % (1000 * 60 * 60)) / (1000 * 60);

        if hours >= 24 {
            format!("{}d {}h {}m", hours / 24, hours % 24, minutes)
        } else {
            format!("{hours}h {minutes}m")
        }
    }
}

/// One task as fetched from the backend.
///
/// Design:
/// - The backend owns every field; the client holds a transient read/write
///   cache that is replaced wholesale on each poll.
/// - Wire names are camelCase; `_id` with an `id` alias, matching the
///   backend's payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: TaskId,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub status: TaskStatus,

    #[serde(default)]
    pub priority: Option<Priority>,

    /// Current assignee, if any.
    #[serde(default)]
    pub assigned_to: Option<PersonRef>,

    /// Who handed the task out.
    #[serde(default)]
    pub assigned_by: Option<PersonRef>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub time_tracking: TimeTracking,
}

impl TaskRecord {
    /// Display-layer highlight: due date in the past and not completed.
    ///
    /// This intentionally does not change `status` — overdue as a *status*
    /// is the backend's call.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => due < now && self.status != TaskStatus::Completed,
            None => false,
        }
    }

    /// Assignee display name, falling back to "Unknown" when unresolved.
    pub fn assignee_name(&self) -> String {
        self.assigned_to
            .as_ref()
            .map(PersonRef::display_name)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
