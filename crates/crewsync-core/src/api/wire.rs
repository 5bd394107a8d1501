//! Wire types for the backend's response envelope.
//!
//! Every endpoint answers `{ success, message?, data? }`; `data` carries
//! `{ tasks: [...] }` for the list and `{ task: {...} }` for mutations.

use serde::Deserialize;

use crate::domain::TaskRecord;

/// The uniform response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub data: Option<T>,
}

/// `data` payload of `GET /api/tasks`.
#[derive(Debug, Deserialize)]
pub struct TasksData {
    pub tasks: Vec<TaskRecord>,
}

/// `data` payload of every task mutation.
#[derive(Debug, Deserialize)]
pub struct TaskData {
    pub task: TaskRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;

    #[test]
    fn list_envelope_round_trips() {
        let json = serde_json::json!({
            "success": true,
            "data": {
                "tasks": [
                    { "_id": "t1", "title": "Report", "status": "pending" },
                    { "_id": "t2", "title": "Review", "status": "in_progress" }
                ]
            }
        });

        let envelope: ApiEnvelope<TasksData> = serde_json::from_value(json).unwrap();
        assert!(envelope.success);
        let tasks = envelope.data.unwrap().tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].status, TaskStatus::InProgress);
    }

    #[test]
    fn mutation_envelope_carries_single_task() {
        let json = serde_json::json!({
            "success": true,
            "data": {
                "task": {
                    "_id": "t1",
                    "title": "Report",
                    "status": "in_progress",
                    "timeTracking": { "totalTimeSpent": 1000 }
                }
            }
        });

        let envelope: ApiEnvelope<TaskData> = serde_json::from_value(json).unwrap();
        let task = envelope.data.unwrap().task;
        assert_eq!(task.time_tracking.total_time_spent, 1000);
    }

    #[test]
    fn failure_envelope_has_no_data() {
        let json = serde_json::json!({
            "success": false,
            "message": "You don't have permission to start this task."
        });

        let envelope: ApiEnvelope<TaskData> = serde_json::from_value(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert!(envelope.message.unwrap().contains("permission"));
    }
}
