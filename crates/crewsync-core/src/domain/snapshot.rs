//! Status snapshot and diff: which tasks changed status between two polls.

use std::collections::HashMap;

use super::ids::TaskId;
use super::status::TaskStatus;
use super::task::TaskRecord;

/// One user-visible status transition between two snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTransition {
    pub task_id: TaskId,
    pub title: String,
    pub from: TaskStatus,
    pub to: TaskStatus,
    /// Assignee display name, "Unknown" when unresolved.
    pub assignee: String,
}

impl StatusTransition {
    /// The toast line shown to the user.
    pub fn message(&self) -> String {
        format!(
            "Task \"{}\" status changed from {} to {} by {}",
            self.title,
            self.from.human(),
            self.to.human(),
            self.assignee
        )
    }
}

/// The statuses observed at the last applied poll, keyed by task ID.
///
/// Design:
/// - Only comparisons where a previous value existed are eligible: a task
///   absent from the baseline (first load, newly created) emits nothing.
/// - The baseline is rebuilt from the new list after every comparison,
///   unconditionally. Tasks that disappeared are simply forgotten.
#[derive(Debug, Clone, Default)]
pub struct StatusSnapshot {
    statuses: HashMap<TaskId, TaskStatus>,
}

impl StatusSnapshot {
    pub fn from_tasks(tasks: &[TaskRecord]) -> Self {
        Self {
            statuses: tasks.iter().map(|t| (t.id.clone(), t.status)).collect(),
        }
    }

    pub fn status_of(&self, id: &TaskId) -> Option<TaskStatus> {
        self.statuses.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Compare this baseline against a freshly fetched list.
    ///
    /// Transitions come back in the order the backend returned the tasks,
    /// which keeps notification order stable for a given response.
    pub fn diff(&self, new_tasks: &[TaskRecord]) -> Vec<StatusTransition> {
        new_tasks
            .iter()
            .filter_map(|task| {
                let previous = self.status_of(&task.id)?;
                if previous == task.status {
                    return None;
                }
                Some(StatusTransition {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                    from: previous,
                    to: task.status,
                    assignee: task.assignee_name(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::{PersonRef, TimeTracking};
    use crate::domain::UserId;

    fn task(id: &str, title: &str, status: TaskStatus) -> TaskRecord {
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

    fn assigned(mut t: TaskRecord, first: &str, last: &str) -> TaskRecord {
        t.assigned_to = Some(PersonRef {
            id: UserId::new("u1"),
            first_name: first.to_string(),
            last_name: last.to_string(),
        });
        t
    }

    #[test]
    fn emits_iff_present_in_both_and_changed() {
        let baseline = StatusSnapshot::from_tasks(&[
            task("t1", "Report", TaskStatus::Pending),
            task("t2", "Review", TaskStatus::InProgress),
        ]);

        let new = vec![
            task("t1", "Report", TaskStatus::InProgress), // changed
            task("t2", "Review", TaskStatus::InProgress), // unchanged
        ];

        let transitions = baseline.diff(&new);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].task_id, TaskId::new("t1"));
        assert_eq!(transitions[0].from, TaskStatus::Pending);
        assert_eq!(transitions[0].to, TaskStatus::InProgress);
    }

    #[test]
    fn new_tasks_emit_nothing() {
        let baseline = StatusSnapshot::from_tasks(&[task("t1", "Report", TaskStatus::Pending)]);

        // t2 was never seen before: no "transition" regardless of status.
        let new = vec![
            task("t1", "Report", TaskStatus::Pending),
            task("t2", "Review", TaskStatus::InProgress),
        ];

        assert!(baseline.diff(&new).is_empty());
    }

    #[test]
    fn first_load_emits_nothing() {
        let baseline = StatusSnapshot::default();
        let new = vec![task("t1", "Report", TaskStatus::InProgress)];
        assert!(baseline.diff(&new).is_empty());
    }

    #[test]
    fn changed_and_unseen_in_same_fetch() {
        // baseline {t1: pending}, fetch {t1: in_progress, t2: pending}
        let baseline = StatusSnapshot::from_tasks(&[task("t1", "Report", TaskStatus::Pending)]);
        let new = vec![
            task("t1", "Report", TaskStatus::InProgress),
            task("t2", "Review", TaskStatus::Pending),
        ];

        let transitions = baseline.diff(&new);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].task_id, TaskId::new("t1"));
    }

    #[test]
    fn disappeared_task_is_forgotten_by_rebuild() {
        // Baseline replacement is wholesale: if t1 drops out and later
        // reappears, that reappearance is "new", not a transition.
        let baseline = StatusSnapshot::from_tasks(&[task("t1", "Report", TaskStatus::Pending)]);

        let without_t1: Vec<TaskRecord> = vec![];
        assert!(baseline.diff(&without_t1).is_empty());

        let rebuilt = StatusSnapshot::from_tasks(&without_t1);
        assert!(rebuilt.is_empty());

        let reappeared = vec![task("t1", "Report", TaskStatus::Completed)];
        assert!(rebuilt.diff(&reappeared).is_empty());
    }

    #[test]
    fn message_uses_human_labels_and_assignee() {
        let baseline = StatusSnapshot::from_tasks(&[task("t1", "Report", TaskStatus::Pending)]);
        let new = vec![assigned(
            task("t1", "Report", TaskStatus::InProgress),
            "Mika",
            "Tanaka",
        )];

        let transitions = baseline.diff(&new);
        assert_eq!(
            transitions[0].message(),
            "Task \"Report\" status changed from pending to in progress by Mika Tanaka"
        );
    }

    #[test]
    fn unresolved_assignee_reads_unknown() {
        let baseline = StatusSnapshot::from_tasks(&[task("t1", "Report", TaskStatus::Pending)]);
        let new = vec![task("t1", "Report", TaskStatus::Completed)];

        assert_eq!(baseline.diff(&new)[0].assignee, "Unknown");
    }
}
