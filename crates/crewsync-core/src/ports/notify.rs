//! Notification port: where toasts go.
//!
//! The render layer is out of scope, so user-visible notifications leave
//! the core through this seam. The CLI prints them; a GUI would toast them;
//! tests record them.

use crate::domain::StatusTransition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// One user-visible notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A task changed status between two polls.
    StatusChanged(StatusTransition),

    /// A user-initiated action was confirmed by the backend.
    ActionSucceeded { message: String },

    /// A user-initiated action failed; the local list was left unchanged.
    ActionFailed { message: String },
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Notification::StatusChanged(_) | Notification::ActionSucceeded { .. } => {
                Severity::Success
            }
            Notification::ActionFailed { .. } => Severity::Error,
        }
    }

    /// The rendered toast line.
    pub fn message(&self) -> String {
        match self {
            Notification::StatusChanged(transition) => transition.message(),
            Notification::ActionSucceeded { message } | Notification::ActionFailed { message } => {
                message.clone()
            }
        }
    }
}

/// Sink for user-visible notifications. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
