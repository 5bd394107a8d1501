//! Capability resolution.
//!
//! The original dashboard gated features with role/designation string
//! comparisons scattered across views. Here every gate is resolved once,
//! from the profile, into a set of capabilities consumed uniformly by the
//! navigation builder and the sync layer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::user::{Role, UserProfile};

/// Something a signed-in user is allowed to do or see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Stat cards and charts on the dashboard landing page.
    ViewAdminPanels,
    /// Create and assign tasks.
    CreateTasks,
    /// Download attendance records.
    ManageAttendance,
    /// Upload attendance records (project managers).
    UploadAttendance,
    /// Sales calls / leads / reports board.
    ViewSalesBoard,
    /// Eligible for the task-status polling loop and its notifications.
    ReceiveStatusUpdates,
}

/// Resolved capability set for one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Pure function from profile to capabilities. No shared state; call it
/// wherever a gate is needed.
pub fn resolve_capabilities(user: &UserProfile) -> CapabilitySet {
    use Capability::*;

    let mut caps = BTreeSet::new();

    match user.role {
        Role::Admin => {
            caps.extend([
                ViewAdminPanels,
                CreateTasks,
                ManageAttendance,
                ReceiveStatusUpdates,
            ]);
        }
        _ if user.is_project_manager() => {
            caps.extend([
                ViewAdminPanels,
                CreateTasks,
                UploadAttendance,
                ReceiveStatusUpdates,
            ]);
        }
        _ if user.is_sales() => {
            caps.insert(ViewSalesBoard);
        }
        _ => {}
    }

    CapabilitySet(caps)
}
