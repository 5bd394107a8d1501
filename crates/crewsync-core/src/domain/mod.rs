//! Domain model (IDs, statuses, records, snapshots, capabilities).

pub mod capability;
pub mod ids;
pub mod snapshot;
pub mod status;
pub mod task;
pub mod user;

pub use capability::{Capability, CapabilitySet, resolve_capabilities};
pub use ids::{TaskId, UserId};
pub use snapshot::{StatusSnapshot, StatusTransition};
pub use status::TaskStatus;
pub use task::{PersonRef, Priority, TaskRecord, TimeTracking};
pub use user::{Role, UserProfile};
