//! Ports - 抽象化レイヤー
//!
//! Trait seams between the sync loop and the outside world: the REST
//! backend, the toast/notification surface, and the wall clock. Each has a
//! production implementation and a test double.

pub mod clock;
pub mod notify;
pub mod task_api;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::notify::{Notification, NotificationSink, Severity};
pub use self::task_api::TaskApi;
