//! Domain identifiers (strongly-typed IDs).
//!
//! # サーバ採番の文字列 ID + Phantom type パターン
//! Identifiers are assigned by the backend (Mongo-style object IDs), so the
//! client treats them as opaque strings. A generic `Id<T>` with a
//! [`PhantomData`] marker provides one implementation while keeping
//! `TaskId` and `UserId` distinct at compile time.
//!
//! On the wire the backend sends `_id`, with `id` accepted as an alias for
//! older payloads; `#[serde(transparent)]` keeps the JSON a plain string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Marker trait for ID owner types.
///
/// `prefix()` is used only for `Display` ("task-...", "user-...") so logs
/// stay unambiguous.
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic, server-assigned identifier.
///
/// `T` is a zero-sized marker: it costs nothing at runtime but prevents a
/// `UserId` from being passed where a `TaskId` is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Marker for task identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {}

impl IdMarker for Task {
    fn prefix() -> &'static str {
        "task-"
    }
}

/// Marker for user identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum User {}

impl IdMarker for User {
    fn prefix() -> &'static str {
        "user-"
    }
}

/// Identifier of a task (backend-assigned).
pub type TaskId = Id<Task>;

/// Identifier of a user / employee (backend-assigned).
pub type UserId = Id<User>;
