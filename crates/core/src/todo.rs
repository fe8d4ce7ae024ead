//! The todo entity and its identifier.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier for a todo item.
///
/// Remote todos carry server-assigned ids; locally created todos derive one
/// from the wall clock. Uniqueness against a fetched batch is not enforced,
/// so a collision is theoretically possible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TodoId(pub i64);

impl TodoId {
    /// Derive an id from the wall clock (milliseconds since the UNIX epoch).
    pub fn from_wall_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Self(millis)
    }
}

/// A single todo item.
///
/// `completed` defaults to `false` when absent from the wire; unknown wire
/// fields (e.g. `userId`) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique-enough identifier (see [`TodoId`]).
    pub id: TodoId,
    /// Display text. The store guarantees this is non-empty after trimming.
    pub title: String,
    /// Whether the item has been checked off.
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create a fresh, uncompleted todo.
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}
