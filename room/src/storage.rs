//! Storage root and the room contract consumed by the page.
//!
//! A [`Room`] is the page's entire view of the collaboration backend. Every
//! write goes through [`Room::mutate`], which runs the closure atomically
//! against the shared store; the backend decides how the resulting changes
//! propagate to other users and how they are grouped for undo/redo.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::live_map::LiveMap;

/// Storage key of the shared shape mapping.
pub const CANVAS_OBJECTS: &str = "canvasObjects";

/// Errors surfaced by a room.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The room has been left; the store is read-only and stale.
    #[error("room is not connected")]
    Disconnected,
}

/// Root of the shared store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(rename = "canvasObjects", default)]
    canvas_objects: LiveMap,
}

impl Storage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store around an existing shape mapping.
    #[must_use]
    pub fn with_canvas_objects(canvas_objects: LiveMap) -> Self {
        Self { canvas_objects }
    }

    /// The shared shape mapping.
    #[must_use]
    pub fn canvas_objects(&self) -> &LiveMap {
        &self.canvas_objects
    }

    /// Mutable access to the shared shape mapping.
    pub fn canvas_objects_mut(&mut self) -> &mut LiveMap {
        &mut self.canvas_objects
    }
}

/// A joined real-time room.
pub trait Room {
    /// Current snapshot of the shared store.
    fn storage(&self) -> &Storage;

    /// Run `f` atomically against the shared store and return its result.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Disconnected`] if the room has been left. In
    /// that case `f` is not called.
    fn mutate<T>(&mut self, f: impl FnOnce(&mut Storage) -> T) -> Result<T, StorageError>;

    /// Revert the most recent history batch. Returns `false` when there is
    /// nothing to undo.
    fn undo(&mut self) -> bool;

    /// Re-apply the most recently undone batch. Returns `false` when there is
    /// nothing to redo.
    fn redo(&mut self) -> bool;

    /// Collect every following mutation into one history batch until
    /// [`Room::resume_history`]. Nested pauses are not counted.
    fn pause_history(&mut self);

    /// Close the batch opened by [`Room::pause_history`]. Does nothing when
    /// history is not paused.
    fn resume_history(&mut self);

    /// Whether [`Room::undo`] would change the store.
    fn can_undo(&self) -> bool;

    /// Whether [`Room::redo`] would change the store.
    fn can_redo(&self) -> bool;

    /// Counter bumped on every observable change to the store.
    fn revision(&self) -> u64;
}
