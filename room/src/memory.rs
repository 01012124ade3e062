//! In-process room used when no collaboration backend is attached.
//!
//! Each [`Room::mutate`] call that changes the store is recorded as one
//! history batch holding the before/after value of every touched key, so a
//! batch can be reverted or replayed exactly. A new batch discards the redo
//! stack. While history is paused, mutations are merged into one pending
//! batch that lands on the undo stack when history resumes.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use serde_json::Value;

use crate::live_map::LiveMap;
use crate::storage::{Room, Storage, StorageError};

/// Maximum number of batches kept on the undo stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Before/after value of one key within a batch. `None` means absent.
#[derive(Debug, Clone, PartialEq)]
struct Change {
    key: String,
    before: Option<Value>,
    after: Option<Value>,
}

type Batch = Vec<Change>;

/// Single-process [`Room`] with batch undo/redo.
#[derive(Debug, Clone)]
pub struct MemoryRoom {
    storage: Storage,
    undo_stack: Vec<Batch>,
    redo_stack: Vec<Batch>,
    history_limit: usize,
    /// Merged changes while history is paused.
    pending: Option<Batch>,
    revision: u64,
    connected: bool,
}

impl Default for MemoryRoom {
    fn default() -> Self {
        Self {
            storage: Storage::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            pending: None,
            revision: 0,
            connected: true,
        }
    }
}

impl MemoryRoom {
    /// Join an empty room.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Join a room seeded with `storage`. The seed is not part of the history.
    #[must_use]
    pub fn with_storage(storage: Storage) -> Self {
        Self { storage, ..Self::default() }
    }

    /// Cap the undo stack at `limit` batches (minimum 1).
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    /// Leave the room. Later mutations fail with [`StorageError::Disconnected`].
    pub fn leave(&mut self) {
        if self.connected {
            log::info!("room: left");
        }
        self.connected = false;
    }

    /// Whether the room still accepts mutations.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether mutations are currently merged into one pending batch.
    #[must_use]
    pub fn is_history_paused(&self) -> bool {
        self.pending.is_some()
    }

    fn push_undo(&mut self, batch: Batch) {
        self.undo_stack.push(batch);
        if self.undo_stack.len() > self.history_limit {
            let overflow = self.undo_stack.len() - self.history_limit;
            self.undo_stack.drain(..overflow);
        }
    }

    fn apply_values(&mut self, batch: &Batch, use_before: bool) {
        let map = self.storage.canvas_objects_mut();
        for change in batch {
            let value = if use_before { &change.before } else { &change.after };
            match value {
                Some(v) => {
                    map.set(change.key.clone(), v.clone());
                }
                None => {
                    map.delete(&change.key);
                }
            }
        }
    }
}

impl Room for MemoryRoom {
    fn storage(&self) -> &Storage {
        &self.storage
    }

    fn mutate<T>(&mut self, f: impl FnOnce(&mut Storage) -> T) -> Result<T, StorageError> {
        if !self.connected {
            return Err(StorageError::Disconnected);
        }

        let before = self.storage.canvas_objects().clone();
        let out = f(&mut self.storage);
        let batch = diff(&before, self.storage.canvas_objects());

        if !batch.is_empty() {
            log::debug!("room: mutation touched {} key(s)", batch.len());
            match &mut self.pending {
                Some(pending) => merge(pending, batch),
                None => self.push_undo(batch),
            }
            self.redo_stack.clear();
            self.revision += 1;
        }
        Ok(out)
    }

    fn pause_history(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(Vec::new());
        }
    }

    fn resume_history(&mut self) {
        let Some(mut batch) = self.pending.take() else {
            return;
        };
        batch.retain(|change| change.before != change.after);
        if !batch.is_empty() {
            batch.sort_by(|a, b| a.key.cmp(&b.key));
            self.push_undo(batch);
        }
    }

    fn undo(&mut self) -> bool {
        if !self.connected {
            return false;
        }
        self.resume_history();
        let Some(batch) = self.undo_stack.pop() else {
            return false;
        };
        self.apply_values(&batch, true);
        self.redo_stack.push(batch);
        self.revision += 1;
        true
    }

    fn redo(&mut self) -> bool {
        if !self.connected {
            return false;
        }
        self.resume_history();
        let Some(batch) = self.redo_stack.pop() else {
            return false;
        };
        self.apply_values(&batch, false);
        self.push_undo(batch);
        self.revision += 1;
        true
    }

    fn can_undo(&self) -> bool {
        let pending = self.pending.as_ref().is_some_and(|batch| batch.iter().any(|c| c.before != c.after));
        self.connected && (pending || !self.undo_stack.is_empty())
    }

    fn can_redo(&self) -> bool {
        self.connected && !self.redo_stack.is_empty()
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

/// Fold `batch` into `pending`, keeping the oldest `before` of each key.
fn merge(pending: &mut Batch, batch: Batch) {
    for change in batch {
        match pending.iter_mut().find(|p| p.key == change.key) {
            Some(existing) => existing.after = change.after,
            None => pending.push(change),
        }
    }
}

/// Every key whose value differs between `before` and `after`, sorted by key.
fn diff(before: &LiveMap, after: &LiveMap) -> Batch {
    let mut batch = Vec::new();
    for (key, old) in before.iter() {
        let new = after.get(key);
        if new != Some(old) {
            batch.push(Change { key: key.to_owned(), before: Some(old.clone()), after: new.cloned() });
        }
    }
    for (key, new) in after.iter() {
        if !before.has(key) {
            batch.push(Change { key: key.to_owned(), before: None, after: Some(new.clone()) });
        }
    }
    batch.sort_by(|a, b| a.key.cmp(&b.key));
    batch
}
