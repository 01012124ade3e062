//! Keyboard shortcuts and the copy/paste clipboard.
//!
//! | Keys | Effect |
//! |------|--------|
//! | Ctrl/Cmd + C | copy the active objects |
//! | Ctrl/Cmd + V | paste the clipboard, offset by 20px |
//! | Ctrl/Cmd + X | copy, then delete |
//! | Ctrl/Cmd + Z / Y | undo / redo |
//! | Delete, Backspace | delete the active objects |
//! | `/` | swallowed (default prevented) |

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use serde_json::Value;
use uuid::Uuid;

use crate::consts::{DEFAULT_FILL, PASTE_OFFSET};
use crate::doc::CanvasObject;
use crate::handlers::Action;
use crate::input::{Key, Modifiers};
use crate::surface::Surface;

/// `localStorage` key the host persists the clipboard under.
pub const CLIPBOARD_STORAGE_KEY: &str = "clipboard";

/// Copied object records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    records: Vec<Value>,
}

impl Clipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a clipboard persisted with [`Clipboard::to_json`].
    ///
    /// # Errors
    ///
    /// Returns the parse error if `json` is not an array of records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self { records: serde_json::from_str(json)? })
    }

    /// Serialize the copied records as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the serialization error, if any.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Result of a key press.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyOutcome {
    pub actions: Vec<Action>,
    /// The host should call `preventDefault` on the event.
    pub prevent_default: bool,
}

/// Dispatch a key press on the page.
pub fn handle_key_down(surface: &mut Surface, clipboard: &mut Clipboard, key: &Key, modifiers: Modifiers) -> KeyOutcome {
    let mut out = KeyOutcome::default();

    if modifiers.command() {
        if key.is_char('c') {
            out.actions.extend(handle_copy(surface, clipboard));
        } else if key.is_char('v') {
            out.actions.extend(handle_paste(surface, clipboard));
        } else if key.is_char('x') {
            out.actions.extend(handle_copy(surface, clipboard));
            out.actions.extend(handle_delete(surface));
        } else if key.is_char('z') {
            out.actions.push(Action::Undo);
        } else if key.is_char('y') {
            out.actions.push(Action::Redo);
        }
        return out;
    }

    if key.is("/") && !modifiers.shift {
        out.prevent_default = true;
    } else if key.is("Delete") || key.is("Backspace") {
        out.actions = handle_delete(surface);
        out.prevent_default = !out.actions.is_empty();
    }
    out
}

/// Copy the active objects into `clipboard`. Nothing happens without a
/// selection.
pub fn handle_copy(surface: &Surface, clipboard: &mut Clipboard) -> Vec<Action> {
    let active = surface.active_objects();
    if active.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::with_capacity(active.len());
    for obj in active {
        match obj.to_record() {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("copy: skipping {}: {e}", obj.object_id),
        }
    }
    clipboard.records = records;

    match clipboard.to_json() {
        Ok(json) => vec![Action::StoreClipboard(json)],
        Err(e) => {
            log::warn!("copy: clipboard not persisted: {e}");
            Vec::new()
        }
    }
}

/// Add a copy of every clipboard record on top of the surface, shifted by
/// [`PASTE_OFFSET`] with a fresh id and the default fill, and sync each.
pub fn handle_paste(surface: &mut Surface, clipboard: &Clipboard) -> Vec<Action> {
    let mut actions = Vec::new();
    for record in &clipboard.records {
        let mut obj = match CanvasObject::from_record(record) {
            Ok(obj) => obj,
            Err(e) => {
                log::warn!("paste: skipping record: {e}");
                continue;
            }
        };
        obj.object_id = Uuid::new_v4();
        obj.move_to(obj.left + PASTE_OFFSET, obj.top + PASTE_OFFSET);
        obj.fill = Some(DEFAULT_FILL.to_owned());
        let id = surface.add(obj);
        if let Some(added) = surface.object(&id) {
            actions.push(Action::SyncShape(added.clone()));
        }
    }
    if !actions.is_empty() {
        actions.push(Action::RenderNeeded);
    }
    actions
}

/// Remove the active objects from the surface and storage, then clear the
/// selection.
pub fn handle_delete(surface: &mut Surface) -> Vec<Action> {
    let ids = surface.active_ids().to_vec();
    if ids.is_empty() {
        return Vec::new();
    }
    let mut actions = Vec::with_capacity(ids.len() + 1);
    for id in ids {
        if surface.remove(&id).is_some() {
            actions.push(Action::DeleteShape(id));
        }
    }
    surface.discard_active_object();
    actions.push(Action::RenderNeeded);
    actions
}
