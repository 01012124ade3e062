//! Page controller: the interactive surface bound to a joined room.
//!
//! ARCHITECTURE
//! ============
//! `Whiteboard` owns the [`Surface`], the drawing references shared by the
//! canvas handlers, the clipboard, and the sidebar state. Browser events
//! become surface events, surface events go through the `canvas::handlers`
//! functions, and the resulting [`Action`]s are applied here: storage writes
//! go through [`Room::mutate`], everything the browser has to do is returned
//! as [`Effects`] for the page.
//!
//! TRADE-OFFS
//! ==========
//! The surface is rebuilt from storage whenever the room revision moves,
//! including after our own writes. Records round-trip exactly and the gesture
//! state lives outside the object store, so a rebuild mid-gesture is
//! invisible to the user.

#[cfg(test)]
#[path = "whiteboard_test.rs"]
mod whiteboard_test;

use canvas::attrs::{ElementAttributes, ShapeProperty};
use canvas::doc::{CanvasObject, ObjectId};
use canvas::geom::Point;
use canvas::handlers::{self, Action, DrawingRefs};
use canvas::input::{Button, Key, Modifiers, Tool};
use canvas::keys::{self, Clipboard};
use canvas::shapes::{self, Direction};
use canvas::surface::{CanvasEvent, Surface};
use room::{Room, StorageError};

use crate::state::ui::ActiveElement;

/// Browser work requested by a controller operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    /// Redraw the canvas.
    pub render: bool,
    /// Start the deferred return to the default toolbar element.
    pub schedule_active_element_reset: bool,
    /// Drop a deferred return that has not fired yet.
    pub cancel_active_element_reset: bool,
    /// Ask the user for new text for this object.
    pub edit_text: Option<(ObjectId, String)>,
    /// Persist this clipboard JSON.
    pub store_clipboard: Option<String>,
    /// Call `preventDefault` on the triggering event.
    pub prevent_default: bool,
    /// Open the image file picker.
    pub open_image_picker: bool,
}

impl Effects {
    fn render() -> Self {
        Self { render: true, ..Self::default() }
    }

    fn absorb(&mut self, other: Self) {
        self.render |= other.render;
        self.schedule_active_element_reset |= other.schedule_active_element_reset;
        self.cancel_active_element_reset |= other.cancel_active_element_reset;
        self.prevent_default |= other.prevent_default;
        self.open_image_picker |= other.open_image_picker;
        if other.edit_text.is_some() {
            self.edit_text = other.edit_text;
        }
        if other.store_clipboard.is_some() {
            self.store_clipboard = other.store_clipboard;
        }
    }
}

/// The whiteboard page controller.
pub struct Whiteboard<R: Room> {
    room: R,
    surface: Surface,
    refs: DrawingRefs,
    clipboard: Clipboard,
    active_element: ActiveElement,
    attributes: ElementAttributes,
    rendered_revision: Option<u64>,
}

impl<R: Room> Whiteboard<R> {
    /// Bind a fresh surface to `room`. Call [`Whiteboard::refresh_from_storage`]
    /// to load the shapes already stored.
    pub fn new(room: R) -> Self {
        Self {
            room,
            surface: Surface::new(),
            refs: DrawingRefs::default(),
            clipboard: Clipboard::new(),
            active_element: ActiveElement::default(),
            attributes: ElementAttributes::default(),
            rendered_revision: None,
        }
    }

    pub fn room(&self) -> &R {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut R {
        &mut self.room
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn refs(&self) -> &DrawingRefs {
        &self.refs
    }

    pub fn active_element(&self) -> &ActiveElement {
        &self.active_element
    }

    pub fn attributes(&self) -> &ElementAttributes {
        &self.attributes
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Replace the clipboard, e.g. with one restored from `localStorage`.
    pub fn set_clipboard(&mut self, clipboard: Clipboard) {
        self.clipboard = clipboard;
    }

    // =============================================================
    // Storage mutations
    // =============================================================

    /// Store `object` under its id. Does nothing for `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the room rejects the mutation.
    pub fn sync_shape_in_storage(&mut self, object: Option<&CanvasObject>) -> Result<(), StorageError> {
        let Some(object) = object else {
            return Ok(());
        };
        let record = match object.to_record() {
            Ok(record) => record,
            Err(e) => {
                log::warn!("whiteboard: cannot encode {}: {e}", object.object_id);
                return Ok(());
            }
        };
        let key = object.object_id.to_string();
        self.room.mutate(|storage| {
            storage.canvas_objects_mut().set(key, record);
        })
    }

    /// Delete every stored shape. Returns whether the store ended up empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the room rejects the mutation.
    pub fn delete_all_shapes(&mut self) -> Result<bool, StorageError> {
        self.room.mutate(|storage| {
            let map = storage.canvas_objects_mut();
            if map.is_empty() {
                return true;
            }
            let keys = map.keys().map(str::to_owned).collect::<Vec<_>>();
            for key in keys {
                map.delete(&key);
            }
            map.is_empty()
        })
    }

    /// Delete the record stored under `object_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the room rejects the mutation.
    pub fn delete_shape_from_storage(&mut self, object_id: &ObjectId) -> Result<(), StorageError> {
        let key = object_id.to_string();
        self.room.mutate(|storage| {
            storage.canvas_objects_mut().delete(&key);
        })
    }

    /// Rebuild the surface from storage if the room changed since the last
    /// rebuild. Returns whether a rebuild happened.
    pub fn refresh_from_storage(&mut self) -> bool {
        let revision = self.room.revision();
        if self.rendered_revision == Some(revision) {
            return false;
        }
        let loaded =
            handlers::render_canvas(&mut self.surface, &self.refs, self.room.storage().canvas_objects().iter());
        log::debug!("whiteboard: rebuilt {loaded} object(s) at revision {revision}");
        self.rendered_revision = Some(revision);
        true
    }

    /// Stored shapes, topmost first. Undecodable records are left out.
    pub fn layers(&self) -> Vec<CanvasObject> {
        let mut objects = self
            .room
            .storage()
            .canvas_objects()
            .iter()
            .filter_map(|(key, record)| match CanvasObject::from_record(record) {
                Ok(obj) => Some(obj),
                Err(e) => {
                    log::debug!("whiteboard: layer {key} skipped: {e}");
                    None
                }
            })
            .collect::<Vec<_>>();
        objects.sort_by(|a, b| (b.z_index, b.object_id).cmp(&(a.z_index, a.object_id)));
        objects
    }

    // =============================================================
    // Toolbar
    // =============================================================

    /// Apply a toolbar choice. A pending deferred reset is cancelled so it
    /// cannot overwrite the choice.
    pub fn handle_active_element(&mut self, element: ActiveElement) -> Effects {
        let value = element.value.clone();
        self.active_element = element;

        let mut effects = match value.as_str() {
            "reset" => {
                match self.delete_all_shapes() {
                    Ok(true) => log::info!("whiteboard: board reset"),
                    Ok(false) => log::warn!("whiteboard: reset left records behind"),
                    Err(e) => log::warn!("whiteboard: reset failed: {e}"),
                }
                self.surface.clear();
                self.active_element = ActiveElement::default_element();
                Effects::render()
            }
            "delete" => {
                let actions = keys::handle_delete(&mut self.surface);
                let effects = self.apply(actions);
                self.active_element = ActiveElement::default_element();
                effects
            }
            "image" => {
                self.refs.is_drawing = false;
                self.surface.set_drawing_mode(false);
                Effects { open_image_picker: true, ..Effects::default() }
            }
            "comments" => Effects::default(),
            other => {
                self.refs.selected_shape = Tool::from_value(other);
                if self.refs.selected_shape != Some(Tool::Freeform) {
                    self.surface.set_drawing_mode(false);
                }
                Effects::default()
            }
        };
        effects.cancel_active_element_reset = true;
        effects
    }

    /// The deferred toolbar reset fired.
    pub fn reset_active_element(&mut self) {
        self.active_element = ActiveElement::default_element();
    }

    // =============================================================
    // Canvas input
    // =============================================================

    /// Pointer pressed. A new shape starts a history group so the whole
    /// draw gesture undoes in one step.
    pub fn pointer_down(&mut self, pointer: Point, button: Button, modifiers: Modifiers) -> Effects {
        let events = self.surface.pointer_down(pointer, button, modifiers);
        let effects = self.dispatch(events);
        if self.refs.is_drawing && self.refs.shape.is_some() {
            self.room.pause_history();
        }
        effects
    }

    pub fn pointer_move(&mut self, pointer: Point) -> Effects {
        let events = self.surface.pointer_move(pointer);
        self.dispatch(events)
    }

    pub fn pointer_up(&mut self, pointer: Point) -> Effects {
        let events = self.surface.pointer_up(pointer);
        let effects = self.dispatch(events);
        self.room.resume_history();
        effects
    }

    pub fn double_click(&mut self, pointer: Point) -> Effects {
        let events = self.surface.double_click(pointer);
        self.dispatch(events)
    }

    /// A key went down on the page (outside form fields).
    pub fn key_down(&mut self, key: &Key, modifiers: Modifiers) -> Effects {
        let outcome = keys::handle_key_down(&mut self.surface, &mut self.clipboard, key, modifiers);
        let mut effects = self.apply(outcome.actions);
        effects.prevent_default |= outcome.prevent_default;
        effects
    }

    /// The window was resized.
    pub fn resize(&mut self, width: f64, height: f64) -> Effects {
        let actions = handlers::handle_resize(&mut self.surface, width, height);
        self.apply(actions)
    }

    /// Route surface events to their handlers and apply the results.
    fn dispatch(&mut self, events: Vec<CanvasEvent>) -> Effects {
        let mut effects = Effects::default();
        // A gesture in progress changes what is drawn even when no handler
        // asked for it. Hovering with nothing pressed does not.
        effects.render = !self.surface.gesture().is_idle()
            || events.iter().any(|event| !matches!(event, CanvasEvent::MouseMove { .. }));
        for event in events {
            let actions = match event {
                CanvasEvent::MouseDown { pointer, target } => {
                    handlers::handle_canvas_mouse_down(&mut self.surface, &mut self.refs, pointer, target)
                }
                CanvasEvent::MouseMove { pointer } => {
                    handlers::handle_canvas_mouse_move(&mut self.surface, &self.refs, pointer)
                }
                CanvasEvent::MouseUp { .. } => handlers::handle_canvas_mouse_up(&self.surface, &mut self.refs),
                CanvasEvent::DoubleClick { target, .. } => handlers::handle_canvas_double_click(&self.surface, target),
                CanvasEvent::ObjectModified { ids } => handlers::handle_canvas_object_modified(&self.surface, &ids),
                CanvasEvent::ObjectScaling { id } => handlers::handle_canvas_object_scaling(&self.surface, id),
                CanvasEvent::SelectionCreated { ids } | CanvasEvent::SelectionUpdated { ids } => {
                    handlers::handle_canvas_selection_created(&self.surface, &mut self.refs, &ids)
                }
                CanvasEvent::SelectionCleared => {
                    handlers::handle_canvas_selection_cleared(&mut self.refs);
                    vec![Action::RenderNeeded]
                }
                CanvasEvent::PathCreated { id } => handlers::handle_path_created(&self.surface, id),
            };
            effects.absorb(self.apply(actions));
        }
        effects
    }

    /// Carry out handler actions.
    fn apply(&mut self, actions: Vec<Action>) -> Effects {
        let mut effects = Effects::default();
        for action in actions {
            match action {
                Action::SyncShape(obj) => {
                    if let Err(e) = self.sync_shape_in_storage(Some(&obj)) {
                        log::warn!("whiteboard: sync {} failed: {e}", obj.object_id);
                    }
                }
                Action::DeleteShape(id) => {
                    if let Err(e) = self.delete_shape_from_storage(&id) {
                        log::warn!("whiteboard: delete {id} failed: {e}");
                    }
                }
                Action::ResetActiveElement => effects.schedule_active_element_reset = true,
                Action::SetElementAttributes(attributes) => self.attributes = attributes,
                Action::UpdateElementSize { width, height } => {
                    self.attributes.width = width;
                    self.attributes.height = height;
                }
                Action::EditTextRequested { id, text } => effects.edit_text = Some((id, text)),
                Action::StoreClipboard(json) => effects.store_clipboard = Some(json),
                Action::Undo => effects.absorb(self.undo()),
                Action::Redo => effects.absorb(self.redo()),
                Action::RenderNeeded => effects.render = true,
            }
        }
        effects
    }

    // =============================================================
    // Sidebars and host callbacks
    // =============================================================

    /// A sidebar field changed. Updates the attributes and, when a single
    /// object is selected, applies the property to it and syncs it.
    pub fn handle_input_change(&mut self, property: ShapeProperty, value: &str) -> Effects {
        self.refs.is_editing = true;
        self.attributes.set(property, value);

        let Some(id) = self.surface.active_object().map(|obj| obj.object_id) else {
            return Effects::default();
        };
        let Some(obj) = self.surface.object_mut(&id) else {
            return Effects::default();
        };
        if !shapes::modify_shape(obj, property, value) {
            return Effects::default();
        }
        let synced = obj.clone();
        self.apply(vec![Action::SyncShape(synced), Action::RenderNeeded])
    }

    /// The sidebar field lost focus.
    pub fn end_editing(&mut self) {
        self.refs.is_editing = false;
    }

    /// Move the single selected object to the front or back.
    pub fn bring_element(&mut self, direction: Direction) -> Effects {
        let Some(obj) = shapes::bring_element(&mut self.surface, direction) else {
            return Effects::default();
        };
        self.apply(vec![Action::SyncShape(obj), Action::RenderNeeded])
    }

    /// Commit text typed for a text object.
    pub fn commit_text(&mut self, id: ObjectId, text: &str) -> Effects {
        let actions = handlers::handle_text_edited(&mut self.surface, id, text);
        self.apply(actions)
    }

    /// Add an uploaded image (data URL plus decoded natural size) at the
    /// origin, scaled to the standard height, and remember it as the current
    /// shape.
    pub fn upload_image(&mut self, src: String, natural_width: f64, natural_height: f64) -> Effects {
        let image = shapes::create_image(src, natural_width, natural_height);
        let id = self.surface.add(image);
        self.refs.shape = Some(id);
        let synced = self.surface.object(&id).cloned();
        let actions = synced.into_iter().map(Action::SyncShape).chain([Action::RenderNeeded]).collect();
        self.apply(actions)
    }

    pub fn undo(&mut self) -> Effects {
        if self.room.undo() { Effects::render() } else { Effects::default() }
    }

    pub fn redo(&mut self) -> Effects {
        if self.room.redo() { Effects::render() } else { Effects::default() }
    }
}
