//! Canvas event handlers.
//!
//! Each handler reacts to one [`CanvasEvent`](crate::surface::CanvasEvent)
//! (or host event) by updating the [`Surface`] and the page's
//! [`DrawingRefs`], and returns [`Action`]s for the host to process. Handlers
//! never touch shared storage directly: persisting a shape is
//! [`Action::SyncShape`], removing one is [`Action::DeleteShape`].

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

use serde_json::Value;

use crate::attrs::{ElementAttributes, format_size};
use crate::consts::BRUSH_WIDTH;
use crate::doc::{CanvasObject, ObjectId, ShapeKind};
use crate::geom::{Bounds, Point};
use crate::input::Tool;
use crate::shapes;
use crate::surface::Surface;

/// Mutable drawing state shared between handlers across events.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingRefs {
    /// A press started a drawing gesture that has not been released.
    pub is_drawing: bool,
    /// The shape being drawn. At most one at a time.
    pub shape: Option<ObjectId>,
    /// Pointer position where the shape being drawn was created.
    pub anchor: Option<Point>,
    /// Tool picked from the toolbar, cleared after each drawn shape.
    pub selected_shape: Option<Tool>,
    /// Object to keep selected when the surface is rebuilt from storage.
    pub active_object: Option<ObjectId>,
    /// The user is typing into an attribute field.
    pub is_editing: bool,
}

/// Work requested from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Store this snapshot under its id in the shared mapping.
    SyncShape(CanvasObject),
    /// Remove this id from the shared mapping.
    DeleteShape(ObjectId),
    /// Return the toolbar to its default element after the reset delay.
    ResetActiveElement,
    /// Show these attributes in the sidebar.
    SetElementAttributes(ElementAttributes),
    /// Update only the size fields of the sidebar.
    UpdateElementSize { width: String, height: String },
    /// Ask the user for new content of a text object.
    EditTextRequested { id: ObjectId, text: String },
    /// Persist the clipboard contents (JSON).
    StoreClipboard(String),
    Undo,
    Redo,
    RenderNeeded,
}

// =============================================================
// Pointer
// =============================================================

/// Press on the canvas.
///
/// With the freeform tool this starts a brush stroke. Otherwise a press on an
/// object of the selected tool's kind (or on a member of a multi-selection)
/// selects it; anywhere else the selected tool's shape is created at the
/// pointer and becomes the shape being drawn.
pub fn handle_canvas_mouse_down(
    surface: &mut Surface,
    refs: &mut DrawingRefs,
    pointer: Point,
    target: Option<ObjectId>,
) -> Vec<Action> {
    if refs.selected_shape == Some(Tool::Freeform) {
        refs.is_drawing = true;
        surface.brush_mut().width = BRUSH_WIDTH;
        surface.begin_brush(pointer);
        return Vec::new();
    }

    surface.set_drawing_mode(false);

    if let Some(id) = target {
        let in_selection = surface.active_ids().len() > 1 && surface.active_ids().contains(&id);
        let same_kind = match (surface.object(&id), refs.selected_shape.and_then(tool_kind)) {
            (Some(obj), Some(kind)) => obj.kind == kind,
            _ => false,
        };
        if in_selection {
            return Vec::new();
        }
        if same_kind {
            surface.set_active_object(id);
            return Vec::new();
        }
    }

    refs.is_drawing = true;
    let Some(shape) = refs.selected_shape.and_then(|tool| shapes::create_specific_shape(tool, pointer)) else {
        return Vec::new();
    };
    surface.cancel_gesture();
    let id = surface.add(shape);
    refs.shape = Some(id);
    refs.anchor = Some(pointer);
    log::debug!("drawing {id}");
    vec![Action::RenderNeeded]
}

/// Pointer motion. Resizes the shape being drawn and syncs it.
pub fn handle_canvas_mouse_move(surface: &mut Surface, refs: &DrawingRefs, pointer: Point) -> Vec<Action> {
    if !refs.is_drawing || refs.selected_shape == Some(Tool::Freeform) {
        return Vec::new();
    }
    surface.set_drawing_mode(false);

    let (Some(id), Some(anchor)) = (refs.shape, refs.anchor) else {
        return Vec::new();
    };
    let Some(obj) = surface.object_mut(&id) else {
        return Vec::new();
    };
    resize_drawn_shape(obj, anchor, pointer);
    vec![Action::SyncShape(obj.clone()), Action::RenderNeeded]
}

/// Stretch a freshly created shape so it spans from `anchor` to `pointer`.
fn resize_drawn_shape(obj: &mut CanvasObject, anchor: Point, pointer: Point) {
    match obj.kind {
        ShapeKind::Rect | ShapeKind::Triangle | ShapeKind::Image => {
            let frame = Bounds::from_corners(anchor, pointer);
            obj.move_to(frame.x, frame.y);
            obj.width = frame.width;
            obj.height = frame.height;
            obj.scale_x = 1.0;
            obj.scale_y = 1.0;
        }
        ShapeKind::Circle => obj.set_radius((pointer.x - anchor.x).abs() / 2.0),
        ShapeKind::Line => obj.set_line_endpoints(anchor, pointer),
        ShapeKind::Text | ShapeKind::Path => {}
    }
}

/// Release. Syncs the drawn shape, forgets the drawing references and, unless
/// free drawing is on, asks for the deferred toolbar reset.
pub fn handle_canvas_mouse_up(surface: &Surface, refs: &mut DrawingRefs) -> Vec<Action> {
    refs.is_drawing = false;
    if refs.selected_shape == Some(Tool::Freeform) {
        return Vec::new();
    }

    let mut actions = Vec::new();
    if let Some(obj) = refs.shape.and_then(|id| surface.object(&id)) {
        actions.push(Action::SyncShape(obj.clone()));
    }
    refs.shape = None;
    refs.anchor = None;
    refs.active_object = None;
    refs.selected_shape = None;

    if !surface.is_drawing_mode() {
        actions.push(Action::ResetActiveElement);
    }
    actions
}

/// Double click. Text objects ask the host for new content.
#[must_use]
pub fn handle_canvas_double_click(surface: &Surface, target: Option<ObjectId>) -> Vec<Action> {
    let Some(obj) = target.and_then(|id| surface.object(&id)) else {
        return Vec::new();
    };
    if obj.kind != ShapeKind::Text {
        return Vec::new();
    }
    vec![Action::EditTextRequested { id: obj.object_id, text: obj.text.clone().unwrap_or_default() }]
}

/// Commit edited text content.
pub fn handle_text_edited(surface: &mut Surface, id: ObjectId, text: &str) -> Vec<Action> {
    let Some(obj) = surface.object_mut(&id) else {
        return Vec::new();
    };
    if !shapes::set_text(obj, text) {
        return Vec::new();
    }
    vec![Action::SyncShape(obj.clone()), Action::RenderNeeded]
}

// =============================================================
// Object and selection events
// =============================================================

/// A move or scale finished: sync every modified object.
#[must_use]
pub fn handle_canvas_object_modified(surface: &Surface, ids: &[ObjectId]) -> Vec<Action> {
    ids.iter()
        .filter_map(|id| surface.object(id))
        .map(|obj| Action::SyncShape(obj.clone()))
        .collect()
}

/// A selection was made or changed. Publishes the attributes of a single
/// selected object unless the user is editing them.
pub fn handle_canvas_selection_created(surface: &Surface, refs: &mut DrawingRefs, ids: &[ObjectId]) -> Vec<Action> {
    if refs.is_editing {
        return Vec::new();
    }
    let [id] = ids else {
        return Vec::new();
    };
    let Some(obj) = surface.object(id) else {
        return Vec::new();
    };
    refs.active_object = Some(*id);
    vec![Action::SetElementAttributes(ElementAttributes::from_object(obj))]
}

/// The selection was cleared by the user.
pub fn handle_canvas_selection_cleared(refs: &mut DrawingRefs) {
    refs.active_object = None;
}

/// An object is being scaled: publish its live size.
#[must_use]
pub fn handle_canvas_object_scaling(surface: &Surface, id: ObjectId) -> Vec<Action> {
    let Some(obj) = surface.object(&id) else {
        return Vec::new();
    };
    vec![Action::UpdateElementSize {
        width: format_size(obj.scaled_width()),
        height: format_size(obj.scaled_height()),
    }]
}

/// A brush stroke became a path: sync it.
#[must_use]
pub fn handle_path_created(surface: &Surface, id: ObjectId) -> Vec<Action> {
    surface
        .object(&id)
        .map(|obj| vec![Action::SyncShape(obj.clone())])
        .unwrap_or_default()
}

// =============================================================
// Window and storage
// =============================================================

/// The window was resized.
pub fn handle_resize(surface: &mut Surface, width: f64, height: f64) -> Vec<Action> {
    surface.set_dimensions(width, height);
    vec![Action::RenderNeeded]
}

/// Rebuild the surface from the shared mapping.
///
/// Records that fail to decode, or whose key differs from their `objectId`,
/// are skipped. The previous selection and the remembered active object stay
/// selected when they still exist. Returns the number of objects loaded.
pub fn render_canvas<'a>(
    surface: &mut Surface,
    refs: &DrawingRefs,
    records: impl IntoIterator<Item = (&'a str, &'a Value)>,
) -> usize {
    let mut keep = surface.active_ids().to_vec();
    if let Some(id) = refs.active_object {
        if !keep.contains(&id) {
            keep.push(id);
        }
    }

    surface.clear_objects();
    let mut loaded = 0;
    for (key, record) in records {
        match CanvasObject::from_record(record) {
            Ok(obj) if obj.object_id.to_string() == key => {
                surface.restore(obj);
                loaded += 1;
            }
            Ok(obj) => log::warn!("render: record key {key} holds object {}", obj.object_id),
            Err(e) => log::warn!("render: skipping {key}: {e}"),
        }
    }

    surface.set_active_objects(&keep);
    loaded
}

/// The shape kind a tool creates.
fn tool_kind(tool: Tool) -> Option<ShapeKind> {
    match tool {
        Tool::Rectangle => Some(ShapeKind::Rect),
        Tool::Circle => Some(ShapeKind::Circle),
        Tool::Triangle => Some(ShapeKind::Triangle),
        Tool::Line => Some(ShapeKind::Line),
        Tool::Text => Some(ShapeKind::Text),
        Tool::Freeform => Some(ShapeKind::Path),
        Tool::Image => Some(ShapeKind::Image),
        Tool::Select => None,
    }
}
