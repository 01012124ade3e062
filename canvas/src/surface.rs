//! The interactive canvas: objects, active selection, free drawing, and the
//! pointer gesture state machine.
//!
//! Raw pointer input goes in through [`Surface::pointer_down`],
//! [`Surface::pointer_move`], [`Surface::pointer_up`] and
//! [`Surface::double_click`]. The surface applies the built-in interactions
//! itself (click to select, drag to move, corner handles to scale, marquee to
//! multi-select, brush strokes in drawing mode) and reports what happened as
//! [`CanvasEvent`]s for the handlers in [`crate::handlers`].
//!
//! Programmatic changes (`add`, `remove`, `set_active_object`, ...) never emit
//! events.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::mem;

use crate::consts::{BRUSH_COLOR, BRUSH_WIDTH, MIN_MARQUEE_PX, MIN_SCALE};
use crate::doc::{CanvasObject, DocStore, ObjectId};
use crate::geom::{Bounds, Point};
use crate::hit;
use crate::input::{Button, InputState, Modifiers};
use crate::shapes;

/// Something that happened on the surface in response to pointer input.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Fired after built-in selection handling. `target` is the object under
    /// the pointer (always `None` in drawing mode).
    MouseDown { pointer: Point, target: Option<ObjectId> },
    MouseMove { pointer: Point },
    MouseUp { pointer: Point },
    DoubleClick { pointer: Point, target: Option<ObjectId> },
    /// A drag or scale gesture finished and changed these objects.
    ObjectModified { ids: Vec<ObjectId> },
    /// The object is being scaled; fired on every move of the gesture.
    ObjectScaling { id: ObjectId },
    /// A selection was made where there was none.
    SelectionCreated { ids: Vec<ObjectId> },
    /// An existing selection changed to these objects.
    SelectionUpdated { ids: Vec<ObjectId> },
    SelectionCleared,
    /// A brush stroke was finished and added as a path object.
    PathCreated { id: ObjectId },
}

/// Free-drawing brush.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub color: String,
    pub width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self { color: BRUSH_COLOR.to_owned(), width: BRUSH_WIDTH }
    }
}

/// In-memory interactive canvas.
#[derive(Default)]
pub struct Surface {
    doc: DocStore,
    active: Vec<ObjectId>,
    drawing_mode: bool,
    brush: Brush,
    width: f64,
    height: f64,
    input: InputState,
}

impl Surface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Dimensions ---

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Resize the drawing area (CSS pixels).
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    // --- Objects ---

    #[must_use]
    pub fn doc(&self) -> &DocStore {
        &self.doc
    }

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&CanvasObject> {
        self.doc.get(id)
    }

    pub fn object_mut(&mut self, id: &ObjectId) -> Option<&mut CanvasObject> {
        self.doc.get_mut(id)
    }

    /// All objects in draw order.
    #[must_use]
    pub fn objects(&self) -> Vec<&CanvasObject> {
        self.doc.sorted_objects()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.doc.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    /// Add `obj` above every existing object and return its id.
    pub fn add(&mut self, mut obj: CanvasObject) -> ObjectId {
        obj.z_index = self.doc.max_z().map_or(0, |z| z + 1);
        let id = obj.object_id;
        self.doc.insert(obj);
        id
    }

    /// Insert `obj` keeping its stored z-index.
    pub fn restore(&mut self, obj: CanvasObject) {
        self.doc.insert(obj);
    }

    /// Remove an object, dropping it from the selection and from any
    /// gesture that targets it.
    pub fn remove(&mut self, id: &ObjectId) -> Option<CanvasObject> {
        let removed = self.doc.remove(id)?;
        self.active.retain(|a| a != id);
        let scaling_it = matches!(&self.input, InputState::Scaling { id: target, .. } if target == id);
        let dragging_nothing = matches!(self.input, InputState::Dragging { .. }) && self.active.is_empty();
        if scaling_it || dragging_nothing {
            self.input = InputState::Idle;
        }
        Some(removed)
    }

    /// Drop every object but keep the selection ids and any gesture, so a
    /// rebuild can restore them.
    pub fn clear_objects(&mut self) {
        self.doc.clear();
    }

    /// Remove every object, the selection and any gesture.
    pub fn clear(&mut self) {
        self.doc.clear();
        self.active.clear();
        self.input = InputState::Idle;
    }

    // --- Selection ---

    /// Ids of the active objects, in selection order.
    #[must_use]
    pub fn active_ids(&self) -> &[ObjectId] {
        &self.active
    }

    #[must_use]
    pub fn active_objects(&self) -> Vec<&CanvasObject> {
        self.active.iter().filter_map(|id| self.doc.get(id)).collect()
    }

    /// The active object when exactly one is selected.
    #[must_use]
    pub fn active_object(&self) -> Option<&CanvasObject> {
        match self.active.as_slice() {
            [only] => self.doc.get(only),
            _ => None,
        }
    }

    /// Make `id` the single active object. Returns `false` if it is not on
    /// the surface.
    pub fn set_active_object(&mut self, id: ObjectId) -> bool {
        if !self.doc.contains(&id) {
            return false;
        }
        self.active = vec![id];
        true
    }

    /// Replace the selection with the ids that exist on the surface.
    pub fn set_active_objects(&mut self, ids: &[ObjectId]) {
        self.active.clear();
        for id in ids {
            if self.doc.contains(id) && !self.active.contains(id) {
                self.active.push(*id);
            }
        }
    }

    /// Clear the selection. Returns whether anything was selected.
    pub fn discard_active_object(&mut self) -> bool {
        let had = !self.active.is_empty();
        self.active.clear();
        had
    }

    fn select(&mut self, ids: Vec<ObjectId>) -> CanvasEvent {
        let was_empty = self.active.is_empty();
        self.active.clone_from(&ids);
        if was_empty {
            CanvasEvent::SelectionCreated { ids }
        } else {
            CanvasEvent::SelectionUpdated { ids }
        }
    }

    // --- Drawing mode ---

    #[must_use]
    pub fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    /// Toggle free drawing. Leaving drawing mode drops an unfinished stroke.
    pub fn set_drawing_mode(&mut self, on: bool) {
        self.drawing_mode = on;
        if !on && matches!(self.input, InputState::Brushing { .. }) {
            self.input = InputState::Idle;
        }
    }

    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    /// Enter drawing mode and start a stroke at `p` unless one is running.
    pub fn begin_brush(&mut self, p: Point) {
        self.drawing_mode = true;
        if !matches!(self.input, InputState::Brushing { .. }) {
            self.input = InputState::Brushing { points: vec![p] };
        }
    }

    // --- Gestures ---

    #[must_use]
    pub fn gesture(&self) -> &InputState {
        &self.input
    }

    /// Abandon the current gesture without emitting events.
    pub fn cancel_gesture(&mut self) {
        self.input = InputState::Idle;
    }

    /// Marquee rectangle while a rubber-band selection is in progress.
    #[must_use]
    pub fn marquee(&self) -> Option<Bounds> {
        match self.input {
            InputState::Marquee { start, current } => Some(Bounds::from_corners(start, current)),
            _ => None,
        }
    }

    /// Points of the unfinished brush stroke.
    #[must_use]
    pub fn brush_points(&self) -> &[Point] {
        match &self.input {
            InputState::Brushing { points } => points,
            _ => &[],
        }
    }

    // --- Pointer input ---

    /// Primary button press. Other buttons are ignored.
    pub fn pointer_down(&mut self, p: Point, button: Button, modifiers: Modifiers) -> Vec<CanvasEvent> {
        if button != Button::Primary {
            return Vec::new();
        }
        if self.drawing_mode {
            self.input = InputState::Brushing { points: vec![p] };
            return vec![CanvasEvent::MouseDown { pointer: p, target: None }];
        }

        let mut events = Vec::new();

        let grabbed = self.active_object().and_then(|obj| {
            hit::handle_at(obj, p).map(|corner| (obj.object_id, corner.opposite().position(&obj.bounds())))
        });
        if let Some((id, anchor)) = grabbed {
            self.input = InputState::Scaling { id, anchor, moved: false };
            events.push(CanvasEvent::MouseDown { pointer: p, target: Some(id) });
            return events;
        }

        let target = hit::find_target(&self.doc, p);
        match target {
            Some(id) => {
                if !self.active.contains(&id) {
                    if modifiers.shift && !self.active.is_empty() {
                        self.active.push(id);
                        events.push(CanvasEvent::SelectionUpdated { ids: self.active.clone() });
                    } else {
                        events.push(self.select(vec![id]));
                    }
                }
                self.input = InputState::Dragging { last: p, moved: false };
            }
            None => {
                if self.discard_active_object() {
                    events.push(CanvasEvent::SelectionCleared);
                }
                self.input = InputState::Marquee { start: p, current: p };
            }
        }

        events.push(CanvasEvent::MouseDown { pointer: p, target });
        events
    }

    pub fn pointer_move(&mut self, p: Point) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        match &mut self.input {
            InputState::Idle => {}
            InputState::Dragging { last, moved } => {
                let (dx, dy) = (p.x - last.x, p.y - last.y);
                *last = p;
                if dx != 0.0 || dy != 0.0 {
                    *moved = true;
                    for id in &self.active {
                        if let Some(obj) = self.doc.get_mut(id) {
                            obj.move_to(obj.left + dx, obj.top + dy);
                        }
                    }
                }
            }
            InputState::Scaling { id, anchor, moved } => {
                if let Some(obj) = self.doc.get_mut(id) {
                    scale_from_anchor(obj, *anchor, p);
                    *moved = true;
                    events.push(CanvasEvent::ObjectScaling { id: *id });
                }
            }
            InputState::Marquee { current, .. } => *current = p,
            InputState::Brushing { points } => {
                if points.last() != Some(&p) {
                    points.push(p);
                }
            }
        }
        events.push(CanvasEvent::MouseMove { pointer: p });
        events
    }

    pub fn pointer_up(&mut self, p: Point) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        match mem::take(&mut self.input) {
            InputState::Dragging { moved: true, .. } if !self.active.is_empty() => {
                events.push(CanvasEvent::ObjectModified { ids: self.active.clone() });
            }
            InputState::Scaling { id, moved: true, .. } => {
                events.push(CanvasEvent::ObjectModified { ids: vec![id] });
            }
            InputState::Marquee { start, .. } => {
                let area = Bounds::from_corners(start, p);
                if area.width >= MIN_MARQUEE_PX || area.height >= MIN_MARQUEE_PX {
                    let ids = hit::objects_in(&self.doc, &area);
                    if !ids.is_empty() {
                        events.push(self.select(ids));
                    }
                }
            }
            InputState::Brushing { mut points } => {
                if points.last() != Some(&p) {
                    points.push(p);
                }
                if let Some(path) = shapes::create_path(&points, &self.brush) {
                    let id = self.add(path);
                    events.push(CanvasEvent::PathCreated { id });
                }
            }
            InputState::Idle | InputState::Dragging { .. } | InputState::Scaling { .. } => {}
        }
        events.push(CanvasEvent::MouseUp { pointer: p });
        events
    }

    pub fn double_click(&mut self, p: Point) -> Vec<CanvasEvent> {
        let target = if self.drawing_mode { None } else { hit::find_target(&self.doc, p) };
        vec![CanvasEvent::DoubleClick { pointer: p, target }]
    }
}

/// Scale `obj` so the box between `anchor` and `p` becomes its bounds,
/// keeping `anchor` fixed. Axes with no extent keep their scale.
fn scale_from_anchor(obj: &mut CanvasObject, anchor: Point, p: Point) {
    let target = Bounds::from_corners(anchor, p);
    if obj.width > 0.0 {
        obj.scale_x = (target.width / obj.width).max(MIN_SCALE);
    }
    if obj.height > 0.0 {
        obj.scale_y = (target.height / obj.height).max(MIN_SCALE);
    }
    let left = if p.x < anchor.x { anchor.x - obj.scaled_width() } else { anchor.x };
    let top = if p.y < anchor.y { anchor.y - obj.scaled_height() } else { anchor.y };
    obj.move_to(left, top);
}
