//! Reactive UI snapshot (toolbar, sidebars, history buttons).
//!
//! DESIGN
//! ======
//! Components read a single `RwSignal<UiState>` from context. The page copies
//! the controller's state into it after every operation, so no component ever
//! borrows the controller while rendering.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::attrs::ElementAttributes;
use canvas::doc::ShapeKind;
use room::Room;

use crate::consts::{DEFAULT_NAV_ELEMENT, NavItem};
use crate::state::whiteboard::Whiteboard;

/// The toolbar element the user picked last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveElement {
    pub name: String,
    pub value: String,
    pub icon: String,
}

impl ActiveElement {
    /// The element the toolbar falls back to.
    #[must_use]
    pub fn default_element() -> Self {
        DEFAULT_NAV_ELEMENT.into()
    }
}

impl From<NavItem> for ActiveElement {
    fn from(item: NavItem) -> Self {
        Self { name: item.name.to_owned(), value: item.value.to_owned(), icon: item.icon.to_owned() }
    }
}

/// One row of the layer list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerItem {
    pub id: String,
    pub kind: ShapeKind,
}

impl LayerItem {
    #[must_use]
    pub fn label(&self) -> &'static str {
        layer_label(self.kind)
    }
}

/// Display name of a shape kind in the layer list.
#[must_use]
pub fn layer_label(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rect => "Rectangle",
        ShapeKind::Circle => "Circle",
        ShapeKind::Triangle => "Triangle",
        ShapeKind::Line => "Line",
        ShapeKind::Text => "Text",
        ShapeKind::Path => "Free Drawing",
        ShapeKind::Image => "Image",
    }
}

/// Everything the navbar and sidebars display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub active_element: ActiveElement,
    pub attributes: ElementAttributes,
    /// Shapes in storage, topmost first.
    pub layers: Vec<LayerItem>,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Room revision `layers` was built from.
    layers_revision: Option<u64>,
}

impl UiState {
    /// Copy the controller's current state. Returns whether anything
    /// visible changed. Layers are only rebuilt when the room revision moved.
    pub fn refresh<R: Room>(&mut self, board: &Whiteboard<R>) -> bool {
        let mut changed = assign(&mut self.active_element, board.active_element());
        changed |= assign(&mut self.attributes, board.attributes());
        changed |= assign(&mut self.can_undo, &board.room().can_undo());
        changed |= assign(&mut self.can_redo, &board.room().can_redo());

        let revision = board.room().revision();
        if self.layers_revision != Some(revision) {
            self.layers_revision = Some(revision);
            let layers = board
                .layers()
                .into_iter()
                .map(|obj| LayerItem { id: obj.object_id.to_string(), kind: obj.kind })
                .collect::<Vec<_>>();
            changed |= assign(&mut self.layers, &layers);
        }
        changed
    }
}

fn assign<T: PartialEq + Clone>(slot: &mut T, value: &T) -> bool {
    if slot == value {
        return false;
    }
    slot.clone_from(value);
    true
}
