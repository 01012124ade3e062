//! Toolbar entries, sidebar options and page timings.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

/// A toolbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

/// A toolbar slot: one button, or a dropdown of buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Single(NavItem),
    Menu(&'static [NavItem]),
}

pub const SELECT_ELEMENT: NavItem = NavItem { name: "Select", value: "select", icon: "/assets/select.svg" };

/// Shapes offered by the shapes dropdown.
pub const SHAPE_ELEMENTS: &[NavItem] = &[
    NavItem { name: "Rectangle", value: "rectangle", icon: "/assets/rectangle.svg" },
    NavItem { name: "Circle", value: "circle", icon: "/assets/circle.svg" },
    NavItem { name: "Triangle", value: "triangle", icon: "/assets/triangle.svg" },
    NavItem { name: "Line", value: "line", icon: "/assets/line.svg" },
    NavItem { name: "Image", value: "image", icon: "/assets/image.svg" },
    NavItem { name: "Free Drawing", value: "freeform", icon: "/assets/freeform.svg" },
];

pub const NAV_ELEMENTS: &[NavEntry] = &[
    NavEntry::Single(SELECT_ELEMENT),
    NavEntry::Menu(SHAPE_ELEMENTS),
    NavEntry::Single(NavItem { name: "Text", value: "text", icon: "/assets/text.svg" }),
    NavEntry::Single(NavItem { name: "Delete", value: "delete", icon: "/assets/delete.svg" }),
    NavEntry::Single(NavItem { name: "Reset", value: "reset", icon: "/assets/reset.svg" }),
    NavEntry::Single(NavItem { name: "Comments", value: "comments", icon: "/assets/comments.svg" }),
];

/// Element the toolbar returns to after a reset, a delete or a drawn shape.
pub const DEFAULT_NAV_ELEMENT: NavItem = SELECT_ELEMENT;

/// `(value, label)` pairs.
pub const FONT_FAMILY_OPTIONS: &[(&str, &str)] = &[
    ("Helvetica", "Helvetica"),
    ("Times New Roman", "Times New Roman"),
    ("Comic Sans MS", "Comic Sans MS"),
    ("Brush Script MT", "Brush Script MT"),
];

pub const FONT_SIZE_OPTIONS: &[&str] = &[
    "10", "12", "14", "16", "18", "20", "22", "24", "26", "28", "30", "32", "34", "36",
];

/// `(value, label)` pairs.
pub const FONT_WEIGHT_OPTIONS: &[(&str, &str)] = &[("400", "Normal"), ("600", "Semibold"), ("700", "Bold")];

/// `(label, value, icon)` for the layer buttons.
pub const DIRECTION_OPTIONS: &[(&str, &str, &str)] = &[
    ("Bring to Front", "front", "/assets/bring-front.svg"),
    ("Send to Back", "back", "/assets/send-back.svg"),
];

/// Context menu entries: `(key, label, shortcut)`.
pub const SHORTCUTS: &[(&str, &str, &str)] = &[("undo", "Undo", "⌘ + Z"), ("redo", "Redo", "⌘ + Y")];

/// Delay before the toolbar returns to [`DEFAULT_NAV_ELEMENT`] after a shape
/// is drawn.
pub const ACTIVE_ELEMENT_RESET_MS: u32 = 700;

/// File name of the PNG export.
pub const EXPORT_FILE_NAME: &str = "canvas.png";

/// Find a toolbar entry by value, looking inside dropdowns.
#[must_use]
pub fn find_nav_item(value: &str) -> Option<NavItem> {
    NAV_ELEMENTS.iter().find_map(|entry| match entry {
        NavEntry::Single(item) => (item.value == value).then_some(*item),
        NavEntry::Menu(items) => items.iter().find(|item| item.value == value).copied(),
    })
}
