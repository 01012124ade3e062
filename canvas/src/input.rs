//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` is the shape the user picked from the toolbar. `Modifiers` and `Key`
//! capture keyboard state at the time of an event. `InputState` is the active
//! gesture tracked by the surface between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ObjectId;
use crate::geom::{Bounds, Point};

/// Which tool is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    Rectangle,
    Circle,
    Triangle,
    Line,
    Text,
    /// Free drawing with the brush.
    Freeform,
    /// Image upload; shapes come from the file picker, not the pointer.
    Image,
}

impl Tool {
    /// Parse a toolbar element value (`"rectangle"`, `"freeform"`, ...).
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "select" => Some(Self::Select),
            "rectangle" => Some(Self::Rectangle),
            "circle" => Some(Self::Circle),
            "triangle" => Some(Self::Triangle),
            "line" => Some(Self::Line),
            "text" => Some(Self::Text),
            "freeform" => Some(Self::Freeform),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// The toolbar element value for this tool.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Line => "line",
            Self::Text => "text",
            Self::Freeform => "freeform",
            Self::Image => "image",
        }
    }

    /// Whether pressing on the canvas with this tool creates a shape.
    #[must_use]
    pub fn creates_shape(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Triangle | Self::Line | Self::Text)
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A keyboard key as reported by the browser's `KeyboardEvent.key`
/// (e.g. `"c"`, `"Delete"`, `"/"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Case-insensitive match against a single-character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        let mut chars = self.0.chars();
        matches!((chars.next(), chars.next()), (Some(k), None) if k.eq_ignore_ascii_case(&c))
    }

    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

/// A corner scale handle of the selection box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Nw,
    Ne,
    Se,
    Sw,
}

impl Corner {
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Se, Self::Sw];

    /// Position of this corner on `bounds`.
    #[must_use]
    pub fn position(self, bounds: &Bounds) -> Point {
        match self {
            Self::Nw => Point::new(bounds.x, bounds.y),
            Self::Ne => Point::new(bounds.right(), bounds.y),
            Self::Se => Point::new(bounds.right(), bounds.bottom()),
            Self::Sw => Point::new(bounds.x, bounds.bottom()),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Nw => Self::Se,
            Self::Ne => Self::Sw,
            Self::Se => Self::Nw,
            Self::Sw => Self::Ne,
        }
    }
}

/// Internal state for the surface's gesture state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Moving the active objects.
    Dragging {
        /// Pointer position at the previous event.
        last: Point,
        /// Whether any movement happened since pointer-down.
        moved: bool,
    },
    /// Scaling the single active object by one of its corner handles.
    Scaling {
        id: ObjectId,
        /// The corner opposite the grabbed handle; it stays fixed.
        anchor: Point,
        moved: bool,
    },
    /// Rubber-band selection from `start` to `current`.
    Marquee { start: Point, current: Point },
    /// Free-drawing stroke in progress.
    Brushing { points: Vec<Point> },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
