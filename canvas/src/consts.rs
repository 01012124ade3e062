//! Shared constants for the canvas crate.

// ── Shape defaults ──────────────────────────────────────────────

/// Fill (and line stroke) given to every newly created or pasted shape.
pub const DEFAULT_FILL: &str = "#aabbcc";

/// Side length of a freshly created rectangle or triangle.
pub const DEFAULT_SHAPE_SIZE: f64 = 100.0;

/// Radius of a freshly created circle.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 100.0;

/// Offset of a new line's second endpoint from its first, on both axes.
pub const DEFAULT_LINE_LENGTH: f64 = 100.0;

/// Stroke width of a freshly created line.
pub const DEFAULT_LINE_STROKE_WIDTH: f64 = 2.0;

/// Placeholder content of a new text object.
pub const TEXT_PLACEHOLDER: &str = "Tap to Type";

pub const TEXT_FONT_FAMILY: &str = "Helvetica";
pub const TEXT_FONT_SIZE: f64 = 36.0;
pub const TEXT_FONT_WEIGHT: &str = "400";

/// Line box height as a multiple of the font size.
pub const TEXT_LINE_HEIGHT: f64 = 1.16;

/// Average glyph advance as a multiple of the font size, used to size text
/// boxes without a text-measuring backend.
pub const TEXT_CHAR_WIDTH: f64 = 0.6;

/// Rendered height of an uploaded image; width follows the aspect ratio.
pub const IMAGE_TARGET_HEIGHT: f64 = 200.0;

/// Offset applied on both axes to pasted shapes.
pub const PASTE_OFFSET: f64 = 20.0;

// ── Free drawing ────────────────────────────────────────────────

pub const BRUSH_WIDTH: f64 = 5.0;
pub const BRUSH_COLOR: &str = "#000000";

// ── Hit-testing ─────────────────────────────────────────────────

/// Half the side of a square scale handle, in pixels.
pub const HANDLE_SIZE_PX: f64 = 6.0;

/// Minimum pick distance for thin shapes (lines, paths), in pixels.
pub const HIT_SLOP_PX: f64 = 4.0;

/// A marquee smaller than this on either axis is treated as a click.
pub const MIN_MARQUEE_PX: f64 = 2.0;

/// Scale factors never shrink below this while scaling.
pub const MIN_SCALE: f64 = 0.01;
