//! Shape factories and in-place shape edits.
//!
//! Factories return detached [`CanvasObject`]s with fresh ids; callers add
//! them to the surface. Edits report whether anything changed so callers only
//! sync real changes.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use uuid::Uuid;

use crate::attrs::ShapeProperty;
use crate::consts::{
    DEFAULT_CIRCLE_RADIUS, DEFAULT_FILL, DEFAULT_LINE_LENGTH, DEFAULT_LINE_STROKE_WIDTH, DEFAULT_SHAPE_SIZE,
    IMAGE_TARGET_HEIGHT, TEXT_FONT_FAMILY, TEXT_FONT_SIZE, TEXT_FONT_WEIGHT, TEXT_PLACEHOLDER,
};
use crate::doc::{CanvasObject, ShapeKind};
use crate::geom::Point;
use crate::input::Tool;
use crate::surface::{Brush, Surface};

/// A filled `DEFAULT_SHAPE_SIZE` square with its top-left at `pointer`.
#[must_use]
pub fn create_rectangle(pointer: Point) -> CanvasObject {
    boxed(ShapeKind::Rect, pointer)
}

#[must_use]
pub fn create_triangle(pointer: Point) -> CanvasObject {
    boxed(ShapeKind::Triangle, pointer)
}

fn boxed(kind: ShapeKind, pointer: Point) -> CanvasObject {
    let mut obj = CanvasObject::new(Uuid::new_v4(), kind, pointer.x, pointer.y);
    obj.width = DEFAULT_SHAPE_SIZE;
    obj.height = DEFAULT_SHAPE_SIZE;
    obj.fill = Some(DEFAULT_FILL.to_owned());
    obj
}

#[must_use]
pub fn create_circle(pointer: Point) -> CanvasObject {
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Circle, pointer.x, pointer.y);
    obj.set_radius(DEFAULT_CIRCLE_RADIUS);
    obj.fill = Some(DEFAULT_FILL.to_owned());
    obj
}

/// A diagonal segment from `pointer` to `pointer + (100, 100)`.
#[must_use]
pub fn create_line(pointer: Point) -> CanvasObject {
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Line, pointer.x, pointer.y);
    obj.set_line_endpoints(pointer, pointer.offset(DEFAULT_LINE_LENGTH, DEFAULT_LINE_LENGTH));
    obj.stroke = Some(DEFAULT_FILL.to_owned());
    obj.stroke_width = Some(DEFAULT_LINE_STROKE_WIDTH);
    obj
}

#[must_use]
pub fn create_text(pointer: Point, text: &str) -> CanvasObject {
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Text, pointer.x, pointer.y);
    obj.text = Some(text.to_owned());
    obj.fill = Some(DEFAULT_FILL.to_owned());
    obj.font_family = Some(TEXT_FONT_FAMILY.to_owned());
    obj.font_size = Some(TEXT_FONT_SIZE);
    obj.font_weight = Some(TEXT_FONT_WEIGHT.to_owned());
    obj.fit_text();
    obj
}

/// A freehand path through canvas-space `points`, stroked with `brush`.
/// `None` when there are no points.
#[must_use]
pub fn create_path(points: &[Point], brush: &Brush) -> Option<CanvasObject> {
    let first = points.first()?;
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Path, first.x, first.y);
    obj.set_path_points(points);
    obj.stroke = Some(brush.color.clone());
    obj.stroke_width = Some(brush.width);
    Some(obj)
}

/// An image at the canvas origin, scaled uniformly to
/// [`IMAGE_TARGET_HEIGHT`] pixels tall.
#[must_use]
pub fn create_image(src: String, natural_width: f64, natural_height: f64) -> CanvasObject {
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Image, 0.0, 0.0);
    obj.width = natural_width.max(0.0);
    obj.height = natural_height.max(0.0);
    let scale = if natural_height > 0.0 { IMAGE_TARGET_HEIGHT / natural_height } else { 1.0 };
    obj.scale_x = scale;
    obj.scale_y = scale;
    obj.src = Some(src);
    obj
}

/// The shape `tool` draws when pressed at `pointer`. `None` for tools that
/// do not create shapes from the pointer.
#[must_use]
pub fn create_specific_shape(tool: Tool, pointer: Point) -> Option<CanvasObject> {
    match tool {
        Tool::Rectangle => Some(create_rectangle(pointer)),
        Tool::Circle => Some(create_circle(pointer)),
        Tool::Triangle => Some(create_triangle(pointer)),
        Tool::Line => Some(create_line(pointer)),
        Tool::Text => Some(create_text(pointer, TEXT_PLACEHOLDER)),
        Tool::Select | Tool::Freeform | Tool::Image => None,
    }
}

/// Apply a sidebar edit to `obj`. Returns `false` when the value is invalid
/// or already in effect.
///
/// Width and height edits reset that axis's scale to 1 and set the frame size
/// directly, except for lines and paths, whose point geometry is kept and
/// rescaled instead.
pub fn modify_shape(obj: &mut CanvasObject, property: ShapeProperty, value: &str) -> bool {
    match property {
        ShapeProperty::Width | ShapeProperty::Height => {
            let Some(size) = parse_positive(value) else {
                return false;
            };
            let horizontal = property == ShapeProperty::Width;
            let current = if horizontal { obj.scaled_width() } else { obj.scaled_height() };
            if (current - size).abs() < f64::EPSILON {
                return false;
            }
            resize_axis(obj, horizontal, size)
        }
        ShapeProperty::FontSize => {
            let Some(size) = parse_positive(value) else {
                return false;
            };
            if obj.font_size == Some(size) {
                return false;
            }
            obj.font_size = Some(size);
            obj.fit_text();
            true
        }
        ShapeProperty::FontFamily => replace(&mut obj.font_family, value),
        ShapeProperty::FontWeight => replace(&mut obj.font_weight, value),
        ShapeProperty::Fill => replace(&mut obj.fill, value),
        ShapeProperty::Stroke => replace(&mut obj.stroke, value),
    }
}

fn resize_axis(obj: &mut CanvasObject, horizontal: bool, size: f64) -> bool {
    let (extent, scale) = if horizontal {
        (&mut obj.width, &mut obj.scale_x)
    } else {
        (&mut obj.height, &mut obj.scale_y)
    };
    if obj.kind.is_stroke_only() {
        if *extent <= 0.0 {
            return false;
        }
        *scale = size / *extent;
    } else {
        *scale = 1.0;
        *extent = size;
    }
    if obj.kind == ShapeKind::Circle {
        obj.radius = Some(obj.width.min(obj.height) / 2.0);
    }
    true
}

fn replace(slot: &mut Option<String>, value: &str) -> bool {
    if slot.as_deref() == Some(value) {
        return false;
    }
    *slot = Some(value.to_owned());
    true
}

fn parse_positive(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

/// Replace a text object's content. Returns `false` for other kinds or when
/// the text is unchanged.
pub fn set_text(obj: &mut CanvasObject, text: &str) -> bool {
    if obj.kind != ShapeKind::Text || obj.text.as_deref() == Some(text) {
        return false;
    }
    obj.text = Some(text.to_owned());
    obj.fit_text();
    true
}

/// Layer ordering target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Front,
    Back,
}

impl Direction {
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "front" => Some(Self::Front),
            "back" => Some(Self::Back),
            _ => None,
        }
    }
}

/// Move the single active object to the top or bottom of the stack and
/// return its updated snapshot. `None` without a single active object.
pub fn bring_element(surface: &mut Surface, direction: Direction) -> Option<CanvasObject> {
    let id = surface.active_object()?.object_id;
    let z = match direction {
        Direction::Front => surface.doc().max_z().map_or(0, |z| z + 1),
        Direction::Back => surface.doc().min_z().map_or(0, |z| z - 1),
    };
    let obj = surface.object_mut(&id)?;
    obj.z_index = z;
    Some(obj.clone())
}
