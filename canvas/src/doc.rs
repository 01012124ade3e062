//! Document model: canvas objects, their storage record format, and the
//! in-memory store.
//!
//! A [`CanvasObject`] is the typed form of one entry in the shared
//! `canvasObjects` mapping. Every object lives in its own local frame spanning
//! `(0, 0)`–`(width, height)`; `left`/`top` place that frame on the canvas and
//! `scale_x`/`scale_y` stretch it. Line and path geometry is stored as points
//! in the local frame.
//!
//! Records are camelCase JSON (`objectId`, `type`, `left`, `top`, `scaleX`,
//! ...). [`CanvasObject::to_record`] and [`CanvasObject::from_record`] are the
//! only conversion points between the two.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::consts::{TEXT_CHAR_WIDTH, TEXT_FONT_SIZE, TEXT_LINE_HEIGHT};
use crate::geom::{Bounds, Point};

/// Unique identifier for a canvas object.
pub type ObjectId = Uuid;

/// The kind of a canvas object, serialized as its record `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[serde(rename = "rect")]
    Rect,
    /// Ellipse inscribed in the local frame; a circle until scaled unevenly.
    #[serde(rename = "circle")]
    Circle,
    /// Isosceles triangle with its apex at the top-center of the frame.
    #[serde(rename = "triangle")]
    Triangle,
    /// Straight segment between the two local `points`.
    #[serde(rename = "line")]
    Line,
    /// Editable single-block text.
    #[serde(rename = "i-text")]
    Text,
    /// Freehand polyline through the local `points`.
    #[serde(rename = "path")]
    Path,
    /// Bitmap decoded from the `src` data URL.
    #[serde(rename = "image")]
    Image,
}

impl ShapeKind {
    /// Record `type` string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Line => "line",
            Self::Text => "i-text",
            Self::Path => "path",
            Self::Image => "image",
        }
    }

    /// Whether the shape is drawn as a stroke only (no fill area).
    #[must_use]
    pub fn is_stroke_only(self) -> bool {
        matches!(self, Self::Line | Self::Path)
    }
}

/// Errors decoding a storage record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed canvas record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("canvas record {0} has non-finite geometry")]
    NonFinite(ObjectId),
}

fn one() -> f64 {
    1.0
}

/// A drawable shape as held on the surface and stored in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasObject {
    pub object_id: ObjectId,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub left: f64,
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    #[serde(default)]
    pub z_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Image data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl CanvasObject {
    /// A bare object of `kind` at `(left, top)` with unit scale and no style.
    #[must_use]
    pub fn new(object_id: ObjectId, kind: ShapeKind, left: f64, top: f64) -> Self {
        Self {
            object_id,
            kind,
            left,
            top,
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            z_index: 0,
            fill: None,
            stroke: None,
            stroke_width: None,
            radius: None,
            points: Vec::new(),
            text: None,
            font_size: None,
            font_family: None,
            font_weight: None,
            src: None,
        }
    }

    /// Encode as a storage record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Malformed`] if serialization fails.
    pub fn to_record(&self) -> Result<Value, RecordError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode a storage record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Malformed`] if the record does not describe a
    /// canvas object, and [`RecordError::NonFinite`] if its placement or size
    /// is NaN or infinite.
    pub fn from_record(record: &Value) -> Result<Self, RecordError> {
        let obj = Self::deserialize(record)?;
        let geometry = [obj.left, obj.top, obj.width, obj.height, obj.scale_x, obj.scale_y];
        if geometry.iter().any(|v| !v.is_finite()) {
            return Err(RecordError::NonFinite(obj.object_id));
        }
        Ok(obj)
    }

    /// Width on the canvas after scaling.
    #[must_use]
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    /// Height on the canvas after scaling.
    #[must_use]
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Canvas-space bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.scaled_width(), self.scaled_height())
    }

    /// Map a local-frame point to canvas coordinates.
    #[must_use]
    pub fn to_canvas(&self, local: Point) -> Point {
        Point::new(self.left + local.x * self.scale_x, self.top + local.y * self.scale_y)
    }

    /// Local `points` mapped to canvas coordinates.
    #[must_use]
    pub fn canvas_points(&self) -> Vec<Point> {
        self.points.iter().map(|p| self.to_canvas(*p)).collect()
    }

    /// Move the object so its local frame starts at `(left, top)`.
    pub fn move_to(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
    }

    /// Place a line between two canvas points, normalizing the frame so
    /// `left`/`top` is the top-left of the segment's bounding box.
    pub fn set_line_endpoints(&mut self, a: Point, b: Point) {
        let frame = Bounds::from_corners(a, b);
        self.left = frame.x;
        self.top = frame.y;
        self.width = frame.width;
        self.height = frame.height;
        self.scale_x = 1.0;
        self.scale_y = 1.0;
        self.points = vec![a.offset(-frame.x, -frame.y), b.offset(-frame.x, -frame.y)];
    }

    /// Replace a path's geometry with canvas-space `points`.
    pub fn set_path_points(&mut self, points: &[Point]) {
        let Some(frame) = Bounds::enclosing(points) else {
            return;
        };
        self.left = frame.x;
        self.top = frame.y;
        self.width = frame.width;
        self.height = frame.height;
        self.scale_x = 1.0;
        self.scale_y = 1.0;
        self.points = points.iter().map(|p| p.offset(-frame.x, -frame.y)).collect();
    }

    /// Set the radius of a circle, resizing its frame to match.
    pub fn set_radius(&mut self, radius: f64) {
        let radius = radius.abs();
        self.radius = Some(radius);
        self.width = radius * 2.0;
        self.height = radius * 2.0;
    }

    /// Recompute a text object's frame from its content and font size.
    #[allow(clippy::cast_precision_loss)]
    pub fn fit_text(&mut self) {
        let Some(text) = self.text.as_deref() else {
            return;
        };
        let size = self.font_size.unwrap_or(TEXT_FONT_SIZE);
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        self.width = longest as f64 * size * TEXT_CHAR_WIDTH;
        self.height = lines as f64 * size * TEXT_LINE_HEIGHT;
    }
}

/// In-memory store of canvas objects.
pub struct DocStore {
    objects: HashMap<ObjectId, CanvasObject>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: HashMap::new() }
    }

    /// Insert or replace an object. If an object with the same id already
    /// exists it is overwritten.
    pub fn insert(&mut self, obj: CanvasObject) {
        self.objects.insert(obj.object_id, obj);
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<CanvasObject> {
        self.objects.remove(id)
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&CanvasObject> {
        self.objects.get(id)
    }

    /// Return a mutable reference to an object by id.
    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut CanvasObject> {
        self.objects.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Drop every object.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Return all objects sorted by `(z_index, object_id)` for draw-order.
    #[must_use]
    pub fn sorted_objects(&self) -> Vec<&CanvasObject> {
        let mut objs: Vec<&CanvasObject> = self.objects.values().collect();
        objs.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.object_id.cmp(&b.object_id)));
        objs
    }

    /// Highest z-index in the store, if any.
    #[must_use]
    pub fn max_z(&self) -> Option<i64> {
        self.objects.values().map(|o| o.z_index).max()
    }

    /// Lowest z-index in the store, if any.
    #[must_use]
    pub fn min_z(&self) -> Option<i64> {
        self.objects.values().map(|o| o.z_index).min()
    }

    /// Number of objects currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
