#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{HANDLE_SIZE_PX, HIT_SLOP_PX};
use crate::doc::{CanvasObject, DocStore, ObjectId, ShapeKind};
use crate::geom::{Bounds, Point, distance_to_segment};
use crate::input::Corner;

/// Whether `p` lies on `obj`.
///
/// Filled shapes hit anywhere inside their outline (circles use the inscribed
/// ellipse). Lines and paths hit within half their stroke width, never less
/// than [`HIT_SLOP_PX`].
#[must_use]
pub fn contains(obj: &CanvasObject, p: Point) -> bool {
    match obj.kind {
        ShapeKind::Line | ShapeKind::Path => {
            let reach = (obj.stroke_width.unwrap_or(1.0) / 2.0).max(HIT_SLOP_PX);
            let pts = obj.canvas_points();
            match pts.as_slice() {
                [] => false,
                [only] => only.distance(p) <= reach,
                _ => pts.windows(2).any(|w| distance_to_segment(p, w[0], w[1]) <= reach),
            }
        }
        ShapeKind::Circle => {
            let b = obj.bounds();
            let (rx, ry) = (b.width / 2.0, b.height / 2.0);
            if rx <= 0.0 || ry <= 0.0 {
                return false;
            }
            let c = b.center();
            let nx = (p.x - c.x) / rx;
            let ny = (p.y - c.y) / ry;
            nx * nx + ny * ny <= 1.0
        }
        _ => obj.bounds().contains(p),
    }
}

/// Topmost object under `p`, if any.
#[must_use]
pub fn find_target(doc: &DocStore, p: Point) -> Option<ObjectId> {
    doc.sorted_objects()
        .into_iter()
        .rev()
        .find(|obj| contains(obj, p))
        .map(|obj| obj.object_id)
}

/// The corner scale handle of `obj` under `p`, if any.
#[must_use]
pub fn handle_at(obj: &CanvasObject, p: Point) -> Option<Corner> {
    let b = obj.bounds();
    Corner::ALL.into_iter().find(|c| handle_bounds(c.position(&b)).contains(p))
}

/// Square hit area of a handle centered on `center`.
#[must_use]
pub fn handle_bounds(center: Point) -> Bounds {
    Bounds::new(center.x - HANDLE_SIZE_PX, center.y - HANDLE_SIZE_PX, HANDLE_SIZE_PX * 2.0, HANDLE_SIZE_PX * 2.0)
}

/// Ids of every object whose bounding box touches `area`, in draw order.
#[must_use]
pub fn objects_in(doc: &DocStore, area: &Bounds) -> Vec<ObjectId> {
    doc.sorted_objects()
        .into_iter()
        .filter(|obj| obj.bounds().intersects(area))
        .map(|obj| obj.object_id)
        .collect()
}
