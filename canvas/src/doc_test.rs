#![allow(clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;

fn make_object(kind: ShapeKind, z: i64) -> CanvasObject {
    let mut obj = CanvasObject::new(Uuid::new_v4(), kind, 10.0, 20.0);
    obj.width = 100.0;
    obj.height = 80.0;
    obj.z_index = z;
    obj
}

// =============================================================
// ShapeKind serde
// =============================================================

#[test]
fn kind_serializes_as_record_type() {
    let cases = [
        (ShapeKind::Rect, "rect"),
        (ShapeKind::Circle, "circle"),
        (ShapeKind::Triangle, "triangle"),
        (ShapeKind::Line, "line"),
        (ShapeKind::Text, "i-text"),
        (ShapeKind::Path, "path"),
        (ShapeKind::Image, "image"),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(expected));
        assert_eq!(kind.as_str(), expected);
    }
}

#[test]
fn stroke_only_kinds() {
    assert!(ShapeKind::Line.is_stroke_only());
    assert!(ShapeKind::Path.is_stroke_only());
    assert!(!ShapeKind::Rect.is_stroke_only());
}

// =============================================================
// Records
// =============================================================

#[test]
fn record_uses_camel_case_keys() {
    let mut obj = make_object(ShapeKind::Rect, 3);
    obj.fill = Some("#aabbcc".into());
    let rec = obj.to_record().unwrap();
    assert_eq!(rec["objectId"], json!(obj.object_id.to_string()));
    assert_eq!(rec["type"], json!("rect"));
    assert_eq!(rec["scaleX"], json!(1.0));
    assert_eq!(rec["zIndex"], json!(3));
    assert_eq!(rec["fill"], json!("#aabbcc"));
    assert!(rec.get("stroke").is_none());
    assert!(rec.get("points").is_none());
}

#[test]
fn record_decodes_back_to_same_object() {
    let mut obj = make_object(ShapeKind::Text, 1);
    obj.text = Some("hi".into());
    obj.font_size = Some(24.0);
    let back = CanvasObject::from_record(&obj.to_record().unwrap()).unwrap();
    assert_eq!(back, obj);
}

#[test]
fn record_defaults_missing_scale_and_size() {
    let id = Uuid::new_v4();
    let rec = json!({ "objectId": id, "type": "circle", "left": 1.0, "top": 2.0 });
    let obj = CanvasObject::from_record(&rec).unwrap();
    assert_eq!(obj.object_id, id);
    assert_eq!((obj.scale_x, obj.scale_y), (1.0, 1.0));
    assert_eq!(obj.width, 0.0);
    assert_eq!(obj.z_index, 0);
}

#[test]
fn record_without_object_id_is_malformed() {
    let rec = json!({ "type": "rect", "left": 0.0, "top": 0.0 });
    assert!(matches!(CanvasObject::from_record(&rec), Err(RecordError::Malformed(_))));
}

#[test]
fn record_with_unknown_type_is_malformed() {
    let rec = json!({ "objectId": Uuid::new_v4(), "type": "star", "left": 0.0, "top": 0.0 });
    assert!(CanvasObject::from_record(&rec).is_err());
}

#[test]
fn record_with_null_geometry_is_rejected() {
    // NaN serializes to null, which does not decode as f64.
    let mut obj = make_object(ShapeKind::Rect, 0);
    obj.left = f64::NAN;
    let rec = obj.to_record().unwrap();
    assert!(CanvasObject::from_record(&rec).is_err());
}

// =============================================================
// Geometry helpers
// =============================================================

#[test]
fn scaled_size_and_bounds() {
    let mut obj = make_object(ShapeKind::Rect, 0);
    obj.scale_x = 2.0;
    obj.scale_y = 0.5;
    assert_eq!(obj.scaled_width(), 200.0);
    assert_eq!(obj.scaled_height(), 40.0);
    assert_eq!(obj.bounds(), Bounds::new(10.0, 20.0, 200.0, 40.0));
}

#[test]
fn line_endpoints_normalize_frame() {
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Line, 0.0, 0.0);
    obj.set_line_endpoints(Point::new(50.0, 10.0), Point::new(20.0, 40.0));
    assert_eq!((obj.left, obj.top), (20.0, 10.0));
    assert_eq!((obj.width, obj.height), (30.0, 30.0));
    assert_eq!(obj.canvas_points(), vec![Point::new(50.0, 10.0), Point::new(20.0, 40.0)]);
}

#[test]
fn path_points_are_stored_locally() {
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Path, 0.0, 0.0);
    obj.set_path_points(&[Point::new(5.0, 5.0), Point::new(15.0, 25.0)]);
    assert_eq!((obj.left, obj.top), (5.0, 5.0));
    assert_eq!(obj.points, vec![Point::new(0.0, 0.0), Point::new(10.0, 20.0)]);
}

#[test]
fn path_with_no_points_is_unchanged() {
    let mut obj = make_object(ShapeKind::Path, 0);
    let before = obj.clone();
    obj.set_path_points(&[]);
    assert_eq!(obj, before);
}

#[test]
fn set_radius_resizes_frame() {
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Circle, 0.0, 0.0);
    obj.set_radius(-30.0);
    assert_eq!(obj.radius, Some(30.0));
    assert_eq!((obj.width, obj.height), (60.0, 60.0));
}

#[test]
fn fit_text_uses_longest_line() {
    let mut obj = CanvasObject::new(Uuid::new_v4(), ShapeKind::Text, 0.0, 0.0);
    obj.text = Some("ab\nabcd".into());
    obj.font_size = Some(10.0);
    obj.fit_text();
    assert!((obj.width - 4.0 * 10.0 * TEXT_CHAR_WIDTH).abs() < 1e-9);
    assert!((obj.height - 2.0 * 10.0 * TEXT_LINE_HEIGHT).abs() < 1e-9);
}

// =============================================================
// DocStore
// =============================================================

#[test]
fn store_insert_get_remove() {
    let mut doc = DocStore::new();
    let obj = make_object(ShapeKind::Rect, 0);
    let id = obj.object_id;
    doc.insert(obj);
    assert!(doc.contains(&id));
    assert_eq!(doc.len(), 1);
    doc.get_mut(&id).unwrap().left = 99.0;
    assert_eq!(doc.get(&id).unwrap().left, 99.0);
    assert!(doc.remove(&id).is_some());
    assert!(doc.is_empty());
}

#[test]
fn store_insert_replaces_same_id() {
    let mut doc = DocStore::new();
    let mut obj = make_object(ShapeKind::Rect, 0);
    doc.insert(obj.clone());
    obj.left = 5.0;
    doc.insert(obj.clone());
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get(&obj.object_id).unwrap().left, 5.0);
}

#[test]
fn sorted_objects_orders_by_z_then_id() {
    let mut doc = DocStore::new();
    let a = make_object(ShapeKind::Rect, 2);
    let b = make_object(ShapeKind::Circle, 0);
    let c = make_object(ShapeKind::Line, 1);
    for o in [a.clone(), b.clone(), c.clone()] {
        doc.insert(o);
    }
    let order = doc.sorted_objects().iter().map(|o| o.object_id).collect::<Vec<_>>();
    assert_eq!(order, vec![b.object_id, c.object_id, a.object_id]);
    assert_eq!(doc.max_z(), Some(2));
    assert_eq!(doc.min_z(), Some(0));
}

#[test]
fn empty_store_has_no_z_range() {
    let doc = DocStore::default();
    assert_eq!(doc.max_z(), None);
    assert_eq!(doc.min_z(), None);
}

#[test]
fn clear_drops_everything() {
    let mut doc = DocStore::new();
    doc.insert(make_object(ShapeKind::Rect, 0));
    doc.insert(make_object(ShapeKind::Rect, 1));
    doc.clear();
    assert!(doc.is_empty());
}
