#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{BRUSH_WIDTH, TEXT_PLACEHOLDER};

fn origin() -> Point {
    Point::new(10.0, 20.0)
}

// =============================================================
// Factories
// =============================================================

#[test]
fn rectangle_defaults() {
    let r = create_rectangle(origin());
    assert_eq!(r.kind, ShapeKind::Rect);
    assert_eq!((r.left, r.top), (10.0, 20.0));
    assert_eq!((r.width, r.height), (100.0, 100.0));
    assert_eq!(r.fill.as_deref(), Some(DEFAULT_FILL));
}

#[test]
fn factories_assign_fresh_ids() {
    assert_ne!(create_rectangle(origin()).object_id, create_rectangle(origin()).object_id);
}

#[test]
fn triangle_defaults() {
    let t = create_triangle(origin());
    assert_eq!(t.kind, ShapeKind::Triangle);
    assert_eq!((t.width, t.height), (100.0, 100.0));
}

#[test]
fn circle_has_radius_100() {
    let c = create_circle(origin());
    assert_eq!(c.radius, Some(100.0));
    assert_eq!(c.width, 200.0);
    assert_eq!(c.fill.as_deref(), Some(DEFAULT_FILL));
}

#[test]
fn line_runs_to_plus_100() {
    let l = create_line(origin());
    assert_eq!(l.canvas_points(), vec![Point::new(10.0, 20.0), Point::new(110.0, 120.0)]);
    assert_eq!(l.stroke.as_deref(), Some(DEFAULT_FILL));
    assert_eq!(l.stroke_width, Some(2.0));
    assert!(l.fill.is_none());
}

#[test]
fn text_uses_default_font() {
    let t = create_text(origin(), TEXT_PLACEHOLDER);
    assert_eq!(t.kind, ShapeKind::Text);
    assert_eq!(t.text.as_deref(), Some("Tap to Type"));
    assert_eq!(t.font_family.as_deref(), Some("Helvetica"));
    assert_eq!(t.font_size, Some(36.0));
    assert_eq!(t.font_weight.as_deref(), Some("400"));
    assert!(t.width > 0.0 && t.height > 0.0);
}

#[test]
fn path_takes_brush_style() {
    let brush = Brush::default();
    let p = create_path(&[Point::new(0.0, 0.0), Point::new(10.0, 5.0)], &brush).unwrap();
    assert_eq!(p.kind, ShapeKind::Path);
    assert_eq!(p.stroke_width, Some(BRUSH_WIDTH));
    assert_eq!(p.stroke.as_deref(), Some(brush.color.as_str()));
    assert!(create_path(&[], &brush).is_none());
}

#[test]
fn image_scales_to_200_high_at_origin() {
    let img = create_image("data:image/png;base64,AAAA".into(), 800.0, 400.0);
    assert_eq!((img.left, img.top), (0.0, 0.0));
    assert_eq!(img.scale_x, 0.5);
    assert_eq!(img.scale_y, 0.5);
    assert_eq!(img.scaled_height(), 200.0);
    assert_eq!(img.scaled_width(), 400.0);
}

#[test]
fn image_with_zero_height_keeps_unit_scale() {
    let img = create_image(String::new(), 10.0, 0.0);
    assert_eq!(img.scale_y, 1.0);
}

#[test]
fn specific_shape_per_tool() {
    let p = origin();
    assert_eq!(create_specific_shape(Tool::Rectangle, p).map(|o| o.kind), Some(ShapeKind::Rect));
    assert_eq!(create_specific_shape(Tool::Circle, p).map(|o| o.kind), Some(ShapeKind::Circle));
    assert_eq!(create_specific_shape(Tool::Triangle, p).map(|o| o.kind), Some(ShapeKind::Triangle));
    assert_eq!(create_specific_shape(Tool::Line, p).map(|o| o.kind), Some(ShapeKind::Line));
    assert_eq!(create_specific_shape(Tool::Text, p).map(|o| o.kind), Some(ShapeKind::Text));
    assert!(create_specific_shape(Tool::Select, p).is_none());
    assert!(create_specific_shape(Tool::Freeform, p).is_none());
    assert!(create_specific_shape(Tool::Image, p).is_none());
}

// =============================================================
// modify_shape
// =============================================================

#[test]
fn width_edit_resets_scale() {
    let mut r = create_rectangle(origin());
    r.scale_x = 3.0;
    assert!(modify_shape(&mut r, ShapeProperty::Width, "150"));
    assert_eq!(r.width, 150.0);
    assert_eq!(r.scale_x, 1.0);
}

#[test]
fn height_edit_resets_scale() {
    let mut r = create_rectangle(origin());
    r.scale_y = 0.5;
    assert!(modify_shape(&mut r, ShapeProperty::Height, " 40 "));
    assert_eq!(r.height, 40.0);
    assert_eq!(r.scale_y, 1.0);
}

#[test]
fn same_size_is_noop() {
    let mut r = create_rectangle(origin());
    assert!(!modify_shape(&mut r, ShapeProperty::Width, "100"));
}

#[test]
fn invalid_size_is_rejected() {
    let mut r = create_rectangle(origin());
    for bad in ["", "abc", "-5", "0", "NaN", "inf"] {
        assert!(!modify_shape(&mut r, ShapeProperty::Width, bad), "{bad}");
    }
    assert_eq!(r.width, 100.0);
}

#[test]
fn line_width_edit_rescales_points() {
    let mut l = create_line(origin());
    assert!(modify_shape(&mut l, ShapeProperty::Width, "200"));
    assert_eq!(l.width, 100.0);
    assert_eq!(l.scale_x, 2.0);
    assert_eq!(l.scaled_width(), 200.0);
}

#[test]
fn circle_radius_follows_frame() {
    let mut c = create_circle(origin());
    assert!(modify_shape(&mut c, ShapeProperty::Width, "50"));
    assert_eq!(c.radius, Some(25.0));
}

#[test]
fn style_edits_report_changes() {
    let mut r = create_rectangle(origin());
    assert!(!modify_shape(&mut r, ShapeProperty::Fill, DEFAULT_FILL));
    assert!(modify_shape(&mut r, ShapeProperty::Fill, "#ff0000"));
    assert_eq!(r.fill.as_deref(), Some("#ff0000"));
    assert!(modify_shape(&mut r, ShapeProperty::Stroke, "#00ff00"));
    assert_eq!(r.stroke.as_deref(), Some("#00ff00"));
}

#[test]
fn font_edits_refit_text() {
    let mut t = create_text(origin(), "abc");
    let before = t.width;
    assert!(modify_shape(&mut t, ShapeProperty::FontSize, "72"));
    assert_eq!(t.font_size, Some(72.0));
    assert!(t.width > before);
    assert!(!modify_shape(&mut t, ShapeProperty::FontSize, "72"));
    assert!(modify_shape(&mut t, ShapeProperty::FontFamily, "Comic Sans MS"));
    assert!(modify_shape(&mut t, ShapeProperty::FontWeight, "800"));
    assert_eq!(t.font_weight.as_deref(), Some("800"));
}

// =============================================================
// set_text
// =============================================================

#[test]
fn set_text_only_for_text_objects() {
    let mut t = create_text(origin(), "a");
    assert!(set_text(&mut t, "hello"));
    assert_eq!(t.text.as_deref(), Some("hello"));
    assert!(!set_text(&mut t, "hello"));
    let mut r = create_rectangle(origin());
    assert!(!set_text(&mut r, "x"));
    assert!(r.text.is_none());
}

// =============================================================
// bring_element
// =============================================================

#[test]
fn bring_element_front_and_back() {
    let mut surface = Surface::new();
    let a = surface.add(create_rectangle(origin()));
    let b = surface.add(create_rectangle(origin()));
    let c = surface.add(create_rectangle(origin()));
    assert!(surface.set_active_object(a));

    let moved = bring_element(&mut surface, Direction::Front).unwrap();
    assert_eq!(moved.object_id, a);
    let order = surface.objects().iter().map(|o| o.object_id).collect::<Vec<_>>();
    assert_eq!(order, vec![b, c, a]);

    bring_element(&mut surface, Direction::Back).unwrap();
    let order = surface.objects().iter().map(|o| o.object_id).collect::<Vec<_>>();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn bring_element_needs_single_selection() {
    let mut surface = Surface::new();
    let a = surface.add(create_rectangle(origin()));
    let b = surface.add(create_rectangle(origin()));
    assert!(bring_element(&mut surface, Direction::Front).is_none());
    surface.set_active_objects(&[a, b]);
    assert!(bring_element(&mut surface, Direction::Front).is_none());
}

#[test]
fn direction_from_value() {
    assert_eq!(Direction::from_value("front"), Some(Direction::Front));
    assert_eq!(Direction::from_value("back"), Some(Direction::Back));
    assert_eq!(Direction::from_value("up"), None);
}
