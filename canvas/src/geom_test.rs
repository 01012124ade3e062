#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_offset_moves_both_axes() {
    assert_eq!(Point::new(1.0, 2.0).offset(20.0, -2.0), Point::new(21.0, 0.0));
}

#[test]
fn point_distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn from_corners_normalizes_order() {
    let b = Bounds::from_corners(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
    assert_eq!(b, Bounds::new(10.0, 20.0, 40.0, 60.0));
    assert_eq!(b.right(), 50.0);
    assert_eq!(b.bottom(), 80.0);
}

#[test]
fn new_takes_absolute_size() {
    let b = Bounds::new(0.0, 0.0, -5.0, -6.0);
    assert_eq!((b.width, b.height), (5.0, 6.0));
}

#[test]
fn enclosing_covers_all_points() {
    let pts = [Point::new(5.0, 5.0), Point::new(-1.0, 9.0), Point::new(3.0, 0.0)];
    let b = Bounds::enclosing(&pts).unwrap();
    assert_eq!(b, Bounds::new(-1.0, 0.0, 6.0, 9.0));
    assert!(Bounds::enclosing(&[]).is_none());
}

#[test]
fn contains_is_inclusive() {
    let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
    assert!(b.contains(Point::new(0.0, 0.0)));
    assert!(b.contains(Point::new(10.0, 10.0)));
    assert!(!b.contains(Point::new(10.1, 5.0)));
}

#[test]
fn intersects_detects_overlap_and_gap() {
    let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&Bounds::new(5.0, 5.0, 10.0, 10.0)));
    assert!(a.intersects(&Bounds::new(10.0, 0.0, 5.0, 5.0)));
    assert!(!a.intersects(&Bounds::new(11.0, 0.0, 5.0, 5.0)));
}

#[test]
fn inflate_grows_every_side() {
    let b = Bounds::new(10.0, 10.0, 10.0, 10.0).inflate(2.0);
    assert_eq!(b, Bounds::new(8.0, 8.0, 14.0, 14.0));
    assert_eq!(b.center(), Point::new(15.0, 15.0));
}

// =============================================================
// distance_to_segment
// =============================================================

#[test]
fn segment_distance_perpendicular_and_endpoint() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert_eq!(distance_to_segment(Point::new(5.0, 3.0), a, b), 3.0);
    assert_eq!(distance_to_segment(Point::new(13.0, 4.0), a, b), 5.0);
}

#[test]
fn degenerate_segment_is_point_distance() {
    let a = Point::new(1.0, 1.0);
    assert_eq!(distance_to_segment(Point::new(4.0, 5.0), a, a), 5.0);
}
