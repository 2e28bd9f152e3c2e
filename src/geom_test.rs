#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance(b), 5.0));
    assert!(approx_eq(b.distance(a), 5.0));
}

#[test]
fn point_within_includes_boundary() {
    let center = Point::new(100.0, 100.0);
    assert!(center.within(Point::new(120.0, 100.0), 20.0));
    assert!(center.within(Point::new(100.0, 80.0), 20.0));
    assert!(!center.within(Point::new(120.1, 100.0), 20.0));
}

#[test]
fn point_offset() {
    let p = Point::new(10.0, 20.0).offset(5.0, -5.0);
    assert_eq!(p, Point::new(15.0, 15.0));
}

#[test]
fn point_serde_shape() {
    let p: Point = serde_json::from_str(r#"{"x": 1.5, "y": -2}"#).unwrap();
    assert_eq!(p, Point::new(1.5, -2.0));
}

// --- Rect ---

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(50.0, 150.0, 700.0, 400.0);
    assert_eq!(r.right(), 750.0);
    assert_eq!(r.bottom(), 550.0);
    assert_eq!(r.center(), Point::new(400.0, 350.0));
}

#[test]
fn rect_contains_interior_and_edges() {
    let r = Rect::new(50.0, 50.0, 700.0, 400.0);
    assert!(r.contains(Point::new(400.0, 250.0)));
    assert!(r.contains(Point::new(50.0, 50.0)));
    assert!(r.contains(Point::new(750.0, 450.0)));
}

#[test]
fn rect_excludes_outside() {
    let r = Rect::new(50.0, 50.0, 700.0, 400.0);
    assert!(!r.contains(Point::new(49.9, 100.0)));
    assert!(!r.contains(Point::new(100.0, 450.1)));
    assert!(!r.contains(Point::new(800.0, 500.0)));
}

#[test]
fn rect_inset_shrinks_each_side() {
    let r = Rect::new(50.0, 50.0, 700.0, 400.0).inset(2.0);
    assert_eq!(r, Rect::new(52.0, 52.0, 696.0, 396.0));
}

#[test]
fn rect_inset_never_negative() {
    let r = Rect::new(0.0, 0.0, 2.0, 2.0).inset(5.0);
    assert_eq!(r.width, 0.0);
    assert_eq!(r.height, 0.0);
}
