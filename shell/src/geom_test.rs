#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn rect_contains_interior_and_edges() {
    let r = Rect::new(10.0, 10.0, 100.0, 50.0);
    assert!(r.contains(Point::new(50.0, 30.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(110.0, 60.0)));
    assert!(!r.contains(Point::new(9.9, 30.0)));
    assert!(!r.contains(Point::new(50.0, 60.1)));
}

#[test]
fn rect_new_clamps_negative_size() {
    let r = Rect::new(0.0, 0.0, -5.0, -1.0);
    assert_eq!(r.width, 0.0);
    assert_eq!(r.height, 0.0);
}

#[test]
fn overlaps_x_is_half_open() {
    let r = Rect::new(0.0, 0.0, 100.0, 10.0);
    assert!(r.overlaps_x(-50.0, 1.0));
    assert!(r.overlaps_x(99.0, 200.0));
    assert!(!r.overlaps_x(100.0, 200.0));
    assert!(!r.overlaps_x(-50.0, 0.0));
}
