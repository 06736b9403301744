#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const EPSILON: f64 = 1e-9;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// bearing
// =============================================================

#[test]
fn bearing_right_of_center_is_zero() {
    assert!(bearing(pt(0.0, 0.0), pt(10.0, 0.0)).abs() < EPSILON);
}

#[test]
fn bearing_above_center_is_minus_half_pi() {
    // Viewport y grows downward, so "above" is negative y.
    assert!((bearing(pt(100.0, 150.0), pt(100.0, 100.0)) + FRAC_PI_2).abs() < EPSILON);
}

#[test]
fn bearing_below_center_is_half_pi() {
    assert!((bearing(pt(100.0, 150.0), pt(100.0, 200.0)) - FRAC_PI_2).abs() < EPSILON);
}

#[test]
fn bearing_left_of_center_is_pi() {
    assert!((bearing(pt(0.0, 0.0), pt(-5.0, 0.0)) - PI).abs() < EPSILON);
}

#[test]
fn bearing_at_center_is_zero_and_finite() {
    let b = bearing(pt(3.0, 4.0), pt(3.0, 4.0));
    assert!(b.is_finite());
    assert_eq!(b, 0.0);
}

#[test]
fn bearing_ignores_distance() {
    let c = pt(50.0, 50.0);
    let near = bearing(c, pt(51.0, 51.0));
    let far = bearing(c, pt(5050.0, 5050.0));
    assert!((near - far).abs() < EPSILON);
}

// =============================================================
// swept_degrees
// =============================================================

#[test]
fn swept_zero_when_pointer_does_not_move() {
    let c = pt(100.0, 150.0);
    assert!(swept_degrees(c, pt(100.0, 100.0), pt(100.0, 100.0)).abs() < EPSILON);
}

#[test]
fn swept_quarter_turn_clockwise() {
    let c = pt(100.0, 150.0);
    let d = swept_degrees(c, pt(100.0, 100.0), pt(150.0, 150.0));
    assert!((d - 90.0).abs() < EPSILON);
}

#[test]
fn swept_quarter_turn_counter_clockwise() {
    let c = pt(100.0, 150.0);
    // Right of center back up to directly above.
    let d = swept_degrees(c, pt(150.0, 150.0), pt(100.0, 100.0));
    assert!((d + 90.0).abs() < EPSILON);
}

#[test]
fn swept_half_circle_is_180_regardless_of_radius() {
    let c = pt(0.0, 0.0);
    let short = swept_degrees(c, pt(0.0, -1.0), pt(0.0, 1.0));
    let long = swept_degrees(c, pt(0.0, -400.0), pt(0.0, 900.0));
    assert!((short - 180.0).abs() < EPSILON);
    assert!((long - 180.0).abs() < EPSILON);
}

#[test]
fn swept_across_negative_x_axis_is_not_wrapped() {
    let c = pt(0.0, 0.0);
    // Just below the negative x axis (bearing ≈ +170°) to just above (≈ -170°).
    let from = pt(-100.0, 100.0 * 10f64.to_radians().tan());
    let to = pt(-100.0, -100.0 * 10f64.to_radians().tan());
    let d = swept_degrees(c, from, to);
    assert!((d + 340.0).abs() < 1e-6);
}
