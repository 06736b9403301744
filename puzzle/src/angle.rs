//! Bearing math for rotate-by-drag.
//!
//! A bearing is the angle of the ray from a center to a point, in radians,
//! as returned by `atan2` (range `(-π, π]`, positive = clockwise on screen
//! because viewport y grows downward).

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use crate::geom::Point;

/// Bearing of `point` as seen from `center`, in radians.
///
/// When `point == center` this is `atan2(0, 0) = 0`: defined, but meaningless.
#[must_use]
pub fn bearing(center: Point, point: Point) -> f64 {
    (point.y - center.y).atan2(point.x - center.x)
}

/// Signed change in bearing, in degrees, from `from` to `to` around `center`.
///
/// The raw difference of the two bearings is returned without wrapping, so a
/// sweep across the negative x axis reads as a jump of ±360°. Applied as a
/// CSS rotation that jump is invisible.
#[must_use]
pub fn swept_degrees(center: Point, from: Point, to: Point) -> f64 {
    (bearing(center, to) - bearing(center, from)).to_degrees()
}
