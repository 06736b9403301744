//! Mouse event to engine point mapping.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use puzzle::geom::Point;

/// Viewport point from integer client coordinates.
pub fn client_point(client_x: i32, client_y: i32) -> Point {
    Point::new(f64::from(client_x), f64::from(client_y))
}

/// Viewport point of a mouse event.
#[cfg(feature = "csr")]
pub fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    client_point(ev.client_x(), ev.client_y())
}
