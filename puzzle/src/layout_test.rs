#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Point;
use crate::piece::{Piece, Placement};

const EPSILON: f64 = 1e-9;

fn piece(id: &str, width: f64, top: f64, left: f64, aspect: f64) -> Piece {
    Piece {
        id: PieceId::new(id),
        src: String::new(),
        alt: String::new(),
        placement: Placement { width, top, left, aspect },
    }
}

#[test]
fn rect_from_percentages() {
    let set = PieceSet::new(vec![piece("a", 25.0, 10.0, 20.0, 1.0)]).unwrap();
    let layout = StaticLayout::new(&set, Rect::new(0.0, 0.0, 800.0, 600.0));
    let r = layout.bounding_rect(&PieceId::new("a")).unwrap();
    assert_eq!(r.left, 160.0);
    assert_eq!(r.top, 60.0);
    assert_eq!(r.width, 200.0);
    assert_eq!(r.height, 200.0);
}

#[test]
fn rect_is_offset_by_stage_origin() {
    let set = PieceSet::new(vec![piece("a", 50.0, 0.0, 0.0, 1.0)]).unwrap();
    let layout = StaticLayout::new(&set, Rect::new(100.0, 40.0, 200.0, 100.0));
    let r = layout.bounding_rect(&PieceId::new("a")).unwrap();
    assert_eq!(r.left, 100.0);
    assert_eq!(r.top, 40.0);
}

#[test]
fn aspect_scales_height_from_width() {
    let set = PieceSet::new(vec![piece("a", 50.0, 0.0, 0.0, 0.5)]).unwrap();
    let layout = StaticLayout::new(&set, Rect::new(0.0, 0.0, 400.0, 400.0));
    let r = layout.bounding_rect(&PieceId::new("a")).unwrap();
    assert_eq!(r.width, 200.0);
    assert_eq!(r.height, 100.0);
}

#[test]
fn center_of_laid_out_piece() {
    let set = PieceSet::new(vec![piece("a", 10.0, 50.0, 50.0, 1.0)]).unwrap();
    let layout = StaticLayout::new(&set, Rect::new(0.0, 0.0, 1000.0, 1000.0));
    let c = layout.bounding_rect(&PieceId::new("a")).unwrap().center();
    assert!((c.x - 550.0).abs() < EPSILON);
    assert!((c.y - 550.0).abs() < EPSILON);
    assert_eq!(c, Point::new(550.0, 550.0));
}

#[test]
fn unknown_piece_has_no_rect() {
    let set = PieceSet::new(vec![piece("a", 10.0, 0.0, 0.0, 1.0)]).unwrap();
    let layout = StaticLayout::new(&set, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert!(layout.bounding_rect(&PieceId::new("b")).is_none());
}
