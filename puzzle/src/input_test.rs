#![allow(clippy::float_cmp)]

use super::*;

fn session(id: &str) -> DragSession {
    DragSession {
        piece_id: PieceId::new(id),
        start_pointer: Point::new(10.0, 20.0),
        start_rotation: 45.0,
    }
}

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn idle_has_no_session() {
    let state = InputState::Idle;
    assert!(state.session().is_none());
    assert!(!state.is_dragging());
}

#[test]
fn dragging_exposes_session() {
    let state = InputState::Dragging(session("left"));
    assert!(state.is_dragging());
    let s = state.session().unwrap();
    assert_eq!(s.piece_id.as_str(), "left");
    assert_eq!(s.start_pointer, Point::new(10.0, 20.0));
    assert_eq!(s.start_rotation, 45.0);
}

#[test]
fn sessions_compare_by_value() {
    assert_eq!(session("left"), session("left"));
    assert_ne!(session("left"), session("right"));
}

#[test]
fn input_state_debug_format() {
    assert_eq!(format!("{:?}", InputState::Idle), "Idle");
    assert!(format!("{:?}", InputState::Dragging(session("left"))).starts_with("Dragging"));
}
