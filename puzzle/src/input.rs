//! Input model: the drag session state machine.
//!
//! There is one pointer and so at most one gesture. `InputState` is either
//! idle or carrying the context captured at pointer-down that every
//! subsequent pointer-move needs to compute the piece's new angle.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::piece::PieceId;

/// Context captured when a piece is picked up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Piece being rotated.
    pub piece_id: PieceId,
    /// Pointer position at pointer-down, in viewport pixels.
    pub start_pointer: Point,
    /// Rotation of the piece at pointer-down, in degrees.
    pub start_rotation: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A piece is being rotated.
    Dragging(DragSession),
}

impl InputState {
    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
