//! Rotate-by-drag: the per-piece angle table and the drag session.
//!
//! The pointer's bearing from the piece's center is measured at pointer-down
//! and again on every move; the piece turns by exactly the difference. The
//! absolute angle is always rebuilt from the angle captured at pointer-down
//! plus the net sweep since then, never accumulated move by move, so a long
//! drag does not drift.
//!
//! Angles are stored as-is. Nothing wraps them into `[0, 360)`, so after many
//! drags a piece may sit at, say, `-1170°`. The renderer only cares about the
//! value modulo 360.
//!
//! A pointer at or very near the center produces a jumpy bearing. That is
//! accepted; the angle is still finite.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use std::collections::HashMap;

use crate::angle;
use crate::geom::Point;
use crate::input::{DragSession, InputState};
use crate::layout::PieceBounds;
use crate::piece::{PieceId, PieceSet};

/// Owns every piece's rotation and the single active drag session.
///
/// The angle table is only reachable through this type; nothing hands out a
/// mutable reference to it.
#[derive(Debug, Clone)]
pub struct RotationController {
    order: Vec<PieceId>,
    rotations: HashMap<PieceId, f64>,
    input: InputState,
}

impl RotationController {
    /// One entry per piece, all at 0°, idle.
    #[must_use]
    pub fn new(pieces: &PieceSet) -> Self {
        let order: Vec<PieceId> = pieces.ids().cloned().collect();
        let rotations = order.iter().map(|id| (id.clone(), 0.0)).collect();
        Self { order, rotations, input: InputState::Idle }
    }

    /// Start rotating `id` from `pointer`.
    ///
    /// Captures the pointer position and the piece's current angle. If a
    /// session is already active it is replaced: the previous piece keeps the
    /// angle it last reached.
    ///
    /// Returns `false` and leaves the state untouched if `id` is not a known
    /// piece.
    pub fn begin_drag(&mut self, id: &PieceId, pointer: Point) -> bool {
        let Some(&start_rotation) = self.rotations.get(id) else {
            log::warn!("begin_drag on unknown piece {id}");
            return false;
        };
        if let Some(prev) = self.input.session() {
            log::debug!("drag on {} replaced by {id}", prev.piece_id);
        }
        self.input = InputState::Dragging(DragSession {
            piece_id: id.clone(),
            start_pointer: pointer,
            start_rotation,
        });
        true
    }

    /// Rotate the active piece to follow `pointer`.
    ///
    /// No-op when idle, or when `layout` cannot place the active piece.
    /// Returns the piece's new angle in degrees when one was written.
    pub fn update_drag(&mut self, pointer: Point, layout: &impl PieceBounds) -> Option<f64> {
        let session = self.input.session()?;
        let center = layout.bounding_rect(&session.piece_id)?.center();
        let rotation = session.start_rotation + angle::swept_degrees(center, session.start_pointer, pointer);

        let slot = self.rotations.get_mut(&session.piece_id)?;
        *slot = rotation;
        Some(rotation)
    }

    /// End the active session, keeping the last computed angle.
    ///
    /// Returns the released piece, or `None` if nothing was being dragged.
    pub fn end_drag(&mut self) -> Option<PieceId> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => None,
            InputState::Dragging(session) => Some(session.piece_id),
        }
    }

    // --- Queries ---

    /// Current rotation of `id` in degrees.
    #[must_use]
    pub fn rotation(&self, id: &str) -> Option<f64> {
        self.rotations.get(id).copied()
    }

    /// The piece being dragged, if any.
    #[must_use]
    pub fn active_piece(&self) -> Option<&PieceId> {
        self.input.session().map(|s| &s.piece_id)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// The raw input state.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// All rotations, in piece declaration order.
    pub fn rotations(&self) -> impl Iterator<Item = (&PieceId, f64)> {
        self.order
            .iter()
            .filter_map(|id| self.rotations.get(id).map(|&deg| (id, deg)))
    }
}
