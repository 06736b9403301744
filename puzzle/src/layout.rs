//! Layout seam: where is a piece on screen right now?
//!
//! Rotation needs the on-screen center of the piece being dragged. Only the
//! render layer knows that, so the engine asks through [`PieceBounds`]. The
//! browser host answers with `getBoundingClientRect`; [`StaticLayout`]
//! answers from the configured percentages and is what tests and any
//! non-browser host use.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::geom::Rect;
use crate::piece::{PieceId, PieceSet};

/// Supplies the current on-screen bounding rectangle of a piece.
pub trait PieceBounds {
    /// Bounding rectangle of `id` in viewport pixels, or `None` if the piece
    /// is not currently laid out.
    fn bounding_rect(&self, id: &PieceId) -> Option<Rect>;
}

/// Lays pieces out from their percentage placements inside a fixed stage.
pub struct StaticLayout<'a> {
    pieces: &'a PieceSet,
    stage: Rect,
}

impl<'a> StaticLayout<'a> {
    /// `stage` is the box the placement percentages are relative to.
    #[must_use]
    pub fn new(pieces: &'a PieceSet, stage: Rect) -> Self {
        Self { pieces, stage }
    }
}

impl PieceBounds for StaticLayout<'_> {
    fn bounding_rect(&self, id: &PieceId) -> Option<Rect> {
        let p = self.pieces.get(id.as_str())?.placement;
        let width = self.stage.width * p.width / 100.0;
        Some(Rect {
            left: self.stage.left + self.stage.width * p.left / 100.0,
            top: self.stage.top + self.stage.height * p.top / 100.0,
            width,
            height: width * p.aspect,
        })
    }
}
