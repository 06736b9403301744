//! Inline styles for the board.
//!
//! The board is plain HTML: a positioned stage, a background `<img>`, and a
//! full-size layer holding one absolutely positioned `<img>` per piece. A
//! piece's rotation reaches the screen as a CSS `rotate()` transform about its
//! center. This module turns engine state into those style strings; it never
//! mutates anything.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::consts::{CURSOR_DRAGGING, CURSOR_IDLE, IDLE_TRANSITION_SECS, PIECE_LAYER_Z_INDEX};
use crate::piece::Placement;

/// Stage wrapper: the positioned box that piece percentages are relative to.
pub const STAGE_STYLE: &str = "margin: 20px 0; max-width: 80%; position: relative;";

/// Background image inside the stage.
pub const BACKGROUND_STYLE: &str =
    "display: block; max-width: 100%; border-radius: 8px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);";

/// Full-size layer that holds the pieces above the background.
#[must_use]
pub fn piece_layer_style() -> String {
    format!("position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: {PIECE_LAYER_Z_INDEX};")
}

/// Everything needed to style one piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceStyle {
    pub placement: Placement,
    /// Rotation in degrees, unnormalized.
    pub rotation: f64,
    /// Whether this piece is the one being dragged.
    pub dragging: bool,
}

impl PieceStyle {
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if self.dragging { CURSOR_DRAGGING } else { CURSOR_IDLE }
    }

    /// No easing while the pointer drives the angle; a short settle otherwise.
    #[must_use]
    pub fn transition(&self) -> String {
        if self.dragging {
            "none".to_owned()
        } else {
            format!("transform {IDLE_TRANSITION_SECS}s ease-out")
        }
    }

    #[must_use]
    pub fn transform(&self) -> String {
        format!("rotate({}deg)", self.rotation)
    }

    /// The full inline `style` attribute.
    #[must_use]
    pub fn to_css(&self) -> String {
        let p = &self.placement;
        format!(
            "position: absolute; width: {}%; top: {}%; left: {}%; transform: {}; \
             transform-origin: center center; cursor: {}; transition: {};",
            p.width,
            p.top,
            p.left,
            self.transform(),
            self.cursor(),
            self.transition(),
        )
    }
}
