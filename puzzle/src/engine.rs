use crate::config::{Background, BoardConfig};
use crate::geom::Point;
use crate::layout::PieceBounds;
use crate::piece::{PieceId, PieceSet};
use crate::rotation::RotationController;
use crate::style::PieceStyle;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A drag session began on `id`. The host starts listening for
    /// document-level pointer moves and releases.
    DragStarted { id: PieceId },
    /// `id` now sits at `degrees`.
    RotationChanged { id: PieceId, degrees: f64 },
    /// The session on `id` ended at `degrees`. The host stops listening.
    DragEnded { id: PieceId, degrees: f64 },
}

/// Board state and the pointer handlers that drive it.
///
/// Holds no browser handles, so the whole interaction runs under plain
/// `cargo test`.
#[derive(Debug, Clone)]
pub struct EngineCore {
    config: BoardConfig,
    controller: RotationController,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let controller = RotationController::new(&config.pieces);
        Self { config, controller }
    }

    // --- Input events ---

    /// Pointer pressed on piece `id`.
    pub fn on_pointer_down(&mut self, id: &PieceId, screen_pt: Point) -> Vec<Action> {
        if !self.controller.begin_drag(id, screen_pt) {
            return Vec::new();
        }
        log::debug!("drag start {id} at ({:.1}, {:.1})", screen_pt.x, screen_pt.y);
        vec![Action::DragStarted { id: id.clone() }]
    }

    /// Pointer moved anywhere on the page.
    pub fn on_pointer_move(&mut self, screen_pt: Point, layout: &impl PieceBounds) -> Vec<Action> {
        let Some(degrees) = self.controller.update_drag(screen_pt, layout) else {
            return Vec::new();
        };
        let Some(id) = self.controller.active_piece() else {
            return Vec::new();
        };
        vec![Action::RotationChanged { id: id.clone(), degrees }]
    }

    /// Pointer released anywhere on the page.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let Some(id) = self.controller.end_drag() else {
            return Vec::new();
        };
        let degrees = self.controller.rotation(id.as_str()).unwrap_or_default();
        log::debug!("drag end {id} at {degrees:.2}deg");
        vec![Action::DragEnded { id, degrees }]
    }

    // --- Queries ---

    #[must_use]
    pub fn controller(&self) -> &RotationController {
        &self.controller
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    #[must_use]
    pub fn background(&self) -> &Background {
        &self.config.background
    }

    #[must_use]
    pub fn pieces(&self) -> &PieceSet {
        &self.config.pieces
    }

    /// Current rotation of `id` in degrees.
    #[must_use]
    pub fn rotation(&self, id: &PieceId) -> Option<f64> {
        self.controller.rotation(id.as_str())
    }

    /// The piece being dragged, if any.
    #[must_use]
    pub fn active_piece(&self) -> Option<&PieceId> {
        self.controller.active_piece()
    }

    /// Inline style for `id` given the current rotation and drag state.
    #[must_use]
    pub fn piece_style(&self, id: &PieceId) -> Option<PieceStyle> {
        let piece = self.config.pieces.get(id.as_str())?;
        Some(PieceStyle {
            placement: piece.placement,
            rotation: self.rotation(id)?,
            dragging: self.active_piece() == Some(id),
        })
    }
}
