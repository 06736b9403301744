//! Shared constants for the puzzle crate.

// ── Layout ──────────────────────────────────────────────────────

/// Height-to-width ratio assumed for a piece whose config omits `aspect`.
pub const DEFAULT_PIECE_ASPECT: f64 = 1.0;

/// Stacking order of the piece layer above the background image.
pub const PIECE_LAYER_Z_INDEX: i32 = 10;

// ── Presentation ────────────────────────────────────────────────

/// Duration of the settle transition applied to a piece that is not being dragged.
pub const IDLE_TRANSITION_SECS: f64 = 0.1;

/// Cursor shown over a piece that can be picked up.
pub const CURSOR_IDLE: &str = "grab";

/// Cursor shown over the piece being dragged.
pub const CURSOR_DRAGGING: &str = "grabbing";
