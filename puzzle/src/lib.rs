//! Rotation engine for the "Puzzle 4" board.
//!
//! The board is a static background image with a handful of image fragments
//! laid over it. Each fragment can be spun around its own center by dragging
//! the mouse around it. This crate owns everything about that interaction that
//! does not need a browser: the piece catalog, the per-piece angle table, the
//! drag session, and the inline styles the host applies to each piece. The
//! Leptos host in `client/` only wires DOM events to [`engine::EngineCore`] and
//! answers the "where is this piece on screen" query.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event facade: [`engine::EngineCore`] and the [`engine::Action`]s it emits |
//! | [`rotation`] | [`rotation::RotationController`]: angle table and drag-to-rotate math |
//! | [`input`] | Drag session state machine |
//! | [`piece`] | Piece definitions, placements, and the closed [`piece::PieceSet`] |
//! | [`config`] | Board configuration (JSON) and the built-in board |
//! | [`layout`] | The [`layout::PieceBounds`] seam and a pure [`layout::StaticLayout`] |
//! | [`geom`] | Points and rectangles in viewport pixels |
//! | [`angle`] | Bearing and swept-angle helpers |
//! | [`style`] | Inline CSS for the stage, the piece layer, and each piece |
//! | [`consts`] | Shared constants (transition timing, defaults) |

pub mod angle;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod layout;
pub mod piece;
pub mod rotation;
pub mod style;
