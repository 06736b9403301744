//! Board configuration: the title, the background image, and the pieces.
//!
//! The configuration is a small JSON document. The board that ships with the
//! app is embedded at compile time and exposed as [`BoardConfig::builtin`].
//! Parsing validates the piece set, so a `BoardConfig` in hand always has a
//! non-empty catalog with unique ids.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::piece::{Piece, PieceSet};

/// JSON for the built-in "Puzzle 4" board.
pub const BUILTIN_BOARD_JSON: &str = include_str!("../assets/puzzle4.json");

/// Errors raised while loading a board configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("board config has no pieces")]
    NoPieces,
    #[error("piece at position {position} has an empty id")]
    EmptyId { position: usize },
    #[error("duplicate piece id: {id}")]
    DuplicatePiece { id: String },
    #[error("piece {id}: invalid {field} ({value})")]
    InvalidPlacement { id: String, field: &'static str, value: f64 },
}

/// The image the pieces are laid over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub src: String,
    pub alt: String,
}

/// Wire shape of the configuration before the piece set is validated.
#[derive(Debug, Deserialize)]
struct RawBoardConfig {
    title: String,
    background: Background,
    pieces: Vec<Piece>,
}

/// A validated board configuration.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub title: String,
    pub background: Background,
    pub pieces: PieceSet,
}

impl BoardConfig {
    /// Parse and validate a board configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or missing fields, and
    /// the matching [`ConfigError`] variant when the piece set is invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawBoardConfig = serde_json::from_str(json)?;
        let pieces = PieceSet::new(raw.pieces)?;
        log::debug!("board config loaded: {} ({} pieces)", raw.title, pieces.len());
        Ok(Self { title: raw.title, background: raw.background, pieces })
    }

    /// The board that ships with the app.
    ///
    /// # Errors
    ///
    /// Only if the embedded JSON is invalid, which the test suite rules out.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_BOARD_JSON)
    }
}
