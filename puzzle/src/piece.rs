//! Piece definitions and the closed catalog that owns them.
//!
//! Pieces are static: they come from the board configuration at startup and
//! are never mutated afterwards. Their rotation lives in
//! [`crate::rotation::RotationController`], not here.

#[cfg(test)]
#[path = "piece_test.rs"]
mod piece_test;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::DEFAULT_PIECE_ASPECT;

/// Unique identifier for a piece (e.g. `"topLeft"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(String);

impl PieceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PieceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Borrow<str> for PieceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Where a piece sits on the stage, in percent of the stage box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Rendered width as a percentage of the stage width.
    pub width: f64,
    /// Offset of the top edge as a percentage of the stage height.
    pub top: f64,
    /// Offset of the left edge as a percentage of the stage width.
    pub left: f64,
    /// Height divided by width of the piece image.
    #[serde(default = "default_aspect")]
    pub aspect: f64,
}

fn default_aspect() -> f64 {
    DEFAULT_PIECE_ASPECT
}

/// One draggable, rotatable image fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    /// Image URL.
    pub src: String,
    /// Alternate text for the image.
    pub alt: String,
    #[serde(flatten)]
    pub placement: Placement,
}

/// The closed, ordered set of pieces on the board.
///
/// Declaration order is render order. Ids are unique.
#[derive(Debug, Clone)]
pub struct PieceSet {
    pieces: Vec<Piece>,
    index: HashMap<PieceId, usize>,
}

impl PieceSet {
    /// Build a catalog, rejecting empty sets, blank or repeated ids, and
    /// placements that cannot be laid out.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in declaration order.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, ConfigError> {
        if pieces.is_empty() {
            return Err(ConfigError::NoPieces);
        }

        let mut index = HashMap::with_capacity(pieces.len());
        for (pos, piece) in pieces.iter().enumerate() {
            if piece.id.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyId { position: pos });
            }
            validate_placement(piece)?;
            if index.insert(piece.id.clone(), pos).is_some() {
                return Err(ConfigError::DuplicatePiece { id: piece.id.to_string() });
            }
        }

        Ok(Self { pieces, index })
    }

    /// Look up a piece by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Piece> {
        self.index.get(id).and_then(|&pos| self.pieces.get(pos))
    }

    /// Pieces in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Piece ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &PieceId> {
        self.pieces.iter().map(|p| &p.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

fn validate_placement(piece: &Piece) -> Result<(), ConfigError> {
    let p = &piece.placement;
    let invalid = |field: &'static str, value: f64| ConfigError::InvalidPlacement {
        id: piece.id.to_string(),
        field,
        value,
    };

    if !p.width.is_finite() || p.width <= 0.0 {
        return Err(invalid("width", p.width));
    }
    if !p.top.is_finite() {
        return Err(invalid("top", p.top));
    }
    if !p.left.is_finite() {
        return Err(invalid("left", p.left));
    }
    if !p.aspect.is_finite() || p.aspect <= 0.0 {
        return Err(invalid("aspect", p.aspect));
    }
    Ok(())
}
