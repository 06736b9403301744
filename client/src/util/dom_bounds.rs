//! Piece bounds measured from the live DOM.

use std::collections::HashMap;

use leptos::prelude::*;

use puzzle::geom::Rect;
use puzzle::layout::PieceBounds;
use puzzle::piece::PieceId;

/// Answers the engine's "where is this piece" query with
/// `getBoundingClientRect()` of the piece's `<img>`.
///
/// The rectangle already accounts for the CSS rotation, scrolling, and any
/// reflow since the drag began.
#[derive(Clone, Default)]
pub struct DomBounds {
    refs: HashMap<PieceId, NodeRef<leptos::html::Img>>,
}

impl DomBounds {
    pub fn new(refs: HashMap<PieceId, NodeRef<leptos::html::Img>>) -> Self {
        Self { refs }
    }
}

impl PieceBounds for DomBounds {
    fn bounding_rect(&self, id: &PieceId) -> Option<Rect> {
        let element = self.refs.get(id)?.get_untracked()?;
        let rect = element.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }
}
