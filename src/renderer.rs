//! Applies authority board data to the presentation surface.

use crate::board::{Board, Glyph, SquareId};
use crate::surface::PresentationSurface;
use tracing::{debug, instrument, warn};

/// Update strategy for the board cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardUpdate {
    /// Every supplied cell gets its glyph.
    Full(Board),
    /// Only the two squares of the completed move change.
    Point {
        /// Origin square.
        from: SquareId,
        /// Destination square.
        to: SquareId,
        /// New glyph for `from`.
        from_glyph: Glyph,
        /// New glyph for `to`.
        to_glyph: Glyph,
    },
}

/// Writes board data into a surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardRenderer;

impl BoardRenderer {
    /// Applies an update. Returns the number of cells written.
    ///
    /// Applying the same update twice leaves the surface unchanged.
    #[instrument(skip_all)]
    pub fn apply<S: PresentationSurface>(surface: &mut S, update: &BoardUpdate) -> usize {
        match update {
            BoardUpdate::Full(board) => {
                let written = board
                    .cells()
                    .filter(|(id, glyph)| Self::write(surface, id, glyph))
                    .count();
                debug!(written, total = board.len(), "Full board applied");
                written
            }
            BoardUpdate::Point {
                from,
                to,
                from_glyph,
                to_glyph,
            } => {
                let written = [(from, from_glyph), (to, to_glyph)]
                    .into_iter()
                    .filter(|(id, glyph)| Self::write(surface, id, glyph))
                    .count();
                debug!(%from, %to, written, "Point update applied");
                written
            }
        }
    }

    /// Strips interactivity from every square.
    #[instrument(skip_all)]
    pub fn freeze<S: PresentationSurface>(surface: &mut S) {
        let ids = surface.square_ids();
        for id in &ids {
            surface.set_interactive(id, false);
        }
        debug!(squares = ids.len(), "Board frozen");
    }

    fn write<S: PresentationSurface>(surface: &mut S, id: &SquareId, glyph: &Glyph) -> bool {
        let found = surface.set_glyph(id, glyph);
        if !found {
            warn!(%id, "Board data names a square the surface does not have");
        }
        found
    }
}
