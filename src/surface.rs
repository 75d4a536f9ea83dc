//! Presentation surface: the cells and text regions the client writes into.

use crate::board::{Board, Glyph, SquareId};
use derive_getters::Getters;
use std::collections::HashMap;
use strum::Display;
use tracing::{debug, instrument};

/// Named text regions of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Region {
    /// Progress of the current move.
    #[strum(to_string = "move info")]
    MoveInfo,
    /// Validation or transport failure text.
    #[strum(to_string = "error")]
    Error,
    /// Terminal result text.
    #[strum(to_string = "winner")]
    Winner,
    /// Whose turn it is.
    #[strum(to_string = "current player")]
    CurrentPlayer,
}

/// Write target for everything the client renders.
///
/// Cells are addressed by [`SquareId`]. Writes to ids the surface does not
/// know return `false` and change nothing.
pub trait PresentationSurface {
    /// Sets the displayed glyph of a square.
    fn set_glyph(&mut self, id: &SquareId, glyph: &Glyph) -> bool;

    /// Enables or disables activation of a square.
    fn set_interactive(&mut self, id: &SquareId, interactive: bool) -> bool;

    /// Marks or unmarks a square as the selected origin.
    fn set_selected(&mut self, id: &SquareId, selected: bool) -> bool;

    /// Replaces the text of a region.
    fn set_text(&mut self, region: Region, text: &str);

    /// Every addressable square, in display order.
    fn square_ids(&self) -> Vec<SquareId>;
}

/// A single addressable cell.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Square {
    /// Cell identity.
    id: SquareId,
    /// Displayed glyph.
    glyph: Glyph,
    /// Whether activations are accepted.
    interactive: bool,
    /// Whether the cell is marked as the selected origin.
    selected: bool,
}

impl Square {
    /// Creates an interactive, unselected square.
    pub fn new(id: SquareId, glyph: Glyph) -> Self {
        Self {
            id,
            glyph,
            interactive: true,
            selected: false,
        }
    }
}

/// In-memory surface holding a grid of squares and the text regions.
#[derive(Debug, Clone, Default)]
pub struct BoardSurface {
    rows: Vec<Vec<Square>>,
    index: HashMap<SquareId, (usize, usize)>,
    texts: HashMap<Region, String>,
}

impl BoardSurface {
    /// Builds a surface with one interactive cell per id and empty glyphs.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_layout(rows: Vec<Vec<SquareId>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|id| Square::new(id, Glyph::default()))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Builds a surface whose layout and glyphs come from a board snapshot.
    #[instrument(skip(board), fields(cells = board.len()))]
    pub fn from_board(board: &Board) -> Self {
        let rows = board
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(id, glyph)| Square::new(id.clone(), glyph.clone()))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    fn from_rows(rows: Vec<Vec<Square>>) -> Self {
        let mut index = HashMap::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                index.insert(square.id.clone(), (r, c));
            }
        }
        debug!(squares = index.len(), "Surface built");
        Self {
            rows,
            index,
            texts: HashMap::new(),
        }
    }

    /// Rows of squares in display order.
    pub fn rows(&self) -> &[Vec<Square>] {
        &self.rows
    }

    /// Looks up a square by id.
    pub fn square(&self, id: &SquareId) -> Option<&Square> {
        self.index.get(id).map(|&(r, c)| &self.rows[r][c])
    }

    /// Current text of a region; empty when never written.
    pub fn text(&self, region: Region) -> &str {
        self.texts.get(&region).map(String::as_str).unwrap_or("")
    }

    fn square_mut(&mut self, id: &SquareId) -> Option<&mut Square> {
        let &(r, c) = self.index.get(id)?;
        Some(&mut self.rows[r][c])
    }
}

impl PresentationSurface for BoardSurface {
    fn set_glyph(&mut self, id: &SquareId, glyph: &Glyph) -> bool {
        match self.square_mut(id) {
            Some(square) => {
                square.glyph = glyph.clone();
                true
            }
            None => false,
        }
    }

    fn set_interactive(&mut self, id: &SquareId, interactive: bool) -> bool {
        match self.square_mut(id) {
            Some(square) => {
                square.interactive = interactive;
                true
            }
            None => false,
        }
    }

    fn set_selected(&mut self, id: &SquareId, selected: bool) -> bool {
        match self.square_mut(id) {
            Some(square) => {
                square.selected = selected;
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, region: Region, text: &str) {
        debug!(%region, text, "Region updated");
        self.texts.insert(region, text.to_string());
    }

    fn square_ids(&self) -> Vec<SquareId> {
        self.rows.iter().flatten().map(|s| s.id.clone()).collect()
    }
}
