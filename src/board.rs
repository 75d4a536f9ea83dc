//! Board, square and move request types shared by every component.

use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a board cell.
///
/// The client never interprets it; it is echoed to the server verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareId(String);

impl SquareId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SquareId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Textual representation of a piece or an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glyph(String);

impl Glyph {
    /// Returns the glyph text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Glyph {
    fn from(glyph: &str) -> Self {
        Self(glyph.to_string())
    }
}

/// One row of a board snapshot.
pub type BoardRow = Vec<(SquareId, Glyph)>;

/// Authoritative board snapshot: ordered rows of `(id, glyph)` cells.
///
/// Serialized as `[[["a8", "R"], ["b8", "N"], ...], ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<BoardRow>,
}

impl Board {
    /// Creates a board from its rows.
    pub fn new(rows: Vec<BoardRow>) -> Self {
        Self { rows }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    /// Iterates every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &(SquareId, Glyph)> {
        self.rows.iter().flatten()
    }

    /// Number of cells in the snapshot.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// True when the snapshot holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A proposed move, sent to the move authority as two opaque ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("{} → {}", from, to)]
pub struct MoveRequest {
    /// Square the move starts from.
    pub from: SquareId,
    /// Square the move ends on.
    pub to: SquareId,
}
