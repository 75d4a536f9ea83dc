//! Move authority response: wire shape and classification.

use crate::board::{Board, Glyph};
use crate::error::TransportError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Response body exactly as the move authority sends it.
///
/// All fields are optional; [`RawMoveResponse::classify`] decides which
/// variant of [`MoveResponse`] the body represents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMoveResponse {
    /// Validation failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
    /// Set when the game is over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Whose turn follows a successful move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_player: Option<String>,
    /// Full board snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
    /// Glyph for the origin square (point-update protocol).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_image: Option<Glyph>,
    /// Glyph for the destination square (point-update protocol).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_image: Option<Glyph>,
}

/// Board data carried by a successful or terminal response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardPayload {
    /// Full board snapshot.
    Snapshot(Board),
    /// Only the two squares of the completed move.
    Delta {
        /// New glyph of the origin square.
        from_glyph: Glyph,
        /// New glyph of the destination square.
        to_glyph: Glyph,
    },
}

/// Classified move authority response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResponse {
    /// The server rejected the move.
    ValidationError {
        /// Reason shown to the player.
        message: String,
    },
    /// The move ended the game.
    GameEnd {
        /// Winner marker as sent by the server.
        winner: String,
        /// Final board, when the server supplied one.
        board: Option<BoardPayload>,
    },
    /// The move succeeded; full snapshot follows.
    BoardUpdate {
        /// Whose turn is next.
        next_player: Option<String>,
        /// New board.
        board: Board,
    },
    /// The move succeeded; only the two moved squares changed.
    PointUpdate {
        /// Whose turn is next.
        next_player: Option<String>,
        /// New glyph of the origin square.
        from_glyph: Glyph,
        /// New glyph of the destination square.
        to_glyph: Glyph,
    },
}

impl RawMoveResponse {
    /// Parses a JSON body.
    #[instrument(skip(body), fields(len = body.len()))]
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        let raw: Self = serde_json::from_str(body)?;
        debug!(?raw, "Parsed move response");
        Ok(raw)
    }

    /// Board payload, preferring a full snapshot over a delta.
    fn payload(self) -> Option<BoardPayload> {
        match (self.board, self.from_image, self.to_image) {
            (Some(board), _, _) => Some(BoardPayload::Snapshot(board)),
            (None, Some(from_glyph), Some(to_glyph)) => Some(BoardPayload::Delta {
                from_glyph,
                to_glyph,
            }),
            _ => None,
        }
    }

    /// Classifies the body. First match wins: non-empty `err`, then
    /// `winner`, then a normal update.
    ///
    /// A normal update with neither `board` nor both point-update images is
    /// malformed.
    #[instrument(skip(self))]
    pub fn classify(self) -> Result<MoveResponse, TransportError> {
        if let Some(message) = self.err.as_ref().filter(|m| !m.is_empty()) {
            return Ok(MoveResponse::ValidationError {
                message: message.clone(),
            });
        }

        if let Some(winner) = self.winner.clone() {
            return Ok(MoveResponse::GameEnd {
                winner,
                board: self.payload(),
            });
        }

        let next_player = self.next_player.clone();
        match self.payload() {
            Some(BoardPayload::Snapshot(board)) => Ok(MoveResponse::BoardUpdate { next_player, board }),
            Some(BoardPayload::Delta {
                from_glyph,
                to_glyph,
            }) => Ok(MoveResponse::PointUpdate {
                next_player,
                from_glyph,
                to_glyph,
            }),
            None => Err(TransportError::malformed(
                "response carried neither an error, a winner nor board data",
            )),
        }
    }
}

impl MoveResponse {
    /// Parses and classifies a JSON body in one step.
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        RawMoveResponse::from_json(body)?.classify()
    }

    /// True for a rejected move.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

/// Board snapshot served by the authority outside of a move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Current board.
    pub board: Board,
    /// Whose turn it is, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_player: Option<String>,
    /// Set when the game is already over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}
