//! Single dispatch point from a move outcome to the presenters.

use crate::board::MoveRequest;
use crate::error::TransportError;
use crate::presenter::{ErrorPresenter, GameEndHandler};
use crate::renderer::{BoardRenderer, BoardUpdate};
use crate::response::{BoardPayload, MoveResponse};
use crate::surface::{PresentationSurface, Region};
use tracing::{info, instrument, warn};

/// What a resolved move attempt did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The server rejected the move; same player retries.
    Rejected {
        /// Rejection reason.
        message: String,
    },
    /// The board was updated and play continues.
    Updated {
        /// Whose turn is next, when reported.
        next_player: Option<String>,
    },
    /// The game ended; the board is frozen.
    GameOver {
        /// Winner marker.
        winner: String,
    },
    /// The request never produced a usable response.
    TransportFailed {
        /// User-facing failure text.
        message: String,
    },
}

/// Turns a payload into a renderer strategy for the given move.
pub fn board_update(request: &MoveRequest, payload: BoardPayload) -> BoardUpdate {
    match payload {
        BoardPayload::Snapshot(board) => BoardUpdate::Full(board),
        BoardPayload::Delta {
            from_glyph,
            to_glyph,
        } => BoardUpdate::Point {
            from: request.from.clone(),
            to: request.to.clone(),
            from_glyph,
            to_glyph,
        },
    }
}

/// Renders the outcome of `request` onto `surface`.
///
/// Exactly one branch runs per outcome.
#[instrument(skip(surface, outcome), fields(from = %request.from, to = %request.to))]
pub fn dispatch<S: PresentationSurface>(
    surface: &mut S,
    request: &MoveRequest,
    outcome: Result<MoveResponse, TransportError>,
) -> Resolution {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Move request failed");
            let message = format!("{}. Try the move again.", e.kind());
            ErrorPresenter::show(surface, &message);
            return Resolution::TransportFailed { message };
        }
    };

    match response {
        MoveResponse::ValidationError { message } => {
            info!(%message, "Move rejected");
            surface.set_text(Region::MoveInfo, "");
            ErrorPresenter::show(surface, &message);
            Resolution::Rejected { message }
        }
        MoveResponse::GameEnd { winner, board } => {
            let update = board.map(|payload| board_update(request, payload));
            GameEndHandler::finish(surface, &winner, update.as_ref());
            Resolution::GameOver { winner }
        }
        MoveResponse::BoardUpdate { next_player, board } => {
            ErrorPresenter::clear(surface);
            apply_update(surface, next_player.as_deref(), &BoardUpdate::Full(board));
            Resolution::Updated { next_player }
        }
        MoveResponse::PointUpdate {
            next_player,
            from_glyph,
            to_glyph,
        } => {
            ErrorPresenter::clear(surface);
            let update = BoardUpdate::Point {
                from: request.from.clone(),
                to: request.to.clone(),
                from_glyph,
                to_glyph,
            };
            apply_update(surface, next_player.as_deref(), &update);
            Resolution::Updated { next_player }
        }
    }
}

fn apply_update<S: PresentationSurface>(surface: &mut S, next_player: Option<&str>, update: &BoardUpdate) {
    if let Some(player) = next_player {
        surface.set_text(Region::CurrentPlayer, player);
    }
    BoardRenderer::apply(surface, update);
}
