//! Error and game-end presentation.

use crate::renderer::{BoardRenderer, BoardUpdate};
use crate::surface::{PresentationSurface, Region};
use tracing::{info, instrument};

/// Shows and clears the error region.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorPresenter;

impl ErrorPresenter {
    /// Displays a message in the error region.
    #[instrument(skip(surface))]
    pub fn show<S: PresentationSurface>(surface: &mut S, message: &str) {
        surface.set_text(Region::Error, message);
    }

    /// Empties the error region.
    pub fn clear<S: PresentationSurface>(surface: &mut S) {
        surface.set_text(Region::Error, "");
    }
}

/// Renders a terminal result and makes the board read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEndHandler;

impl GameEndHandler {
    /// Text shown in the winner region.
    pub fn announcement(winner: &str) -> String {
        format!("{} wins!!! Refresh to play again.", winner)
    }

    /// Renders the final board (if any), announces the winner, freezes.
    #[instrument(skip(surface, update))]
    pub fn finish<S: PresentationSurface>(surface: &mut S, winner: &str, update: Option<&BoardUpdate>) {
        info!("Game over");
        if let Some(update) = update {
            BoardRenderer::apply(surface, update);
        }
        ErrorPresenter::clear(surface);
        surface.set_text(Region::Winner, &Self::announcement(winner));
        BoardRenderer::freeze(surface);
    }
}
