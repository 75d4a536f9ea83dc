//! Application state and logic.

use super::input::{Cursor, move_cursor};
use crossterm::event::KeyCode;
use strictly_moves::{
    Activation, BoardSurface, MoveAuthority, MoveRequest, MoveResponse, MoveRequester,
    Resolution, SelectionController, SquareId, TransportError,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// A move answer travelling back from a request task.
pub type MoveOutcome = (MoveRequest, Result<MoveResponse, TransportError>);

/// Main application state.
pub struct App<A> {
    controller: SelectionController<A, BoardSurface>,
    cursor: Cursor,
    outcome_tx: mpsc::UnboundedSender<MoveOutcome>,
    status_message: String,
}

impl<A: MoveAuthority + 'static> App<A> {
    /// Creates a new application.
    pub fn new(
        requester: MoveRequester<A>,
        surface: BoardSurface,
        outcome_tx: mpsc::UnboundedSender<MoveOutcome>,
    ) -> Self {
        Self {
            controller: SelectionController::new(requester, surface),
            cursor: Cursor::default(),
            outcome_tx,
            status_message: "Pick a square to move from.".to_string(),
        }
    }

    /// The rendered surface.
    pub fn surface(&self) -> &BoardSurface {
        self.controller.surface()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Ends the session without a move.
    pub fn end_game(&mut self, winner: &str) {
        self.controller.end_game(winner);
        self.status_message = "Game over. Press 'q' to quit.".to_string();
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        let lengths: Vec<usize> = self.surface().rows().iter().map(Vec::len).collect();
        self.cursor = move_cursor(self.cursor, key, &lengths);
    }

    fn cursor_id(&self) -> Option<SquareId> {
        self.surface()
            .rows()
            .get(self.cursor.row)
            .and_then(|row| row.get(self.cursor.col))
            .map(|square| square.id().clone())
    }

    /// Activates the square under the cursor.
    pub fn activate(&mut self) {
        let Some(id) = self.cursor_id() else {
            return;
        };
        if self.surface().square(&id).is_some_and(|s| !*s.interactive()) {
            debug!(%id, "Square is not interactive");
            return;
        }

        match self.controller.activate(id) {
            Activation::Selected(id) => {
                self.status_message = format!("Moving from {}. Pick the destination.", id);
            }
            Activation::Dispatch(request) => self.spawn_request(request),
            Activation::Ignored(reason) => {
                debug!(?reason, "Activation ignored");
            }
        }
    }

    /// Re-sends the last move that failed to reach the server.
    pub fn retry(&mut self) {
        if let Some(request) = self.controller.retry() {
            self.spawn_request(request);
        }
    }

    fn spawn_request(&mut self, request: MoveRequest) {
        info!(from = %request.from, to = %request.to, "Spawning move request");
        self.status_message = format!("Waiting for the server to judge {}...", request);

        let requester = self.controller.requester().clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = requester.attempt_move(&request).await;
            let _ = tx.send((request, outcome));
        });
    }

    /// Renders a move answer received from a request task.
    pub fn handle_outcome(&mut self, (request, outcome): MoveOutcome) {
        let resolution = self.controller.resolve(&request, outcome);
        self.status_message = match resolution {
            Resolution::Rejected { .. } => "Move rejected. Pick a square to move from.".to_string(),
            Resolution::Updated { .. } => "Pick a square to move from.".to_string(),
            Resolution::GameOver { .. } => "Game over. Press 'q' to quit.".to_string(),
            Resolution::TransportFailed { .. } => {
                "Press 'r' to retry, or pick a new move.".to_string()
            }
        };
    }
}
