//! Selection state machine: turns square activations into move requests.

use crate::authority::MoveAuthority;
use crate::board::{MoveRequest, SquareId};
use crate::error::TransportError;
use crate::handler::{self, Resolution};
use crate::presenter::{ErrorPresenter, GameEndHandler};
use crate::requester::MoveRequester;
use crate::response::MoveResponse;
use crate::surface::{PresentationSurface, Region};
use tracing::{debug, info, instrument, warn};

/// Progress toward the next move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected.
    #[default]
    Idle,
    /// Origin chosen, waiting for the destination.
    FromSelected {
        /// Origin square.
        from: SquareId,
    },
    /// Request sent, waiting for the authority.
    InFlight {
        /// Origin square.
        from: SquareId,
        /// Destination square.
        to: SquareId,
    },
}

impl SelectionState {
    /// Origin square; `None` exactly when idle.
    pub fn from_id(&self) -> Option<&SquareId> {
        match self {
            Self::Idle => None,
            Self::FromSelected { from } | Self::InFlight { from, .. } => Some(from),
        }
    }

    /// Destination square, only set while a request is outstanding.
    pub fn to_id(&self) -> Option<&SquareId> {
        match self {
            Self::InFlight { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Why an activation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A move request is still outstanding.
    Busy,
    /// The game has ended.
    GameOver,
}

/// Result of a single activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The square became the selected origin.
    Selected(SquareId),
    /// A move is ready to send; the caller must resolve it.
    Dispatch(MoveRequest),
    /// Nothing happened.
    Ignored(IgnoreReason),
}

/// Owns the selection state and drives the presenters.
#[derive(Debug)]
pub struct SelectionController<A, S> {
    requester: MoveRequester<A>,
    surface: S,
    selection: SelectionState,
    game_over: bool,
    failed: Option<MoveRequest>,
}

impl<A: MoveAuthority, S: PresentationSurface> SelectionController<A, S> {
    /// Creates an idle controller.
    pub fn new(requester: MoveRequester<A>, surface: S) -> Self {
        Self {
            requester,
            surface,
            selection: SelectionState::Idle,
            game_over: false,
            failed: None,
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The surface being rendered into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Requester used for dispatched moves.
    pub fn requester(&self) -> &MoveRequester<A> {
        &self.requester
    }

    /// True once a game-ending response was rendered.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The last request that failed in transport, if any.
    pub fn failed_request(&self) -> Option<&MoveRequest> {
        self.failed.as_ref()
    }

    /// Finishes the session without a move, e.g. when the initial board
    /// already carries a winner. Announces `winner` and freezes the surface.
    #[instrument(skip(self))]
    pub fn end_game(&mut self, winner: &str) {
        if let Some(from) = self.selection.from_id() {
            self.surface.set_selected(from, false);
        }
        GameEndHandler::finish(&mut self.surface, winner, None);
        self.game_over = true;
        self.failed = None;
        self.selection = SelectionState::Idle;
    }

    /// Handles one square activation.
    ///
    /// A returned [`Activation::Dispatch`] puts the controller in flight
    /// until [`SelectionController::resolve`] is called.
    #[instrument(skip(self), fields(state = ?self.selection))]
    pub fn activate(&mut self, id: SquareId) -> Activation {
        if self.game_over {
            debug!("Activation after game end ignored");
            return Activation::Ignored(IgnoreReason::GameOver);
        }

        match std::mem::take(&mut self.selection) {
            SelectionState::Idle => {
                self.surface.set_selected(&id, true);
                self.surface.set_text(Region::MoveInfo, &format!("{} selected", id));
                self.selection = SelectionState::FromSelected { from: id.clone() };
                Activation::Selected(id)
            }
            SelectionState::FromSelected { from } => {
                self.surface.set_selected(&from, false);
                let request = MoveRequest::new(from, id);
                Activation::Dispatch(self.begin(request))
            }
            in_flight @ SelectionState::InFlight { .. } => {
                warn!("Activation while a move is in flight ignored");
                self.selection = in_flight;
                Activation::Ignored(IgnoreReason::Busy)
            }
        }
    }

    fn begin(&mut self, request: MoveRequest) -> MoveRequest {
        info!(from = %request.from, to = %request.to, "Dispatching move");
        ErrorPresenter::clear(&mut self.surface);
        self.surface.set_text(Region::MoveInfo, &request.to_string());
        self.failed = None;
        self.selection = SelectionState::InFlight {
            from: request.from.clone(),
            to: request.to.clone(),
        };
        request
    }

    /// Renders the outcome of a dispatched request and returns to idle.
    #[instrument(skip(self, outcome), fields(from = %request.from, to = %request.to))]
    pub fn resolve(
        &mut self,
        request: &MoveRequest,
        outcome: Result<MoveResponse, TransportError>,
    ) -> Resolution {
        let resolution = handler::dispatch(&mut self.surface, request, outcome);
        match &resolution {
            Resolution::GameOver { .. } => self.game_over = true,
            Resolution::TransportFailed { .. } => self.failed = Some(request.clone()),
            Resolution::Rejected { .. } | Resolution::Updated { .. } => {}
        }
        self.selection = SelectionState::Idle;
        debug!(?resolution, "Move resolved");
        resolution
    }

    /// Re-dispatches the last request that failed in transport.
    #[instrument(skip(self))]
    pub fn retry(&mut self) -> Option<MoveRequest> {
        if self.game_over || self.selection != SelectionState::Idle {
            return None;
        }
        let request = self.failed.take()?;
        info!(from = %request.from, to = %request.to, "Retrying failed move");
        Some(self.begin(request))
    }

    /// Activates `id` and, when that completes a move, sends it and renders
    /// the answer before returning.
    pub async fn click(&mut self, id: SquareId) -> Option<Resolution> {
        match self.activate(id) {
            Activation::Dispatch(request) => Some(self.play(request).await),
            Activation::Selected(_) | Activation::Ignored(_) => None,
        }
    }

    /// Sends an already dispatched request and renders the answer.
    pub async fn play(&mut self, request: MoveRequest) -> Resolution {
        let outcome = self.requester.attempt_move(&request).await;
        self.resolve(&request, outcome)
    }
}
