//! Strictly Moves - move-selection client for server-authoritative board games
//!
//! Players pick a square to move from and a square to move to; the pair is
//! sent to a remote move authority, which decides everything. The client
//! only renders what comes back.
//!
//! # Architecture
//!
//! - **SelectionController**: idle / from-selected / in-flight state machine
//! - **MoveRequester**: sends moves to a [`MoveAuthority`] (HTTP in practice)
//! - **Response handling**: one dispatch point for rejections, updates, game end and transport failures
//! - **BoardRenderer**: full-board sync or point update onto a [`PresentationSurface`]
//!
//! # Example
//!
//! ```no_run
//! use strictly_moves::{BoardSurface, ClientConfig, HttpMoveAuthority, MoveRequester, SelectionController};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::default();
//! let authority = HttpMoveAuthority::from_config(&config)?;
//! let surface = BoardSurface::from_layout(vec![vec!["a1".into(), "a2".into()]]);
//! let mut controller = SelectionController::new(MoveRequester::new(authority), surface);
//!
//! controller.click("a1".into()).await;
//! let resolution = controller.click("a2".into()).await;
//! println!("{:?}", resolution);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod authority;
mod board;
mod config;
mod controller;
mod error;
mod handler;
mod presenter;
mod renderer;
mod requester;
mod response;
mod surface;

// Crate-level exports - Board types
pub use board::{Board, BoardRow, Glyph, MoveRequest, SquareId};

// Crate-level exports - Move authority
pub use authority::{HttpMoveAuthority, MoveAuthority};
pub use requester::MoveRequester;
pub use response::{BoardPayload, BoardState, MoveResponse, RawMoveResponse};

// Crate-level exports - Selection and rendering
pub use controller::{Activation, IgnoreReason, SelectionController, SelectionState};
pub use handler::{Resolution, board_update, dispatch};
pub use presenter::{ErrorPresenter, GameEndHandler};
pub use renderer::{BoardRenderer, BoardUpdate};
pub use surface::{BoardSurface, PresentationSurface, Region, Square};

// Crate-level exports - Configuration and errors
pub use config::{ClientConfig, ConfigError};
pub use error::{TransportError, TransportErrorKind};
