//! Transport error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong between the client and the move authority.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TransportErrorKind {
    /// The request could not be sent or the body could not be read.
    #[display("Could not reach the game server ({})", _0)]
    Request(String),
    /// The request exceeded the configured timeout.
    #[display("The game server did not answer in time")]
    Timeout,
    /// The server answered with a non-success status.
    #[display("The game server answered with HTTP {}", _0)]
    Status(u16),
    /// The body was not a recognizable move response.
    #[display("The game server sent an unreadable response ({})", _0)]
    Malformed(String),
}

/// Failure to obtain a classified response from the move authority.
#[derive(Debug, Clone, Display, Error)]
#[display("Transport error: {} at {}:{}", kind, file, line)]
pub struct TransportError {
    /// Failure category, also the user-facing text.
    pub kind: TransportErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: TransportErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a malformed response.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Malformed(message.into()))
    }

    /// Failure category.
    pub fn kind(&self) -> &TransportErrorKind {
        &self.kind
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(TransportErrorKind::Timeout)
        } else if let Some(status) = err.status() {
            Self::new(TransportErrorKind::Status(status.as_u16()))
        } else {
            Self::new(TransportErrorKind::Request(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for TransportError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
