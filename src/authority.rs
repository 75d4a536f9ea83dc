//! Move authority: the remote service that validates and resolves moves.

use crate::board::MoveRequest;
use crate::config::{ClientConfig, ConfigError};
use crate::error::{TransportError, TransportErrorKind};
use crate::response::{BoardState, MoveResponse};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Something that can judge a proposed move.
#[async_trait::async_trait]
pub trait MoveAuthority: Send + Sync {
    /// Submits a move and returns the classified response.
    async fn submit(&self, request: &MoveRequest) -> Result<MoveResponse, TransportError>;

    /// Fetches the current board, used to build the surface at start-up.
    async fn board(&self) -> Result<BoardState, TransportError>;
}

/// Move authority reached over HTTP.
///
/// Moves are sent as `GET <move_url>?from=<id>&to=<id>`; endpoint paths are
/// resolved relative to the server URL the way a browser resolves a
/// relative link.
#[derive(Debug, Clone)]
pub struct HttpMoveAuthority {
    client: reqwest::Client,
    move_url: Url,
    board_url: Url,
}

impl HttpMoveAuthority {
    /// Creates an HTTP authority from client configuration.
    #[instrument(skip(config), fields(server_url = %config.server_url()))]
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base = Url::parse(config.server_url())
            .map_err(|e| ConfigError::new(format!("Invalid server URL: {}", e)))?;
        let move_url = base
            .join(config.move_path())
            .map_err(|e| ConfigError::new(format!("Invalid move path: {}", e)))?;
        let board_url = base
            .join(config.board_path())
            .map_err(|e| ConfigError::new(format!("Invalid board path: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(*config.request_timeout_ms()))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        info!(move_url = %move_url, board_url = %board_url, "HTTP move authority ready");
        Ok(Self {
            client,
            move_url,
            board_url,
        })
    }

    /// Full URL for a move query.
    pub fn move_url(&self, request: &MoveRequest) -> Url {
        let mut url = self.move_url.clone();
        url.query_pairs_mut()
            .append_pair("from", request.from.as_str())
            .append_pair("to", request.to.as_str());
        url
    }

    async fn get_text(&self, url: Url) -> Result<String, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Move authority returned an error status");
            return Err(TransportError::new(TransportErrorKind::Status(status.as_u16())));
        }

        let body = response.text().await?;
        debug!(status = %status, body = %body, "Got move authority response");
        Ok(body)
    }
}

#[async_trait::async_trait]
impl MoveAuthority for HttpMoveAuthority {
    #[instrument(skip(self), fields(from = %request.from, to = %request.to))]
    async fn submit(&self, request: &MoveRequest) -> Result<MoveResponse, TransportError> {
        let body = self.get_text(self.move_url(request)).await?;
        MoveResponse::from_json(&body)
    }

    #[instrument(skip(self))]
    async fn board(&self) -> Result<BoardState, TransportError> {
        let body = self.get_text(self.board_url.clone()).await?;
        let state: BoardState = serde_json::from_str(&body)?;
        debug!(cells = state.board.len(), "Got board snapshot");
        Ok(state)
    }
}
