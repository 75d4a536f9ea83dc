//! Issues move requests and hands back classified outcomes.

use crate::authority::MoveAuthority;
use crate::board::MoveRequest;
use crate::error::TransportError;
use crate::response::MoveResponse;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Sends moves to a [`MoveAuthority`].
///
/// Cloning is cheap and shares the authority, so a clone can be moved into a
/// spawned task while the controller keeps handling input.
#[derive(Debug)]
pub struct MoveRequester<A> {
    authority: Arc<A>,
}

impl<A> Clone for MoveRequester<A> {
    fn clone(&self) -> Self {
        Self {
            authority: Arc::clone(&self.authority),
        }
    }
}

impl<A: MoveAuthority> MoveRequester<A> {
    /// Creates a requester for the given authority.
    pub fn new(authority: A) -> Self {
        Self {
            authority: Arc::new(authority),
        }
    }

    /// The underlying authority.
    pub fn authority(&self) -> &A {
        &self.authority
    }

    /// Submits `request` once and waits for the authority's answer.
    ///
    /// Failures are returned, never retried here.
    #[instrument(skip(self), fields(from = %request.from, to = %request.to))]
    pub async fn attempt_move(&self, request: &MoveRequest) -> Result<MoveResponse, TransportError> {
        info!("Sending move to server");
        let outcome = self.authority.submit(request).await;
        match &outcome {
            Ok(response) => info!(rejected = response.is_validation_error(), "Move answered"),
            Err(e) => warn!(error = %e, "Move request failed"),
        }
        outcome
    }
}
