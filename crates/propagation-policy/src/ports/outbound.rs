//! # Driven Ports (Outbound SPI)
//!
//! What the propagation service requires from the subsystem that uses it:
//! the operation to drive, a place to report blamed peers, and its bounds.

use std::sync::Arc;

use async_trait::async_trait;
use shared_errors::{Failure, PeerId};

use crate::domain::{PolicyConfig, ReputationConfig};

/// One retryable unit of work against a remote peer.
///
/// Each call to `attempt` must be independent: the service may call it
/// again for the same or a different peer after a failure.
#[async_trait]
pub trait PeerOperation: Send + Sync {
    /// Value produced on success.
    type Output: Send;

    /// Identifier of what the operation is for (blob hash, URI, ...), for logs.
    fn target(&self) -> &str;

    /// Run one attempt against `peer`.
    async fn attempt(&self, peer: &PeerId) -> Result<Self::Output, Failure>;
}

/// Peer reputation store.
///
/// Receives a signal for every failure that blames a peer. Implementations
/// must be `Send + Sync`; many operations report concurrently.
pub trait PeerReputation: Send + Sync {
    /// Downgrade `peer` for `failure`.
    fn penalize(&self, peer: &PeerId, failure: &Failure);

    /// Record a successful attempt against `peer`.
    fn record_success(&self, _peer: &PeerId) {}

    /// Whether `peer` should not be selected at all.
    fn is_excluded(&self, peer: &PeerId) -> bool;
}

impl<T: PeerReputation + ?Sized> PeerReputation for Arc<T> {
    fn penalize(&self, peer: &PeerId, failure: &Failure) {
        (**self).penalize(peer, failure);
    }

    fn record_success(&self, peer: &PeerId) {
        (**self).record_success(peer);
    }

    fn is_excluded(&self, peer: &PeerId) -> bool {
        (**self).is_excluded(peer)
    }
}

/// Source of policy configuration.
pub trait PolicyConfigProvider: Send + Sync {
    /// Retry and peer-switch bounds.
    fn policy_config(&self) -> PolicyConfig;

    /// Trust adjustments for the in-memory reputation store.
    fn reputation_config(&self) -> ReputationConfig;
}
