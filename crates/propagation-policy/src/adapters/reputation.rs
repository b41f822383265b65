//! Peer reputation stores.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared_errors::{ErrorKind, Failure, PeerId};
use tracing::{debug, warn};

use crate::domain::{ConfigValidationError, ReputationConfig};
use crate::ports::PeerReputation;

/// Trust scores kept in memory, shared across operations.
///
/// Every peer starts at 0. Penalties are per kind; successes add a bonus up
/// to `max_trust`. A peer at or below `exclusion_threshold` is excluded.
#[derive(Debug)]
pub struct InMemoryReputation {
    scores: RwLock<HashMap<PeerId, f64>>,
    config: ReputationConfig,
}

impl InMemoryReputation {
    /// Create an empty store.
    ///
    /// # Errors
    ///
    /// Rejects a config that would exclude unknown peers or move trust the
    /// wrong way.
    pub fn new(config: ReputationConfig) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        Ok(Self {
            scores: RwLock::new(HashMap::new()),
            config,
        })
    }

    /// Current trust of `peer` (0 for unknown peers).
    pub fn trust(&self, peer: &PeerId) -> f64 {
        self.scores.read().get(peer).copied().unwrap_or(0.0)
    }

    /// Peers currently excluded.
    pub fn excluded_peers(&self) -> Vec<PeerId> {
        self.scores
            .read()
            .iter()
            .filter(|(_, score)| **score <= self.config.exclusion_threshold)
            .map(|(peer, _)| peer.clone())
            .collect()
    }

    /// Forget `peer`, e.g. after it disconnects.
    pub fn forget(&self, peer: &PeerId) {
        self.scores.write().remove(peer);
    }

    fn penalty_for(&self, kind: ErrorKind) -> f64 {
        match kind {
            ErrorKind::InvalidData => self.config.invalid_data_penalty,
            ErrorKind::InvalidResponse | ErrorKind::MisbehavingPeer | ErrorKind::Decode => {
                self.config.protocol_violation_penalty
            }
            ErrorKind::NoResponse | ErrorKind::ConnectionClosedBeforeResponse => {
                self.config.no_response_penalty
            }
            ErrorKind::RemoteException => self.config.remote_exception_penalty,
            _ => 0.0,
        }
    }
}

impl PeerReputation for InMemoryReputation {
    fn penalize(&self, peer: &PeerId, failure: &Failure) {
        let penalty = self.penalty_for(failure.kind());
        if penalty == 0.0 {
            return;
        }

        let mut scores = self.scores.write();
        let score = scores.entry(peer.clone()).or_insert(0.0);
        let was_excluded = *score <= self.config.exclusion_threshold;
        *score += penalty;
        debug!(peer = %peer, kind = failure.kind().name(), trust = *score, "[reputation] Penalized");

        if !was_excluded && *score <= self.config.exclusion_threshold {
            warn!(peer = %peer, trust = *score, "[reputation] Peer excluded");
        }
    }

    fn record_success(&self, peer: &PeerId) {
        let mut scores = self.scores.write();
        let score = scores.entry(peer.clone()).or_insert(0.0);
        *score = (*score + self.config.success_bonus).min(self.config.max_trust);
    }

    fn is_excluded(&self, peer: &PeerId) -> bool {
        self.trust(peer) <= self.config.exclusion_threshold
    }
}

/// Accepts every signal and excludes nobody.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReputation;

impl PeerReputation for NoOpReputation {
    fn penalize(&self, _peer: &PeerId, _failure: &Failure) {}

    fn is_excluded(&self, _peer: &PeerId) -> bool {
        false
    }
}
