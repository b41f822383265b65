//! Core PropagationService implementation.

use shared_errors::{Failure, PeerId};
use tracing::{debug, info, warn};

use super::outcome::{Completed, PropagationError};
use crate::domain::{Decision, OperationTracker, PolicyConfig};
use crate::ports::{PeerOperation, PeerReputation};

/// Applies the propagation policy to operations run against remote peers.
///
/// Holds no per-operation state: every call to [`run`](Self::run) owns a
/// fresh [`OperationTracker`], so one service can drive many operations
/// concurrently.
pub struct PropagationService<R: PeerReputation> {
    config: PolicyConfig,
    reputation: R,
}

impl<R: PeerReputation> PropagationService<R> {
    /// Create a new service.
    pub fn new(config: PolicyConfig, reputation: R) -> Self {
        Self { config, reputation }
    }

    /// Active configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Reputation store.
    pub fn reputation(&self) -> &R {
        &self.reputation
    }

    /// Classify one failure within `tracker` and report any blamed peer.
    ///
    /// For subsystems that schedule their own retries.
    pub fn decide(&self, failure: &Failure, tracker: &mut OperationTracker) -> Decision {
        let decision = tracker.on_failure(failure, &self.config);
        if let Some(peer) = decision.blamed_peer() {
            warn!(
                peer = %peer,
                kind = failure.kind().name(),
                category = %failure.category(),
                "[propagation] Downgrading peer trust"
            );
            self.reputation.penalize(peer, failure);
        }
        decision
    }

    /// Drive `operation` to completion or to a surfaced failure.
    ///
    /// Candidates are tried in order, skipping peers blamed earlier in this
    /// operation and peers the reputation store excludes.
    ///
    /// # Errors
    ///
    /// `NoCandidates` if no peer is usable for the first attempt; otherwise
    /// `Surfaced` with the last failure once its category's bound is reached,
    /// the category forbids retry, or no alternate peer remains.
    pub async fn run<O: PeerOperation>(
        &self,
        operation: &O,
        candidates: &[PeerId],
    ) -> Result<Completed<O::Output>, PropagationError> {
        let mut tracker = OperationTracker::new();
        let mut peer = match self.next_candidate(&tracker, candidates) {
            Some(peer) => peer,
            None => {
                info!(target_id = operation.target(), "[propagation] No candidate peers");
                return Err(PropagationError::NoCandidates {
                    target: operation.target().to_string(),
                });
            }
        };

        loop {
            let Some(attempt) = tracker.begin_attempt() else {
                // Unreachable: every terminal transition returns below.
                return Err(PropagationError::NoCandidates {
                    target: operation.target().to_string(),
                });
            };
            debug!(
                target_id = operation.target(),
                peer = %peer,
                attempt,
                "[propagation] Attempting"
            );

            let failure = match operation.attempt(&peer).await {
                Ok(output) => {
                    tracker.on_success();
                    self.reputation.record_success(&peer);
                    return Ok(Completed {
                        output,
                        peer,
                        attempts: attempt,
                    });
                }
                Err(failure) => failure,
            };

            match self.decide(&failure, &mut tracker) {
                Decision::RetrySameTarget { retry, backoff } => {
                    debug!(
                        target_id = operation.target(),
                        peer = %peer,
                        kind = failure.kind().name(),
                        retry,
                        backoff_ms = backoff.as_millis() as u64,
                        "[propagation] Retrying same target"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Decision::RetryAlternatePeer { blamed } => {
                    match self.next_candidate(&tracker, candidates) {
                        Some(next) => {
                            debug!(
                                target_id = operation.target(),
                                blamed = %blamed,
                                next = %next,
                                "[propagation] Switching peer"
                            );
                            peer = next;
                        }
                        None => {
                            tracker.surface();
                            return Err(self.surface(operation, failure, attempt));
                        }
                    }
                }
                Decision::Surface { .. } => {
                    return Err(self.surface(operation, failure, attempt));
                }
            }
        }
    }

    fn next_candidate(&self, tracker: &OperationTracker, candidates: &[PeerId]) -> Option<PeerId> {
        candidates
            .iter()
            .find(|p| !tracker.is_excluded(p) && !self.reputation.is_excluded(p))
            .cloned()
    }

    fn surface<O: PeerOperation>(
        &self,
        operation: &O,
        failure: Failure,
        attempts: u32,
    ) -> PropagationError {
        info!(
            target_id = operation.target(),
            kind = failure.kind().name(),
            category = %failure.category(),
            attempts,
            "[propagation] Surfacing failure: {}",
            failure
        );
        PropagationError::Surfaced { failure, attempts }
    }
}
