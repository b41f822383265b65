//! Per-operation failure handling state machine.
//!
//! ```text
//! [Attempting {n}] ──success──────────────────────────→ [Succeeded]
//!        │
//!        └──failure──→ classify ──┬── retry same target ──→ [Attempting {n+1}]
//!                                 ├── retry alternate peer → [Attempting {n+1}]
//!                                 └── bound reached / surface ──→ [Surfaced]
//! ```
//!
//! `Succeeded` and `Surfaced` are terminal. The tracker owns every counter
//! for one operation; failures themselves are never mutated.

use std::collections::{HashMap, HashSet};

use shared_errors::{Failure, PeerId};

use super::backoff::backoff_for;
use super::config::PolicyConfig;
use super::decision::{remedy_for, Decision, Remedy};


/// State of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationState {
    /// Not yet attempted.
    #[default]
    Idle,
    /// Attempt `attempt` (1-based) is in flight.
    Attempting {
        /// Attempt number.
        attempt: u32,
    },
    /// Operation completed.
    Succeeded,
    /// Operation gave up and surfaced its last failure.
    Surfaced,
}

impl OperationState {
    /// True for `Succeeded` and `Surfaced`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Surfaced)
    }
}

/// Tracks attempts, bounds and excluded peers for a single operation.
#[derive(Debug, Default)]
pub struct OperationTracker {
    state: OperationState,
    attempts: u32,
    transport_failures: u32,
    /// Consecutive timeout failures per target identifier.
    timeout_failures: HashMap<String, u32>,
    peer_switches: usize,
    excluded: HashSet<PeerId>,
}

impl OperationTracker {
    /// Create a tracker in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> OperationState {
        self.state
    }

    /// Attempts started so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Peer switches made so far.
    pub fn peer_switches(&self) -> usize {
        self.peer_switches
    }

    /// Whether `peer` has been blamed earlier in this operation.
    pub fn is_excluded(&self, peer: &PeerId) -> bool {
        self.excluded.contains(peer)
    }

    /// Peers blamed so far in this operation.
    pub fn excluded_peers(&self) -> impl Iterator<Item = &PeerId> {
        self.excluded.iter()
    }

    /// Start the next attempt.
    ///
    /// Returns the attempt number, or `None` when the operation is terminal.
    pub fn begin_attempt(&mut self) -> Option<u32> {
        if self.state.is_terminal() {
            return None;
        }
        self.attempts += 1;
        self.state = OperationState::Attempting {
            attempt: self.attempts,
        };
        Some(self.attempts)
    }

    /// Record success of the in-flight attempt.
    pub fn on_success(&mut self) {
        if !self.state.is_terminal() {
            self.state = OperationState::Succeeded;
        }
    }

    /// Force the terminal `Surfaced` state, e.g. when no candidate peer is left.
    pub fn surface(&mut self) {
        if !self.state.is_terminal() {
            self.state = OperationState::Surfaced;
        }
    }

    /// Classify a failure of the in-flight attempt and apply the bounds.
    ///
    /// Once terminal, further failures are no-ops that return `Surface`.
    pub fn on_failure(&mut self, failure: &Failure, config: &PolicyConfig) -> Decision {
        if self.state.is_terminal() {
            return Decision::Surface { blamed: None };
        }

        let decision = match remedy_for(failure, config) {
            Remedy::RetryTransport => {
                self.transport_failures += 1;
                if self.transport_failures >= config.transport.max_attempts {
                    Decision::Surface { blamed: None }
                } else {
                    Decision::RetrySameTarget {
                        retry: self.transport_failures,
                        backoff: backoff_for(self.transport_failures, &config.transport),
                    }
                }
            }
            Remedy::RetryTimeout => {
                // Timeout kinds always carry their target; the kind name is a
                // stable fallback key.
                let key = failure
                    .target()
                    .map_or_else(|| failure.kind().name().to_string(), str::to_string);
                let count = self.timeout_failures.entry(key).or_insert(0);
                *count += 1;
                if *count >= config.timeout.max_attempts {
                    Decision::Surface { blamed: None }
                } else {
                    Decision::RetrySameTarget {
                        retry: *count,
                        backoff: backoff_for(*count, &config.timeout),
                    }
                }
            }
            Remedy::SwitchPeer(peer) => {
                self.excluded.insert(peer.clone());
                let capped = config
                    .max_alternate_peers
                    .is_some_and(|max| self.peer_switches >= max);
                if capped {
                    Decision::Surface {
                        blamed: Some(peer),
                    }
                } else {
                    self.peer_switches += 1;
                    Decision::RetryAlternatePeer { blamed: peer }
                }
            }
            Remedy::Surface => Decision::Surface { blamed: None },
        };

        if decision.is_surface() {
            self.state = OperationState::Surfaced;
        }
        decision
    }
}
