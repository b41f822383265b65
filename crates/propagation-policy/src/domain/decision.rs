//! Per-kind remedies and the decisions a tracker hands back to its caller.

use std::time::Duration;

use shared_errors::{ErrorCategory, Failure, PeerId};

use super::config::PolicyConfig;

/// What the policy prescribes for a failure, before bounds are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remedy {
    /// Connection-level transport failure: retry same target, transport bound.
    RetryTransport,
    /// Resource timeout: retry same target with a fresh deadline, timeout bound.
    RetryTimeout,
    /// Blame the peer and retry against an alternate one.
    SwitchPeer(PeerId),
    /// Hand the failure to the caller untouched.
    Surface,
}

/// Map a failure to its remedy.
///
/// Pure: depends only on the failure's kind and context and on `config`.
/// Coarse dispatch is on category; kinds are inspected only inside
/// `Transport`, where connection-level and structural kinds differ.
pub fn remedy_for(failure: &Failure, config: &PolicyConfig) -> Remedy {
    match failure.category() {
        ErrorCategory::Transport => match failure {
            Failure::TransportNotConnected | Failure::ConnectionClosedBeforeResponse { .. } => {
                Remedy::RetryTransport
            }
            Failure::RemoteException { peer, .. } => {
                if config.retry_remote_exceptions {
                    Remedy::RetryTransport
                } else {
                    Remedy::SwitchPeer(peer.clone())
                }
            }
            // Undecodable data is the sender's fault.
            Failure::Decode { sender, .. } => Remedy::SwitchPeer(sender.clone()),
            _ => Remedy::Surface,
        },
        ErrorCategory::PeerMisbehavior => match failure.peer() {
            Some(peer) => Remedy::SwitchPeer(peer.clone()),
            None => Remedy::Surface,
        },
        ErrorCategory::ResourceTimeout => Remedy::RetryTimeout,
        ErrorCategory::DomainEconomic | ErrorCategory::Lifecycle => Remedy::Surface,
    }
}

/// Outcome of classifying one failure within an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Retry the same target after `backoff`.
    RetrySameTarget {
        /// Retry number for this bound, 1-based.
        retry: u32,
        /// Delay before the retry.
        backoff: Duration,
    },
    /// Retry against a peer other than `blamed`.
    RetryAlternatePeer {
        /// Peer excluded for the rest of the operation.
        blamed: PeerId,
    },
    /// Stop and surface the failure to the caller.
    Surface {
        /// Peer to report to the reputation store, if any.
        blamed: Option<PeerId>,
    },
}

impl Decision {
    /// Peer this decision holds responsible, if any.
    pub fn blamed_peer(&self) -> Option<&PeerId> {
        match self {
            Self::RetryAlternatePeer { blamed } => Some(blamed),
            Self::Surface { blamed } => blamed.as_ref(),
            Self::RetrySameTarget { .. } => None,
        }
    }

    /// True for the terminal decision.
    pub fn is_surface(&self) -> bool {
        matches!(self, Self::Surface { .. })
    }
}
