//! # Propagation Policy
//!
//! Decides what happens after a [`Failure`](shared_errors::Failure) is raised
//! by an operation against a remote peer: retry the same target with
//! backoff, retry against an alternate peer, or surface the failure to the
//! caller unchanged.
//!
//! ## Rules
//!
//! - Transport failures are retried up to `transport.max_attempts`.
//! - Resource timeouts are retried up to `timeout.max_attempts` per target
//!   identifier, then surfaced with that identifier intact.
//! - Peer misbehavior is never retried against the same peer. The peer is
//!   reported to the reputation store and the next candidate is tried.
//! - Domain/economic and lifecycle failures are surfaced on first occurrence.
//!
//! ## Architecture
//!
//! - **Domain Layer:** remedies, the per-operation state machine, backoff
//! - **Ports Layer:** the operation, reputation store and config source traits
//! - **Service Layer:** [`PropagationService`] drives an operation over a
//!   candidate list
//! - **Adapters Layer:** in-memory reputation, static and TOML config
//!
//! ## Example
//!
//! ```rust
//! use propagation_policy::{Decision, OperationTracker, PolicyConfig};
//! use shared_errors::Failure;
//!
//! let config = PolicyConfig::default();
//! let mut tracker = OperationTracker::new();
//!
//! tracker.begin_attempt();
//! let decision = tracker.on_failure(&Failure::invalid_data("P2"), &config);
//! assert!(matches!(decision, Decision::RetryAlternatePeer { .. }));
//!
//! tracker.begin_attempt();
//! let decision = tracker.on_failure(&Failure::unknown_uri("lbry://nonexistent"), &config);
//! assert!(decision.is_surface());
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod domain;
pub mod ports;
pub mod service;

/// Adapters for the outbound ports.
/// `TomlConfigProvider` requires feature: `toml-config`
pub mod adapters;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use adapters::{InMemoryReputation, NoOpReputation, StaticConfigProvider};
#[cfg(feature = "toml-config")]
pub use adapters::{ConfigError, TomlConfigProvider};
pub use domain::{
    backoff_for, remedy_for, BackoffConfig, ConfigValidationError, Decision, OperationState,
    OperationTracker, PolicyConfig, Remedy, ReputationConfig,
};
pub use ports::{PeerOperation, PeerReputation, PolicyConfigProvider};
pub use service::{Completed, PropagationError, PropagationService};
