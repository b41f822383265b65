//! Domain Layer - Pure policy logic with no I/O
//!
//! - Remedies per failure category and kind
//! - The per-operation state machine and its bounds
//! - Exponential backoff
//! - Policy and reputation configuration

pub mod backoff;
pub mod config;
pub mod decision;
pub mod tracker;

pub use backoff::backoff_for;
pub use config::{BackoffConfig, ConfigValidationError, PolicyConfig, ReputationConfig};
pub use decision::{remedy_for, Decision, Remedy};
pub use tracker::{OperationState, OperationTracker};
