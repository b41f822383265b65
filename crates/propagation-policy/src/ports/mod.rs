//! # Ports
//!
//! Interfaces the host subsystem implements for the propagation service.

pub mod outbound;

pub use outbound::{PeerOperation, PeerReputation, PolicyConfigProvider};
