//! # Shared Errors
//!
//! Failure taxonomy for the content node: the closed registry of failure
//! kinds raised by the DHT, downloader, resolver and negotiation subsystems,
//! the category each kind belongs to, and the typed context each carries.
//!
//! ## Structure
//!
//! - [`ErrorKind`] / [`ErrorCategory`]: payload-free tags with `const` lookups
//!   (category, retry class, peer implication, RPC code).
//! - [`Failure`]: the propagated value, one variant per kind, rendered by
//!   `Display`.
//! - [`context`]: string newtypes and small descriptors used as payloads.
//! - [`FailureReport`]: rendering at the outermost boundary.
//!
//! This crate does not retry, time out, or ban peers. It supplies the
//! classification that the policy layers switch on.
//!
//! ## Example
//!
//! ```rust
//! use shared_errors::{ErrorCategory, ErrorKind, Failure};
//!
//! let failure = Failure::unknown_uri("lbry://nonexistent");
//!
//! assert_eq!(failure.kind(), ErrorKind::UnknownUri);
//! assert_eq!(failure.category(), ErrorCategory::DomainEconomic);
//! assert_eq!(failure.to_string(), "URI lbry://nonexistent cannot be resolved");
//! ```

pub mod context;
pub mod failure;
pub mod kind;
pub mod report;

pub use context::{
    BlobHash, ClaimId, ClaimName, ComponentName, CurrencyCode, DatagramDescriptor, Outpoint,
    PeerId, Price, StreamHash, Uri,
};
pub use failure::{Failure, Result};
pub use kind::{ErrorCategory, ErrorKind, RetryClass, RpcCode};
pub use report::FailureReport;

/// Fixtures for downstream tests.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
