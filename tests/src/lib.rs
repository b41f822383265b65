//! # Content Node Failure Test Suite
//!
//! Cross-crate tests driven through the public APIs of `shared-errors` and
//! `propagation-policy` only.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support.rs        # Simulated subsystems and logging setup
//! │
//! └── integration/
//!     ├── scenarios.rs  # Resolve, download and price quote flows
//!     ├── boundary.rs   # Outer-boundary reports and RPC codes
//!     ├── config_flow.rs# TOML bounds driving the service
//!     └── properties.rs # Bound, isolation and no-retry properties
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p node-tests
//!
//! # By group
//! cargo test -p node-tests integration::scenarios::
//! cargo test -p node-tests integration::properties::
//!
//! # With propagation logs
//! RUST_LOG=propagation_policy=debug cargo test -p node-tests -- --nocapture
//! ```

pub mod support;
