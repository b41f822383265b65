//! # Adapters
//!
//! Concrete implementations of the outbound ports.
//!
//! - `InMemoryReputation` / `NoOpReputation` - reputation stores
//! - `StaticConfigProvider` - hardcoded bounds
//! - `TomlConfigProvider` - bounds loaded from a TOML file (feature `toml-config`)

pub mod config;
pub mod reputation;

pub use config::StaticConfigProvider;
#[cfg(feature = "toml-config")]
pub use config::{ConfigError, TomlConfigProvider};
pub use reputation::{InMemoryReputation, NoOpReputation};
