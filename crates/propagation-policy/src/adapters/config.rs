use crate::domain::{ConfigValidationError, PolicyConfig, ReputationConfig};
use crate::ports::PolicyConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For deployments, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    policy: PolicyConfig,
    reputation: ReputationConfig,
}

impl StaticConfigProvider {
    /// Create with default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the policy bounds.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field of `policy`.
    pub fn with_policy(mut self, policy: PolicyConfig) -> Result<Self, ConfigValidationError> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    /// Replace the reputation adjustments.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field of `reputation`.
    pub fn with_reputation(
        mut self,
        reputation: ReputationConfig,
    ) -> Result<Self, ConfigValidationError> {
        reputation.validate()?;
        self.reputation = reputation;
        Ok(self)
    }
}

impl PolicyConfigProvider for StaticConfigProvider {
    fn policy_config(&self) -> PolicyConfig {
        self.policy.clone()
    }

    fn reputation_config(&self) -> ReputationConfig {
        self.reputation.clone()
    }
}

// ============================================================================
// TomlConfigProvider - File-backed config (requires "toml-config" feature)
// ============================================================================

#[cfg(feature = "toml-config")]
mod toml_config {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use thiserror::Error;

    /// Configuration file structure.
    #[derive(Debug, Default, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        policy: PolicyConfig,
        #[serde(default)]
        reputation: ReputationConfig,
    }

    /// TOML-based configuration provider.
    ///
    /// Missing tables and fields fall back to their defaults.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [policy]
    /// max_alternate_peers = 4
    /// retry_remote_exceptions = false
    ///
    /// [policy.transport]
    /// max_attempts = 3
    /// initial_backoff_ms = 500
    /// max_backoff_ms = 10000
    /// multiplier = 2.0
    ///
    /// [policy.timeout]
    /// max_attempts = 3
    /// initial_backoff_ms = 1000
    /// max_backoff_ms = 30000
    /// multiplier = 2.0
    ///
    /// [reputation]
    /// invalid_data_penalty = -50.0
    /// exclusion_threshold = -50.0
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        policy: PolicyConfig,
        reputation: ReputationConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed, or holds
        /// unusable bounds.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                reason: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        ///
        /// # Errors
        ///
        /// Returns error on malformed TOML or unusable bounds.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            file.policy.validate()?;
            file.reputation.validate()?;

            Ok(Self {
                policy: file.policy,
                reputation: file.reputation,
            })
        }
    }

    impl PolicyConfigProvider for TomlConfigProvider {
        fn policy_config(&self) -> PolicyConfig {
            self.policy.clone()
        }

        fn reputation_config(&self) -> ReputationConfig {
            self.reputation.clone()
        }
    }

    /// Errors that can occur during config loading.
    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum ConfigError {
        /// File I/O error.
        #[error("Failed to read {path}: {reason}")]
        Io {
            /// Path of the file that failed to load.
            path: String,
            /// Error message from the I/O operation.
            reason: String,
        },
        /// TOML parsing error.
        #[error("Failed to parse config: {0}")]
        Parse(String),
        /// Parsed, but a value is unusable.
        #[error("Invalid config: {0}")]
        Invalid(#[from] ConfigValidationError),
    }
}

#[cfg(feature = "toml-config")]
pub use toml_config::{ConfigError, TomlConfigProvider};
