//! Policy configuration.
//!
//! Numeric bounds are owned here, not by the taxonomy: the same failure kind
//! may be retried three times by the downloader and once by the resolver.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// A configuration value the policy cannot run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// A bound allows no attempt at all.
    #[error("{section}.max_attempts must be at least 1")]
    ZeroAttempts {
        /// Config section holding the bound.
        section: &'static str,
    },

    /// Backoff would shrink, or is not a number.
    #[error("{section}.multiplier must be a finite value >= 1.0, got {multiplier}")]
    InvalidMultiplier {
        /// Config section holding the multiplier.
        section: &'static str,
        /// Rejected value.
        multiplier: f64,
    },

    /// Delay cap below the first delay.
    #[error("{section}.max_backoff_ms ({max_backoff_ms}) is below initial_backoff_ms ({initial_backoff_ms})")]
    InvertedBackoff {
        /// Config section holding the delays.
        section: &'static str,
        /// First delay.
        initial_backoff_ms: u64,
        /// Delay cap.
        max_backoff_ms: u64,
    },

    /// Peer switching enabled with a cap of zero.
    #[error("max_alternate_peers must be at least 1 when set")]
    ZeroAlternatePeers,

    /// Unknown peers start at trust 0 and would all be excluded.
    #[error("reputation.exclusion_threshold must be a finite negative value, got {threshold}")]
    NonNegativeExclusionThreshold {
        /// Rejected value.
        threshold: f64,
    },

    /// A penalty that would raise trust.
    #[error("reputation.{field} must be a finite value <= 0, got {value}")]
    PositivePenalty {
        /// Name of the penalty field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A bonus or cap that would lower trust.
    #[error("reputation.{field} must be a finite value >= 0, got {value}")]
    NegativeBonus {
        /// Name of the field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Bounded retry with exponential backoff.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Total attempts allowed for one target, including the first.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_backoff_ms: u64,
    /// Upper bound on any single delay.
    pub max_backoff_ms: u64,
    /// Growth factor applied per retry.
    pub multiplier: f64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 10_000,
            multiplier: 2.0,
        }
    }
}

impl BackoffConfig {
    /// Delay before the first retry.
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    /// Upper bound on any single delay.
    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }

    fn validate(&self, section: &'static str) -> Result<(), ConfigValidationError> {
        if self.max_attempts == 0 {
            return Err(ConfigValidationError::ZeroAttempts { section });
        }
        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err(ConfigValidationError::InvalidMultiplier {
                section,
                multiplier: self.multiplier,
            });
        }
        if self.max_backoff_ms < self.initial_backoff_ms {
            return Err(ConfigValidationError::InvertedBackoff {
                section,
                initial_backoff_ms: self.initial_backoff_ms,
                max_backoff_ms: self.max_backoff_ms,
            });
        }
        Ok(())
    }
}

/// Propagation policy configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Bound for connection-level transport failures.
    pub transport: BackoffConfig,
    /// Bound for resource timeouts, per target identifier.
    pub timeout: BackoffConfig,
    /// Cap on peer switches per operation; `None` tries every candidate.
    pub max_alternate_peers: Option<usize>,
    /// Retry `RemoteException` against the same peer instead of switching.
    pub retry_remote_exceptions: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            transport: BackoffConfig::default(),
            timeout: BackoffConfig {
                max_attempts: 3,
                initial_backoff_ms: 1_000,
                max_backoff_ms: 30_000,
                multiplier: 2.0,
            },
            max_alternate_peers: None,
            retry_remote_exceptions: false,
        }
    }
}

impl PolicyConfig {
    /// Testing config with short delays.
    pub fn for_testing() -> Self {
        Self {
            transport: BackoffConfig {
                max_attempts: 3,
                initial_backoff_ms: 10,
                max_backoff_ms: 40,
                multiplier: 2.0,
            },
            timeout: BackoffConfig {
                max_attempts: 3,
                initial_backoff_ms: 20,
                max_backoff_ms: 80,
                multiplier: 2.0,
            },
            max_alternate_peers: None,
            retry_remote_exceptions: false,
        }
    }

    /// Check the bounds are usable.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.transport.validate("transport")?;
        self.timeout.validate("timeout")?;
        if self.max_alternate_peers == Some(0) {
            return Err(ConfigValidationError::ZeroAlternatePeers);
        }
        Ok(())
    }
}

/// Trust adjustments applied by the in-memory reputation store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReputationConfig {
    /// Penalty for data that does not match its hash.
    pub invalid_data_penalty: f64,
    /// Penalty for malformed responses, undecodable datagrams and
    /// generic protocol violations.
    pub protocol_violation_penalty: f64,
    /// Penalty for a peer that never answered.
    pub no_response_penalty: f64,
    /// Penalty for an error reported by the remote node.
    pub remote_exception_penalty: f64,
    /// Bonus per successful attempt.
    pub success_bonus: f64,
    /// Trust cannot rise above this.
    pub max_trust: f64,
    /// Peers at or below this trust are excluded from selection.
    pub exclusion_threshold: f64,
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            invalid_data_penalty: -50.0,
            protocol_violation_penalty: -20.0,
            no_response_penalty: -5.0,
            remote_exception_penalty: -2.0,
            success_bonus: 1.0,
            max_trust: 10.0,
            exclusion_threshold: -50.0,
        }
    }
}

impl ReputationConfig {
    /// Check the adjustments keep unknown peers selectable and move trust
    /// in the intended direction.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Negated comparisons also reject NaN.
        if !(self.exclusion_threshold.is_finite() && self.exclusion_threshold < 0.0) {
            return Err(ConfigValidationError::NonNegativeExclusionThreshold {
                threshold: self.exclusion_threshold,
            });
        }
        for (field, value) in [
            ("invalid_data_penalty", self.invalid_data_penalty),
            ("protocol_violation_penalty", self.protocol_violation_penalty),
            ("no_response_penalty", self.no_response_penalty),
            ("remote_exception_penalty", self.remote_exception_penalty),
        ] {
            if !(value.is_finite() && value <= 0.0) {
                return Err(ConfigValidationError::PositivePenalty { field, value });
            }
        }
        for (field, value) in [
            ("success_bonus", self.success_bonus),
            ("max_trust", self.max_trust),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigValidationError::NegativeBonus { field, value });
            }
        }
        Ok(())
    }
}
