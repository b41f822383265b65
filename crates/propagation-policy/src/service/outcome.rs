//! Results of driving one operation.

use shared_errors::{Failure, FailureReport, PeerId};
use thiserror::Error;

/// A completed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed<T> {
    /// Value produced by the successful attempt.
    pub output: T,
    /// Peer that served it.
    pub peer: PeerId,
    /// Attempts made, including the successful one.
    pub attempts: u32,
}

/// Why an operation gave up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropagationError {
    /// The last failure, surfaced with its kind and context intact.
    #[error("{failure}")]
    Surfaced {
        /// The failure as raised by the final attempt.
        failure: Failure,
        /// Attempts made before giving up.
        attempts: u32,
    },

    /// No usable candidate peer was available for the first attempt.
    #[error("No candidate peers available for {target}")]
    NoCandidates {
        /// What the operation was for.
        target: String,
    },
}

impl PropagationError {
    /// The surfaced failure, if the operation got as far as an attempt.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Surfaced { failure, .. } => Some(failure),
            Self::NoCandidates { .. } => None,
        }
    }

    /// Attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Surfaced { attempts, .. } => *attempts,
            Self::NoCandidates { .. } => 0,
        }
    }

    /// Outer-boundary rendering of the surfaced failure.
    pub fn report(&self) -> Option<FailureReport> {
        self.failure().map(Failure::report)
    }
}
