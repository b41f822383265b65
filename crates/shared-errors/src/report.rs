//! Outer-boundary rendering of a surfaced failure.

use std::fmt;

use crate::failure::Failure;
use crate::kind::{ErrorCategory, ErrorKind, RpcCode};

/// A surfaced failure as shown to an RPC client or CLI user.
///
/// Built once at the boundary; the message is the failure's own rendering,
/// so no identifying context is lost between detection and report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// Kind of the surfaced failure.
    pub kind: ErrorKind,
    /// Category of the surfaced failure.
    pub category: ErrorCategory,
    /// Numeric code, for the JSON-RPC compatible family only.
    pub code: Option<RpcCode>,
    /// Rendered message.
    pub message: String,
}

impl From<&Failure> for FailureReport {
    fn from(failure: &Failure) -> Self {
        Self {
            kind: failure.kind(),
            category: failure.category(),
            code: failure.code(),
            message: failure.to_string(),
        }
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}
