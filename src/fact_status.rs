//! Fact status types representing probe results.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A successfully resolved fact value.
#[derive(Debug, Clone)]
pub struct ResolvedFact {
    /// The normalized version string.
    pub value: String,

    /// Path to the executable that produced it.
    pub path: PathBuf,
}

/// Why a probe produced no value.
///
/// These variants exist for logging and diagnostics only. The fact contract
/// folds every one of them into an absent value.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new causes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The executable was not found on PATH or in the fallback locations.
    #[error("executable not found")]
    NotFound,

    /// The command did not finish within the configured timeout.
    #[error("version command timed out")]
    Timeout,

    /// The executable exists but could not be run.
    #[error("permission denied")]
    PermissionDenied,

    /// Spawning or waiting on the command failed.
    #[error("I/O error running version command")]
    IoError,

    /// The command wrote nothing to stdout.
    #[error("version command produced no output")]
    EmptyOutput,

    /// The first line of output had no usable version token.
    #[error("unexpected version output")]
    UnexpectedFormat,
}

/// Result of probing a fact.
///
/// # Example
///
/// ```rust
/// use consul_version_fact::{FactStatus, ProbeError};
///
/// let status = FactStatus::Unavailable {
///     error: ProbeError::NotFound,
///     message: "consul is not installed".to_string(),
/// };
/// assert!(!status.is_resolved());
/// assert_eq!(status.value(), None);
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum FactStatus {
    /// The probe produced a value.
    Resolved(ResolvedFact),

    /// The probe produced nothing.
    Unavailable {
        /// Typed cause for programmatic handling.
        error: ProbeError,
        /// Human-readable message for logs.
        message: String,
    },
}

impl FactStatus {
    pub(crate) fn unavailable(error: ProbeError, message: impl Into<String>) -> Self {
        Self::Unavailable {
            error,
            message: message.into(),
        }
    }

    /// Whether a value was produced.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Collapse the status into the fact value.
    pub fn value(self) -> Option<String> {
        match self {
            Self::Resolved(fact) => Some(fact.value),
            _ => None,
        }
    }

    /// Path of the executable that was probed, when it ran successfully.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Resolved(fact) => Some(fact.path.as_path()),
            _ => None,
        }
    }

    /// The cause of an unavailable fact.
    pub fn error(&self) -> Option<&ProbeError> {
        match self {
            Self::Unavailable { error, .. } => Some(error),
            _ => None,
        }
    }
}
