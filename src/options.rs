//! Probe options configuration.
//!
//! This module provides the [`ProbeOptions`] struct for configuring how the
//! version command is located and run.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration options for a version probe.
///
/// # Default Behavior
///
/// The default timeout is 5 seconds and the executable is looked up on PATH.
///
/// # Example
///
/// ```rust
/// use consul_version_fact::ProbeOptions;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let opts = ProbeOptions {
///     timeout: Duration::from_secs(10),
///     executable: Some(PathBuf::from("/opt/consul/bin/consul")),
/// };
/// assert_eq!(opts.timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Maximum time to wait for the version command.
    ///
    /// A command still running after this is killed and the fact is absent.
    ///
    /// Default: 5 seconds
    pub timeout: Duration,

    /// Run this executable instead of searching PATH.
    ///
    /// Default: `None`
    pub executable: Option<PathBuf>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            executable: None,
        }
    }
}
