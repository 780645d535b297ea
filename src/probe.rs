//! Version probe functions.

use crate::resolution::{extract_version, find_executable, run_version_command};
use crate::{FactKind, FactStatus, ProbeError, ProbeOptions, ResolvedFact};
use std::path::Path;

/// Probe the installed Consul version.
///
/// Runs `consul --version` with standard error discarded and returns the
/// second token of the first output line with every `v` removed, e.g.
/// `Consul v1.9.3` yields `1.9.3`.
///
/// Every failure (missing binary, timeout, empty or malformed output) yields
/// `None`. Confinement is not checked here; callers decide whether the probe
/// should run on this host.
///
/// # Example
///
/// ```rust,no_run
/// use consul_version_fact::probe;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match probe().await {
///         Some(version) => println!("consul {}", version),
///         None => println!("consul is not available"),
///     }
/// }
/// ```
pub async fn probe() -> Option<String> {
    probe_with_options(ProbeOptions::default()).await
}

/// Probe the installed Consul version with custom options.
pub async fn probe_with_options(options: ProbeOptions) -> Option<String> {
    probe_status(FactKind::ConsulVersion, &options).await.value()
}

/// Probe a fact and report why it is unavailable, if it is.
///
/// # Probe Process
///
/// 1. Use `options.executable`, or search PATH and fallback locations
/// 2. Run the executable with the kind's version arguments and a timeout
/// 3. Extract and normalize the version token from the first line of stdout
pub async fn probe_status(kind: FactKind, options: &ProbeOptions) -> FactStatus {
    let path = match &options.executable {
        Some(path) => path.clone(),
        None => match find_executable(kind.executable_name()) {
            Some(path) => path,
            None => {
                tracing::debug!(fact = kind.fact_name(), "executable not found");
                return FactStatus::unavailable(
                    ProbeError::NotFound,
                    format!("{} executable not found", kind.display_name()),
                );
            }
        },
    };

    probe_path(&path, kind.version_args(), options).await
}

/// Run a specific executable and turn its output into a fact status.
///
/// `options.executable` is ignored; `path` is run as given.
pub async fn probe_path(path: &Path, args: &[&str], options: &ProbeOptions) -> FactStatus {
    let output = match run_version_command(path, args, options.timeout).await {
        Ok(output) => output,
        Err(e) => {
            return FactStatus::unavailable(
                e.clone(),
                format!("Failed to run {}: {}", path.display(), e),
            )
        }
    };

    let value = match extract_version(&output) {
        Some(value) => value,
        None => {
            tracing::debug!(path = %path.display(), "no version token in output");
            return FactStatus::unavailable(
                ProbeError::UnexpectedFormat,
                format!("Failed to parse version from: {}", output.trim()),
            );
        }
    };

    tracing::debug!(path = %path.display(), %value, "resolved version");

    FactStatus::Resolved(ResolvedFact {
        value,
        path: path.to_path_buf(),
    })
}
