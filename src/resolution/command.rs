//! Version command execution with timeout.

use crate::ProbeError;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run an executable and capture its standard output.
///
/// Standard error is discarded and standard input is closed. The child is
/// killed if it outlives `limit`.
///
/// A non-zero exit status is not an error on its own: tools sometimes print a
/// usable version and still exit with a failure code, so any captured stdout
/// is returned. Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// - `NotFound` if the executable does not exist
/// - `PermissionDenied` if it cannot be executed
/// - `IoError` for other spawn or wait failures
/// - `Timeout` if the command runs longer than `limit`
/// - `EmptyOutput` if nothing was written to stdout
pub(crate) async fn run_version_command(
    path: &Path,
    args: &[&str],
    limit: Duration,
) -> Result<String, ProbeError> {
    let mut command = Command::new(path);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let output = timeout(limit, command.output())
        .await
        .map_err(|_| {
            tracing::warn!(path = %path.display(), ?limit, "version command timed out");
            ProbeError::Timeout
        })?
        .map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "failed to run version command");
            match e.kind() {
                ErrorKind::NotFound => ProbeError::NotFound,
                ErrorKind::PermissionDenied => ProbeError::PermissionDenied,
                _ => ProbeError::IoError,
            }
        })?;

    if !output.status.success() {
        tracing::debug!(
            path = %path.display(),
            status = %output.status,
            "version command exited unsuccessfully, parsing stdout anyway"
        );
    }

    if output.stdout.is_empty() {
        return Err(ProbeError::EmptyOutput);
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
