//! PATH-based executable lookup with fallback locations.

use std::path::{Path, PathBuf};

/// System fallback paths to check if executable not found in PATH.
const FALLBACK_PATHS: &[&str] = &["/usr/local/bin", "/usr/bin", "/opt/consul/bin"];

/// Find an executable by name.
///
/// The system PATH is searched first via the `which` crate. Fact collection
/// often runs from init systems or cron with a minimal PATH, so common
/// install locations are checked afterwards.
pub(crate) fn find_executable(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    find_in_dirs(name, FALLBACK_PATHS.iter().map(|dir| Path::new(*dir)))
}

/// Return the first `dir/name` that exists as a file.
fn find_in_dirs<'a>(name: &str, dirs: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}
