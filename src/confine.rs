//! Platform confinement evaluated before a fact is probed.

use std::fmt;

/// A precondition restricting when a fact provider runs.
///
/// Confinements are checked by the caller (see [`FactRegistry`](crate::FactRegistry)),
/// never by the probe itself. [`is_satisfied_by`](Self::is_satisfied_by)
/// ignores case when matching the host, so `Kernel("Linux")` holds on a host
/// reporting `linux`. Equality between confinements does not ignore case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Confinement {
    /// The host kernel must match the given name (e.g. `Linux`, `Darwin`).
    Kernel(String),
}

impl Confinement {
    /// Shorthand for [`Confinement::Kernel`].
    pub fn kernel(name: impl Into<String>) -> Self {
        Self::Kernel(name.into())
    }

    /// Whether this confinement holds on a host running `kernel`.
    ///
    /// ```rust
    /// use consul_version_fact::Confinement;
    ///
    /// let linux_only = Confinement::kernel("Linux");
    /// assert!(linux_only.is_satisfied_by("linux"));
    /// assert!(!linux_only.is_satisfied_by("Darwin"));
    /// ```
    pub fn is_satisfied_by(&self, kernel: &str) -> bool {
        match self {
            Self::Kernel(expected) => expected.eq_ignore_ascii_case(kernel),
        }
    }
}

impl fmt::Display for Confinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kernel(expected) => write!(f, "kernel == {}", expected),
        }
    }
}

/// Kernel name of the running host, spelled the way Facter reports it.
pub fn current_kernel() -> &'static str {
    kernel_name(std::env::consts::OS)
}

fn kernel_name(os: &'static str) -> &'static str {
    match os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        // Facter reports windows in lowercase.
        "windows" => "windows",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_match_ignores_case() {
        let confinement = Confinement::kernel("Linux");
        assert!(confinement.is_satisfied_by("Linux"));
        assert!(confinement.is_satisfied_by("LINUX"));
        assert!(confinement.is_satisfied_by("linux"));
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(Confinement::kernel("linux"), Confinement::kernel("Linux"));
        assert!(Confinement::kernel("linux").is_satisfied_by("Linux"));
    }

    #[test]
    fn test_kernel_mismatch() {
        let confinement = Confinement::kernel("Linux");
        assert!(!confinement.is_satisfied_by("Darwin"));
        assert!(!confinement.is_satisfied_by("windows"));
        assert!(!confinement.is_satisfied_by(""));
    }

    #[test]
    fn test_kernel_names() {
        assert_eq!(kernel_name("linux"), "Linux");
        assert_eq!(kernel_name("macos"), "Darwin");
        assert_eq!(kernel_name("freebsd"), "FreeBSD");
        assert_eq!(kernel_name("solaris"), "SunOS");
        assert_eq!(kernel_name("windows"), "windows");
        assert_eq!(kernel_name("haiku"), "haiku");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_current_kernel_on_linux() {
        assert_eq!(current_kernel(), "Linux");
    }

    #[test]
    fn test_display() {
        assert_eq!(Confinement::kernel("Linux").to_string(), "kernel == Linux");
    }
}
