//! Fact kind enum identifying the version facts this crate can probe.

use strum::IntoEnumIterator;

use crate::Confinement;

/// A fact backed by a version probe.
///
/// Each variant names one external tool whose `--version` output is turned
/// into a fact value, together with the fact name it is published under and
/// the platform confinement that must hold before the probe runs.
///
/// This enum is marked `#[non_exhaustive]` so new tools can be added without
/// breaking callers. Always include a wildcard arm when matching:
///
/// ```rust
/// use consul_version_fact::FactKind;
///
/// fn describe(kind: FactKind) -> &'static str {
///     match kind {
///         FactKind::ConsulVersion => "consul",
///         _ => "something else",
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[non_exhaustive]
pub enum FactKind {
    /// HashiCorp Consul (`consul --version`).
    ConsulVersion,
}

impl FactKind {
    /// The name the fact is published under.
    ///
    /// ```rust
    /// use consul_version_fact::FactKind;
    ///
    /// assert_eq!(FactKind::ConsulVersion.fact_name(), "consul_version");
    /// ```
    pub fn fact_name(&self) -> &'static str {
        match self {
            Self::ConsulVersion => "consul_version",
        }
    }

    /// The executable name to search for in PATH.
    pub fn executable_name(&self) -> &'static str {
        match self {
            Self::ConsulVersion => "consul",
        }
    }

    /// Arguments that make the executable print its version.
    pub fn version_args(&self) -> &'static [&'static str] {
        match self {
            Self::ConsulVersion => &["--version"],
        }
    }

    /// Human-readable name of the probed tool.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ConsulVersion => "Consul",
        }
    }

    /// Preconditions the caller must check before probing.
    pub fn confinements(&self) -> Vec<Confinement> {
        match self {
            Self::ConsulVersion => vec![Confinement::kernel("Linux")],
        }
    }

    /// Iterator over all known fact kinds.
    ///
    /// The CLI registers one provider per kind.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
