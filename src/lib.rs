//! # consul-version-fact
//!
//! Reports the installed Consul version as a host fact.
//!
//! The crate runs `consul --version`, takes the second token of the first
//! output line and removes every `v` from it, so `Consul v1.9.3 (abcdef1)`
//! becomes `1.9.3`. Any failure yields `None`: a missing fact means the tool
//! is not available on this host.
//!
//! The probe itself is a plain function. Registration under the
//! `consul_version` name and the Linux-only confinement live in the
//! [`FactRegistry`] adapter.
//!
//! ## Features
//!
//! - `probe()` async function returning the normalized version
//! - `extract_version()` / `normalize()` for parsing captured output
//! - `FactStatus` with the cause of an unavailable fact, for diagnostics
//! - `FactRegistry` resolving named, confined fact providers
//!
//! ## Example
//!
//! ```rust,no_run
//! use consul_version_fact::{probe, FactKind, FactRegistryBuilder, ProbeOptions, VersionFact};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Call the probe directly
//!     if let Some(version) = probe().await {
//!         println!("consul {}", version);
//!     }
//!
//!     // Or resolve it as a confined fact
//!     let mut builder = FactRegistryBuilder::new();
//!     builder.add_provider(VersionFact::new(FactKind::ConsulVersion, ProbeOptions::default()));
//!     let registry = builder.build();
//!     for (name, value) in registry.resolve_all().await {
//!         println!("{} => {:?}", name, value);
//!     }
//! }
//! ```

mod confine;
mod fact_kind;
mod fact_status;
mod options;
mod probe;
mod registry;
mod resolution;

pub use confine::{current_kernel, Confinement};
pub use fact_kind::FactKind;
pub use fact_status::{FactStatus, ProbeError, ResolvedFact};
pub use options::ProbeOptions;
pub use probe::{probe, probe_path, probe_status, probe_with_options};
pub use registry::{FactProvider, FactRegistry, FactRegistryBuilder, RegistryError, VersionFact};
pub use resolution::{extract_version, normalize};
