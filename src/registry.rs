//! Named fact registry with confinement checks.
//!
//! The probe functions know nothing about where their results are published.
//! This module is the adapter that does: providers are registered under a
//! fact name, and the registry only invokes a provider when all of its
//! confinements hold on the current host.

use crate::confine::current_kernel;
use crate::{probe_status, Confinement, FactKind, FactStatus, ProbeOptions};
use async_trait::async_trait;
use futures::future::join_all;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Errors from registry lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("fact `{0}` not found")]
    FactNotFound(String),
}

/// A source of one named fact.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Name the fact is published under.
    fn name(&self) -> String;

    /// Preconditions checked before [`resolve`](Self::resolve) is called.
    fn confinements(&self) -> Vec<Confinement>;

    /// Compute the fact value. `None` means the fact is not available.
    async fn resolve(&self) -> Option<String>;
}

/// A fact backed by the version probe of one [`FactKind`].
///
/// `VersionFact::new(FactKind::ConsulVersion, ..)` is the `consul_version`
/// fact, confined to Linux hosts.
#[derive(Debug, Clone)]
pub struct VersionFact {
    kind: FactKind,
    options: ProbeOptions,
}

impl VersionFact {
    pub fn new(kind: FactKind, options: ProbeOptions) -> Self {
        Self { kind, options }
    }

    pub fn kind(&self) -> FactKind {
        self.kind
    }
}

#[async_trait]
impl FactProvider for VersionFact {
    fn name(&self) -> String {
        self.kind.fact_name().to_owned()
    }

    fn confinements(&self) -> Vec<Confinement> {
        self.kind.confinements()
    }

    async fn resolve(&self) -> Option<String> {
        let status = probe_status(self.kind, &self.options).await;
        if let FactStatus::Unavailable { message, .. } = &status {
            tracing::debug!(fact = self.kind.fact_name(), %message, "probe failed");
        }
        status.value()
    }
}

/// Registered fact providers, keyed by fact name.
pub struct FactRegistry {
    kernel: String,
    providers: HashMap<String, Arc<dyn FactProvider>>,
}

impl FactRegistry {
    /// Registered fact names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Kernel name confinements are evaluated against.
    pub fn kernel(&self) -> &str {
        &self.kernel
    }

    /// Resolve a single fact by name.
    ///
    /// A provider whose confinements do not hold is not invoked and the fact
    /// resolves to `None`.
    pub async fn resolve(&self, name: &str) -> Result<Option<String>, RegistryError> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| RegistryError::FactNotFound(name.to_owned()))?;

        Ok(self.resolve_provider(provider.as_ref()).await)
    }

    /// Resolve every registered fact concurrently.
    pub async fn resolve_all(&self) -> BTreeMap<String, Option<String>> {
        let futures: Vec<_> = self
            .providers
            .iter()
            .map(|(name, provider)| async move {
                (name.clone(), self.resolve_provider(provider.as_ref()).await)
            })
            .collect();

        join_all(futures).await.into_iter().collect()
    }

    async fn resolve_provider(&self, provider: &dyn FactProvider) -> Option<String> {
        let name = provider.name();
        if let Some(unmet) = provider
            .confinements()
            .into_iter()
            .find(|confinement| !self.is_satisfied(confinement))
        {
            tracing::debug!(fact = %name, %unmet, kernel = %self.kernel, "fact confined out");
            return None;
        }

        let value = provider.resolve().await;
        if value.is_none() {
            tracing::debug!(fact = %name, "fact unavailable");
        }
        value
    }

    fn is_satisfied(&self, confinement: &Confinement) -> bool {
        confinement.is_satisfied_by(&self.kernel)
    }
}

/// Builder for [`FactRegistry`].
///
/// ```rust
/// use consul_version_fact::{FactKind, FactRegistryBuilder, ProbeOptions, VersionFact};
///
/// let mut builder = FactRegistryBuilder::new();
/// builder.add_provider(VersionFact::new(FactKind::ConsulVersion, ProbeOptions::default()));
/// let registry = builder.build();
/// assert_eq!(registry.names(), vec!["consul_version".to_string()]);
/// ```
pub struct FactRegistryBuilder {
    kernel: Option<String>,
    providers: Vec<Arc<dyn FactProvider>>,
}

impl Default for FactRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FactRegistryBuilder {
    pub fn new() -> FactRegistryBuilder {
        FactRegistryBuilder {
            kernel: None,
            providers: Vec::new(),
        }
    }

    /// Evaluate confinements against this kernel instead of the running host's.
    pub fn kernel(&mut self, kernel: impl Into<String>) -> &mut FactRegistryBuilder {
        self.kernel = Some(kernel.into());
        self
    }

    /// Register a provider. A later provider with the same name replaces an
    /// earlier one.
    pub fn add_provider(&mut self, provider: impl FactProvider + 'static) -> &mut FactRegistryBuilder {
        self.providers.push(Arc::new(provider));
        self
    }

    pub fn build(self) -> FactRegistry {
        let mut providers: HashMap<String, Arc<dyn FactProvider>> = HashMap::new();

        for provider in self.providers {
            let name = provider.name();
            if providers.insert(name.clone(), provider).is_some() {
                tracing::warn!(fact = %name, "fact registered twice, keeping the last provider");
            }
        }

        FactRegistry {
            kernel: self
                .kernel
                .unwrap_or_else(|| current_kernel().to_owned()),
            providers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_provider(name: &'static str, kernel: &'static str) -> MockFactProvider {
        let mut provider = MockFactProvider::new();
        provider.expect_name().returning(move || name.to_owned());
        provider
            .expect_confinements()
            .returning(move || vec![Confinement::kernel(kernel)]);
        provider
    }

    #[test]
    fn test_registry_building() {
        let mut builder = FactRegistryBuilder::new();
        builder.add_provider(mock_provider("zookeeper_version", "Linux"));
        builder.add_provider(mock_provider("consul_version", "Linux"));

        let registry = builder.build();

        assert_eq!(
            registry.names(),
            vec!["consul_version".to_owned(), "zookeeper_version".to_owned()]
        );
    }

    #[test]
    fn test_registry_defaults_to_host_kernel() {
        let registry = FactRegistryBuilder::new().build();
        assert_eq!(registry.kernel(), current_kernel());
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut builder = FactRegistryBuilder::new();
        builder.add_provider(mock_provider("consul_version", "Linux"));
        let registry = builder.build();

        let error = registry.resolve("nomad_version").await.unwrap_err();
        assert_eq!(error, RegistryError::FactNotFound("nomad_version".to_owned()));
    }

    #[tokio::test]
    async fn test_resolve_invokes_provider_when_confinement_holds() {
        let mut provider = mock_provider("consul_version", "Linux");
        provider
            .expect_resolve()
            .times(1)
            .returning(|| Some("1.9.3".to_owned()));

        let mut builder = FactRegistryBuilder::new();
        builder.kernel("linux").add_provider(provider);
        let registry = builder.build();

        let value = registry.resolve("consul_version").await.unwrap();
        assert_eq!(value, Some("1.9.3".to_owned()));
    }

    #[tokio::test]
    async fn test_resolve_skips_confined_provider() {
        let mut provider = mock_provider("consul_version", "Linux");
        provider.expect_resolve().times(0);

        let mut builder = FactRegistryBuilder::new();
        builder.kernel("Darwin").add_provider(provider);
        let registry = builder.build();

        let value = registry.resolve("consul_version").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_resolve_all() {
        let mut consul = mock_provider("consul_version", "Linux");
        consul
            .expect_resolve()
            .times(1)
            .returning(|| Some("1.9.3".to_owned()));
        let mut missing = mock_provider("vault_version", "Linux");
        missing.expect_resolve().times(1).returning(|| None);
        let mut confined = mock_provider("brew_version", "Darwin");
        confined.expect_resolve().times(0);

        let mut builder = FactRegistryBuilder::new();
        builder
            .kernel("Linux")
            .add_provider(consul)
            .add_provider(missing)
            .add_provider(confined);
        let registry = builder.build();

        let facts = registry.resolve_all().await;

        assert_eq!(facts.len(), 3);
        assert_eq!(facts["consul_version"], Some("1.9.3".to_owned()));
        assert_eq!(facts["vault_version"], None);
        assert_eq!(facts["brew_version"], None);
    }

    #[tokio::test]
    async fn test_later_registration_wins() {
        let mut first = mock_provider("consul_version", "Linux");
        first.expect_resolve().times(0);
        let mut second = mock_provider("consul_version", "Linux");
        second
            .expect_resolve()
            .times(1)
            .returning(|| Some("1.17.0".to_owned()));

        let mut builder = FactRegistryBuilder::new();
        builder.kernel("Linux").add_provider(first).add_provider(second);
        let registry = builder.build();

        assert_eq!(registry.names().len(), 1);
        assert_eq!(
            registry.resolve("consul_version").await.unwrap(),
            Some("1.17.0".to_owned())
        );
    }

    #[test]
    fn test_consul_fact_metadata() {
        let fact = VersionFact::new(FactKind::ConsulVersion, ProbeOptions::default());
        assert_eq!(fact.kind(), FactKind::ConsulVersion);
        assert_eq!(fact.name(), "consul_version");
        assert_eq!(fact.confinements(), vec![Confinement::kernel("Linux")]);
    }

    #[tokio::test]
    async fn test_consul_fact_missing_executable() {
        let fact = VersionFact::new(
            FactKind::ConsulVersion,
            ProbeOptions {
                executable: Some("/nonexistent/consul".into()),
                ..Default::default()
            },
        );
        assert_eq!(fact.resolve().await, None);
    }
}
