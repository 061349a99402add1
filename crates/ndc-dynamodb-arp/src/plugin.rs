//! The plugin descriptor the host activates a source from, and the builder that assembles it.

use std::sync::Arc;

use thiserror::Error;

use crate::arp::ArpDialect;
use crate::datasource::DataSourceFactory;

/// Assembles a [`PluginDescriptor`].
///
/// Every step consumes the builder and returns the updated one; nothing is shared with the
/// descriptor it eventually builds.
#[derive(Clone, Default)]
pub struct PluginConfigBuilder {
    dialect: Option<&'static ArpDialect>,
    datasource_factory: Option<Arc<dyn DataSourceFactory>>,
    hidden_schemas: Vec<String>,
    external_query_allowed: bool,
}

impl PluginConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dialect(self, dialect: &'static ArpDialect) -> Self {
        Self {
            dialect: Some(dialect),
            ..self
        }
    }

    #[must_use]
    pub fn with_datasource_factory(self, factory: Arc<dyn DataSourceFactory>) -> Self {
        Self {
            datasource_factory: Some(factory),
            ..self
        }
    }

    #[must_use]
    pub fn clear_hidden_schemas(self) -> Self {
        Self {
            hidden_schemas: Vec::new(),
            ..self
        }
    }

    /// Hide a schema from catalog listings. Adding the same name twice has no effect.
    #[must_use]
    pub fn add_hidden_schema(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.hidden_schemas.contains(&name) {
            self.hidden_schemas.push(name);
        }
        self
    }

    #[must_use]
    pub fn with_external_query_allowed(self, allowed: bool) -> Self {
        Self {
            external_query_allowed: allowed,
            ..self
        }
    }

    pub fn build(self) -> Result<PluginDescriptor, BuildError> {
        Ok(PluginDescriptor {
            dialect: self.dialect.ok_or(BuildError::MissingDialect)?,
            datasource_factory: self
                .datasource_factory
                .ok_or(BuildError::MissingDatasourceFactory)?,
            hidden_schemas: self.hidden_schemas,
            external_query_allowed: self.external_query_allowed,
        })
    }
}

impl std::fmt::Debug for PluginConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginConfigBuilder")
            .field("dialect", &self.dialect.map(|d| &d.metadata.name))
            .field("has_datasource_factory", &self.datasource_factory.is_some())
            .field("hidden_schemas", &self.hidden_schemas)
            .field("external_query_allowed", &self.external_query_allowed)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("plugin configuration has no dialect")]
    MissingDialect,
    #[error("plugin configuration has no datasource factory")]
    MissingDatasourceFactory,
}

/// A fully configured source, ready for the host to activate.
#[derive(Clone)]
pub struct PluginDescriptor {
    dialect: &'static ArpDialect,
    datasource_factory: Arc<dyn DataSourceFactory>,
    hidden_schemas: Vec<String>,
    external_query_allowed: bool,
}

impl PluginDescriptor {
    pub fn dialect(&self) -> &'static ArpDialect {
        self.dialect
    }

    /// Invoked by the host's pool manager when a connection is actually needed.
    pub fn datasource_factory(&self) -> &Arc<dyn DataSourceFactory> {
        &self.datasource_factory
    }

    pub fn hidden_schemas(&self) -> &[String] {
        &self.hidden_schemas
    }

    pub fn is_hidden_schema(&self, name: &str) -> bool {
        self.hidden_schemas.iter().any(|schema| schema == name)
    }

    pub fn external_query_allowed(&self) -> bool {
        self.external_query_allowed
    }
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("dialect", &self.dialect.metadata.name)
            .field("hidden_schemas", &self.hidden_schemas)
            .field("external_query_allowed", &self.external_query_allowed)
            .finish_non_exhaustive()
    }
}
