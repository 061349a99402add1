//! Turning a source's settings into a plugin descriptor.

use std::sync::Arc;

use ndc_dynamodb_arp_configuration::{ParsedConfiguration, SOURCE_TYPE};
use thiserror::Error;

use crate::arp::{self, ArpDialect, ArpLoadError};
use crate::datasource::DynamoDbDataSourceFactory;
use crate::host::{CredentialsResolver, OptionProvider};
use crate::plugin::{BuildError, PluginConfigBuilder, PluginDescriptor};

/// Schema hidden from catalog listings.
pub const HIDDEN_SCHEMA: &str = "SYSTEM";

/// A source configuration whose SQL is translated through an ARP dialect description.
pub trait ArpConf {
    fn dialect(&self) -> Result<&'static ArpDialect, ArpLoadError>;

    /// Configure `builder` for this source.
    ///
    /// Connection settings are not validated here: the datasource factory renders the connection
    /// string when the host first asks for a datasource, and reports missing fields then.
    fn build_plugin_descriptor(
        &self,
        builder: PluginConfigBuilder,
        credentials: &dyn CredentialsResolver,
        options: &dyn OptionProvider,
    ) -> Result<PluginDescriptor, PluginConfigError>;
}

impl ArpConf for ParsedConfiguration {
    fn dialect(&self) -> Result<&'static ArpDialect, ArpLoadError> {
        arp::dialect()
    }

    #[tracing::instrument(
        name = "Build plugin descriptor",
        skip_all,
        fields(source_type = SOURCE_TYPE.value, version = %self.version())
    )]
    fn build_plugin_descriptor(
        &self,
        builder: PluginConfigBuilder,
        _credentials: &dyn CredentialsResolver,
        _options: &dyn OptionProvider,
    ) -> Result<PluginDescriptor, PluginConfigError> {
        let factory = DynamoDbDataSourceFactory::new(Arc::new(self.clone()));

        let builder = builder
            .with_dialect(self.dialect()?)
            .with_datasource_factory(Arc::new(factory))
            .clear_hidden_schemas()
            .add_hidden_schema(HIDDEN_SCHEMA);

        let builder = match self {
            ParsedConfiguration::Version1(_) => builder,
            ParsedConfiguration::Version2(config) => {
                builder.with_external_query_allowed(config.allow_external_query)
            }
        };

        let descriptor = builder.build()?;
        tracing::debug!(
            external_query_allowed = descriptor.external_query_allowed(),
            "built plugin descriptor"
        );
        Ok(descriptor)
    }
}

#[derive(Debug, Error)]
pub enum PluginConfigError {
    #[error("unable to load dialect: {0}")]
    Dialect(#[from] ArpLoadError),
    #[error(transparent)]
    Build(#[from] BuildError),
}
