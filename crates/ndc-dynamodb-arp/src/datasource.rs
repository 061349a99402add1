//! Deferred creation of the pooled JDBC datasource.
//!
//! Nothing here opens a connection. The host's pool manager decides when a datasource is needed
//! and calls [`DataSourceFactory::create_data_source`], passing the pool implementation it owns.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use ndc_dynamodb_arp_configuration::{MissingFieldError, ParsedConfiguration, Secret};
use thiserror::Error;
use tracing::{info_span, warn};

/// JDBC driver class for the Simba DynamoDB driver.
pub const DRIVER: &str = "com.simba.dynamodb.jdbc.Driver";

/// How the pool manages transactions on its connections. Only the mode DynamoDB sources use
/// is listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommitMode {
    /// Leave the driver's own default in place.
    #[default]
    DriverSpecified,
}

/// Everything the pool needs besides the driver and connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolOptions {
    pub username: Option<String>,
    pub password: Option<Secret>,
    pub properties: BTreeMap<String, String>,
    pub commit_mode: CommitMode,
    pub max_idle_connections: u32,
    pub idle_timeout: Duration,
}

/// A pooled datasource that owns physical connections until closed.
pub trait CloseableDataSource: Send + Sync {
    fn close(&self) -> Result<(), DataSourceError>;
}

/// The host's pooled datasource implementation.
pub trait DataSources: Send + Sync {
    fn new_generic_connection_pool_data_source(
        &self,
        driver: &str,
        connection_string: &str,
        options: &PoolOptions,
    ) -> Result<Box<dyn CloseableDataSource>, DataSourceError>;
}

/// Creates a datasource when the host asks for one.
pub trait DataSourceFactory: Send + Sync {
    fn create_data_source(
        &self,
        data_sources: &dyn DataSources,
    ) -> Result<Box<dyn CloseableDataSource>, DataSourceError>;
}

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error("unable to create connection pool: {0}")]
    Pool(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds a datasource from a snapshot of a source's configuration.
///
/// The connection string is rendered on every call, so a blank field is reported each time a
/// datasource is requested rather than once at construction.
#[derive(Debug, Clone)]
pub struct DynamoDbDataSourceFactory {
    configuration: Arc<ParsedConfiguration>,
}

impl DynamoDbDataSourceFactory {
    pub fn new(configuration: Arc<ParsedConfiguration>) -> Self {
        Self { configuration }
    }

    /// Pool options for this source. Credentials live in the connection string.
    pub fn pool_options(&self) -> PoolOptions {
        let pool = self.configuration.pool_settings();
        PoolOptions {
            username: None,
            password: None,
            properties: BTreeMap::new(),
            commit_mode: CommitMode::DriverSpecified,
            max_idle_connections: pool.max_idle_connections,
            idle_timeout: pool.idle_timeout(),
        }
    }
}

impl DataSourceFactory for DynamoDbDataSourceFactory {
    fn create_data_source(
        &self,
        data_sources: &dyn DataSources,
    ) -> Result<Box<dyn CloseableDataSource>, DataSourceError> {
        let span = info_span!(
            "Create data source",
            driver = DRIVER,
            version = %self.configuration.version()
        );
        let _enter = span.enter();

        let connection_string = self
            .configuration
            .render_connection_string()
            .inspect_err(|error| warn!(field = error.field, "configuration is incomplete"))?;

        data_sources.new_generic_connection_pool_data_source(
            DRIVER,
            &connection_string,
            &self.pool_options(),
        )
    }
}
