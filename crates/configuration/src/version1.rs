//! Version 1: the user supplies the whole JDBC connection string.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::FieldDescriptor;
use crate::connection_string::{self, SEPARATOR};
use crate::error::MissingFieldError;
use crate::values::{ConnectionString, PoolSettings};

pub const CONNECTION_STRING_FIELD: &str = "connectionString";
pub const MAX_IDLE_CONNECTIONS_FIELD: &str = "maxIdleConnections";
pub const IDLE_TIMEOUT_SECONDS_FIELD: &str = "idleTimeoutSeconds";

const CONNECTION_STRING_LABEL: &str = "JDBC Connection String Example:\n\
    jdbc:dynamodb:Host=dynamodb.us-west-1.amazonaws.com;\
    Region=us-west-1;\
    AccessKey=ABCABCABC123ABCABC45;\
    SecretKey=abCD+E1f2Gxhi3J4klmN/OP5QrSTuvwXYzabcdEF";

pub const FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::required(1, CONNECTION_STRING_FIELD).with_label(CONNECTION_STRING_LABEL),
    FieldDescriptor::optional(2, MAX_IDLE_CONNECTIONS_FIELD)
        .with_label("Maximum idle connections")
        .not_metadata_impacting(),
    FieldDescriptor::optional(3, IDLE_TIMEOUT_SECONDS_FIELD)
        .with_label("Connection idle time (s)")
        .not_metadata_impacting(),
];

/// Connection-string-first settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Full JDBC connection string, e.g.
    /// `jdbc:dynamodb:Host=dynamodb.us-west-1.amazonaws.com;Region=us-west-1;AccessKey=...;SecretKey=...`
    #[serde(default)]
    pub connection_string: ConnectionString,
    /// `maxIdleConnections` and `idleTimeoutSeconds`, stored alongside the connection string.
    #[serde(flatten)]
    pub pool: PoolSettings,
}

impl ParsedConfiguration {
    /// A configuration with the given connection string and default pool settings.
    pub fn new(connection_string: impl Into<ConnectionString>) -> Self {
        Self {
            connection_string: connection_string.into(),
            pool: PoolSettings::default(),
        }
    }

    /// The user's connection string with a separator appended.
    ///
    /// The separator is appended unconditionally, so an input that already ends in `;` comes
    /// back ending in `;;`.
    pub fn render_connection_string(&self) -> Result<String, MissingFieldError> {
        let connection_string =
            connection_string::require(CONNECTION_STRING_FIELD, self.connection_string.0.expose())?;
        Ok(format!("{connection_string}{SEPARATOR}"))
    }

    pub fn pool_settings(&self) -> PoolSettings {
        self.pool
    }
}
