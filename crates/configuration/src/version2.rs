//! Version 2: structured connection fields, rendered into a fixed connection string template.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::FieldDescriptor;
use crate::connection_string::{self, Property, DRIVER_SCHEME};
use crate::error::{MissingFieldError, UpgradeError};
use crate::values::{
    AccessKeyId, Host, Region, SecretAccessKey, DEFAULT_IDLE_TIMEOUT_SECONDS,
    DEFAULT_MAX_IDLE_CONNECTIONS,
};
use crate::version1;

pub const HOST_FIELD: &str = "host";
pub const ACCESS_KEY_FIELD: &str = "accessKey";
pub const SECRET_KEY_FIELD: &str = "secretKey";
pub const REGION_FIELD: &str = "region";
pub const ALLOW_EXTERNAL_QUERY_FIELD: &str = "allowExternalQuery";

pub const FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor::required(1, HOST_FIELD).with_label("Host"),
    FieldDescriptor::required(2, ACCESS_KEY_FIELD).with_label("Access Key"),
    FieldDescriptor::required(3, SECRET_KEY_FIELD).with_label("Secret Key"),
    FieldDescriptor::required(4, REGION_FIELD).with_label("Region"),
    FieldDescriptor::optional(5, ALLOW_EXTERNAL_QUERY_FIELD)
        .with_label("Grant External Query access"),
];

/// Structured connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// DynamoDB endpoint host, e.g. `dynamodb.us-west-1.amazonaws.com`.
    #[serde(default)]
    pub host: Host,
    #[serde(default)]
    pub access_key: AccessKeyId,
    #[serde(default)]
    pub secret_key: SecretAccessKey,
    #[serde(default)]
    pub region: Region,
    /// Allow raw pass-through queries against the source.
    #[serde(default)]
    pub allow_external_query: bool,
}

impl ParsedConfiguration {
    /// Render `jdbc:dynamodb:Host=..;AccessKey=..;SecretKey=..;Region=..;`.
    ///
    /// Fields are checked in declaration order and the first blank one is reported. Values are
    /// inserted verbatim: a `;` inside a value is not escaped, so it starts a new driver
    /// property. Values come from the source's owner, who can already set any property through
    /// a version 1 connection string.
    pub fn render_connection_string(&self) -> Result<String, MissingFieldError> {
        let host = connection_string::require(HOST_FIELD, &self.host.0)?;
        let access_key = connection_string::require(ACCESS_KEY_FIELD, self.access_key.0.expose())?;
        let secret_key = connection_string::require(SECRET_KEY_FIELD, self.secret_key.0.expose())?;
        let region = connection_string::require(REGION_FIELD, &self.region.0)?;
        Ok(format!(
            "{DRIVER_SCHEME}Host={host};AccessKey={access_key};SecretKey={secret_key};Region={region};"
        ))
    }

    /// Map a version 1 connection string onto structured fields.
    ///
    /// Only `Host`, `Region`, `AccessKey` and `SecretKey` (any case) are understood. Version 2
    /// has no pool settings, so a version 1 configuration with non-default ones is refused
    /// rather than silently losing them.
    pub fn upgrade_from_v1(v1: &version1::ParsedConfiguration) -> Result<Self, UpgradeError> {
        if v1.pool.max_idle_connections != DEFAULT_MAX_IDLE_CONNECTIONS {
            return Err(UpgradeError::CustomPoolSetting(
                version1::MAX_IDLE_CONNECTIONS_FIELD,
            ));
        }
        if v1.pool.idle_timeout_seconds != DEFAULT_IDLE_TIMEOUT_SECONDS {
            return Err(UpgradeError::CustomPoolSetting(
                version1::IDLE_TIMEOUT_SECONDS_FIELD,
            ));
        }

        let body = connection_string::strip_scheme(v1.connection_string.0.expose()).ok_or(
            UpgradeError::UnsupportedScheme {
                expected: DRIVER_SCHEME,
            },
        )?;

        let mut host = None;
        let mut access_key = None;
        let mut secret_key = None;
        let mut region = None;
        for property in connection_string::properties(body) {
            let (position, key, value) = match property {
                Property::Pair {
                    position,
                    key,
                    value,
                } => (position, key, value),
                Property::Malformed { position } => {
                    return Err(UpgradeError::MalformedProperty(position))
                }
            };
            let (name, slot) = match key.to_ascii_lowercase().as_str() {
                "host" => ("Host", &mut host),
                "accesskey" => ("AccessKey", &mut access_key),
                "secretkey" => ("SecretKey", &mut secret_key),
                "region" => ("Region", &mut region),
                _ => return Err(UpgradeError::UnsupportedProperty(position)),
            };
            if slot.replace(value).is_some() {
                return Err(UpgradeError::DuplicateProperty(name));
            }
        }

        Ok(Self {
            host: host.ok_or(UpgradeError::MissingProperty("Host"))?.into(),
            access_key: access_key
                .ok_or(UpgradeError::MissingProperty("AccessKey"))?
                .into(),
            secret_key: secret_key
                .ok_or(UpgradeError::MissingProperty("SecretKey"))?
                .into(),
            region: region.ok_or(UpgradeError::MissingProperty("Region"))?.into(),
            allow_external_query: false,
        })
    }
}
