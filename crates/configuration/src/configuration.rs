//! The persisted configuration, across every version of its format.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::catalog::FieldDescriptor;
use crate::error::{
    MissingFieldError, ParseConfigurationError, UpgradeError, WriteParsedConfigurationError,
};
use crate::values::PoolSettings;
use crate::{version1, version2};

pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";

/// The settings of one DynamoDB source, as the host stores them.
///
/// Each version is responsible for interpreting its own serialized format. Version 2 is the
/// current one; version 1 is still read so that existing sources keep working, and can be
/// moved forward with [`ParsedConfiguration::upgrade`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum ParsedConfiguration {
    #[serde(rename = "1")]
    Version1(version1::ParsedConfiguration),
    #[serde(rename = "2")]
    Version2(version2::ParsedConfiguration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VersionTag {
    Version1,
    Version2,
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionTag::Version1 => f.write_str("1"),
            VersionTag::Version2 => f.write_str("2"),
        }
    }
}

impl ParsedConfiguration {
    /// An empty configuration in the current version.
    pub fn initial() -> Self {
        ParsedConfiguration::Version2(version2::ParsedConfiguration::default())
    }

    pub fn version(&self) -> VersionTag {
        match self {
            ParsedConfiguration::Version1(_) => VersionTag::Version1,
            ParsedConfiguration::Version2(_) => VersionTag::Version2,
        }
    }

    /// Render the connection string handed to the JDBC driver.
    ///
    /// Pure: nothing is cached, and every call re-checks the required fields.
    pub fn render_connection_string(&self) -> Result<String, MissingFieldError> {
        match self {
            ParsedConfiguration::Version1(config) => config.render_connection_string(),
            ParsedConfiguration::Version2(config) => config.render_connection_string(),
        }
    }

    pub fn pool_settings(&self) -> PoolSettings {
        match self {
            ParsedConfiguration::Version1(config) => config.pool_settings(),
            ParsedConfiguration::Version2(_) => PoolSettings::default(),
        }
    }

    pub fn allow_external_query(&self) -> bool {
        match self {
            ParsedConfiguration::Version1(_) => false,
            ParsedConfiguration::Version2(config) => config.allow_external_query,
        }
    }

    /// The persisted fields of this version, in tag order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        match self {
            ParsedConfiguration::Version1(_) => &version1::FIELDS,
            ParsedConfiguration::Version2(_) => &version2::FIELDS,
        }
    }

    /// Move the configuration to the current version.
    pub fn upgrade(self) -> Result<ParsedConfiguration, UpgradeError> {
        match self {
            ParsedConfiguration::Version1(v1) => {
                let v2 = version2::ParsedConfiguration::upgrade_from_v1(&v1)?;
                tracing::debug!(
                    from = %VersionTag::Version1,
                    to = %VersionTag::Version2,
                    "upgraded configuration"
                );
                Ok(ParsedConfiguration::Version2(v2))
            }
            current @ ParsedConfiguration::Version2(_) => Ok(current),
        }
    }
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path> + Send,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    tracing::debug!(
        version = %parsed_config.version(),
        path = %configuration_file.display(),
        "parsed configuration"
    );
    Ok(parsed_config)
}

/// Write the parsed configuration, and the JSON schema describing it, into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: &ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}
