//! The ARP dialect description for DynamoDB.
//!
//! The description is embedded in the binary, parsed the first time it is asked for, and then
//! shared read-only for the rest of the process.

use std::sync::LazyLock;

use serde::Deserialize;

pub const ARP_FILENAME: &str = "arp/implementation/dynamodb-arp.yaml";

/// Dialect descriptions bundled with the crate, by resource path.
static RESOURCES: &[(&str, &str)] = &[(
    ARP_FILENAME,
    include_str!("../arp/implementation/dynamodb-arp.yaml"),
)];

static ARP_DIALECT: LazyLock<Result<ArpDialect, ArpLoadError>> = LazyLock::new(|| {
    tracing::debug!(resource = ARP_FILENAME, "loading ARP dialect");
    load_arp_file(ARP_FILENAME)
});

/// The DynamoDB dialect, shared by every source in the process.
pub fn dialect() -> Result<&'static ArpDialect, ArpLoadError> {
    ARP_DIALECT.as_ref().map_err(Clone::clone)
}

/// Parse a bundled dialect description.
pub fn load_arp_file(resource_path: &str) -> Result<ArpDialect, ArpLoadError> {
    let contents = RESOURCES
        .iter()
        .find_map(|(path, contents)| (*path == resource_path).then_some(*contents))
        .ok_or_else(|| ArpLoadError::ResourceNotFound(resource_path.to_string()))?;
    parse_arp(resource_path, contents)
}

fn parse_arp(resource_path: &str, contents: &str) -> Result<ArpDialect, ArpLoadError> {
    serde_yaml::from_str(contents).map_err(|error| ArpLoadError::Parse {
        resource_path: resource_path.to_string(),
        message: error.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArpLoadError {
    #[error("ARP resource '{0}' not found")]
    ResourceNotFound(String),
    #[error("unable to parse ARP resource '{resource_path}': {message}")]
    Parse {
        resource_path: String,
        message: String,
    },
}

/// How the engine's SQL maps onto the target system's SQL.
///
/// Only the parts this crate inspects are typed. The relational algebra and expression sections
/// are consumed by the engine's translator and are kept as raw YAML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArpDialect {
    pub metadata: ArpMetadata,
    pub syntax: ArpSyntax,
    pub data_types: DataTypes,
    #[serde(default)]
    pub relational_algebra: serde_yaml::Value,
    #[serde(default)]
    pub expressions: serde_yaml::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArpMetadata {
    pub name: String,
    pub apiname: String,
    pub spec_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArpSyntax {
    pub identifier_quote: String,
    #[serde(default)]
    pub identifier_length_limit: Option<u32>,
    #[serde(default)]
    pub allows_boolean_literal: bool,
    #[serde(default)]
    pub map_boolean_literal_to_bit: bool,
    #[serde(default)]
    pub supports_catalogs: bool,
    #[serde(default)]
    pub supports_schemas: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataTypes {
    pub mappings: Vec<TypeMapping>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeMapping {
    pub source: NamedType,
    /// The engine-side type.
    #[serde(rename = "dremio")]
    pub engine: NamedType,
    #[serde(default)]
    pub required_cast_arguments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedType {
    pub name: String,
}

impl ArpDialect {
    /// The engine type a source type maps to. Source type names are matched ignoring case.
    pub fn engine_type(&self, source_type: &str) -> Option<&str> {
        self.data_types
            .mappings
            .iter()
            .find(|mapping| mapping.source.name.eq_ignore_ascii_case(source_type))
            .map(|mapping| mapping.engine.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dialect_loads() {
        let dialect = dialect().unwrap();
        assert_eq!(dialect.metadata.name, "DYNAMODB");
        assert_eq!(dialect.metadata.apiname, "dynamodb");
        assert_eq!(dialect.syntax.identifier_quote, "\"");
        assert!(!dialect.syntax.supports_schemas);
        assert!(dialect.relational_algebra.get("sort").is_some());
    }

    #[test]
    fn dialect_is_a_process_wide_singleton() {
        let first: &'static ArpDialect = dialect().unwrap();
        let addresses: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| std::ptr::from_ref(dialect().unwrap()) as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for address in addresses {
            assert_eq!(address, std::ptr::from_ref(first) as usize);
        }
    }

    #[test]
    fn maps_source_types_ignoring_case() {
        let dialect = dialect().unwrap();
        assert_eq!(dialect.engine_type("varchar"), Some("varchar"));
        assert_eq!(dialect.engine_type("DOUBLE"), Some("double"));
        assert_eq!(dialect.engine_type("GEOMETRY"), None);
    }

    #[test]
    fn unknown_resource_is_reported() {
        assert_eq!(
            load_arp_file("arp/implementation/other-arp.yaml"),
            Err(ArpLoadError::ResourceNotFound(
                "arp/implementation/other-arp.yaml".into()
            ))
        );
    }

    #[test]
    fn malformed_resource_is_reported() {
        let error = parse_arp("broken.yaml", "metadata: [").unwrap_err();
        assert!(matches!(
            error,
            ArpLoadError::Parse { resource_path, .. } if resource_path == "broken.yaml"
        ));
    }
}
