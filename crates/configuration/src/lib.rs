pub mod catalog;
pub mod configuration;
pub mod connection_string;
pub mod error;
pub mod values;
pub mod version1;
pub mod version2;

pub use catalog::{FieldDescriptor, SourceType, SOURCE_TYPE};
pub use configuration::{
    parse_configuration, write_parsed_configuration, ParsedConfiguration, VersionTag,
};
pub use error::MissingFieldError;
pub use values::{
    AccessKeyId, ConnectionString, Host, PoolSettings, Region, Secret, SecretAccessKey,
};
