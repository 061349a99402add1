//! A DynamoDB source for a query-federation engine, reached through a JDBC driver and an ARP
//! dialect description.

pub mod arp;
pub mod connector;
pub mod datasource;
pub mod host;
pub mod plugin;

pub use connector::{ArpConf, PluginConfigError, HIDDEN_SCHEMA};
pub use plugin::{PluginConfigBuilder, PluginDescriptor};

// we expose the configuration crate so that hosts need only depend on this one
pub use ndc_dynamodb_arp_configuration as configuration;
