pub mod connection_info;
mod pool_settings;
mod secret;

pub use connection_info::{AccessKeyId, ConnectionString, Host, Region, SecretAccessKey};
pub use pool_settings::{PoolSettings, DEFAULT_IDLE_TIMEOUT_SECONDS, DEFAULT_MAX_IDLE_CONNECTIONS};
pub use secret::Secret;
