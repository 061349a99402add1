use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_IDLE_CONNECTIONS: u32 = 8;
pub const DEFAULT_IDLE_TIMEOUT_SECONDS: u64 = 60;

/// Settings handed to the host's connection pool. They do not affect metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolSettings {
    /// Maximum number of idle connections kept in the pool.
    #[serde(default = "max_idle_connections_default")]
    pub max_idle_connections: u32,
    /// Seconds an idle connection is kept before it is closed.
    #[serde(default = "idle_timeout_seconds_default")]
    pub idle_timeout_seconds: u64,
}

impl Default for PoolSettings {
    fn default() -> PoolSettings {
        PoolSettings {
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
            idle_timeout_seconds: DEFAULT_IDLE_TIMEOUT_SECONDS,
        }
    }
}

impl PoolSettings {
    pub fn is_default(&self) -> bool {
        *self == PoolSettings::default()
    }

    pub fn idle_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.idle_timeout_seconds)
    }
}

fn max_idle_connections_default() -> u32 {
    PoolSettings::default().max_idle_connections
}

fn idle_timeout_seconds_default() -> u64 {
    PoolSettings::default().idle_timeout_seconds
}
