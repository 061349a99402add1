use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Secret;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Host(pub String);

impl From<String> for Host {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Host {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct AccessKeyId(pub Secret);

impl From<String> for AccessKeyId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for AccessKeyId {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct SecretAccessKey(pub Secret);

impl From<String> for SecretAccessKey {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for SecretAccessKey {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Region(pub String);

impl From<String> for Region {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Region {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// A full JDBC connection string. It usually embeds the access keys, so it is kept secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ConnectionString(pub Secret);

impl From<String> for ConnectionString {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for ConnectionString {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
