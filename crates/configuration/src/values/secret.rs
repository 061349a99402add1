use schemars::JsonSchema;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// A sensitive configuration value.
///
/// The value is written as-is to the persisted configuration, but it is never printed by
/// `Debug`, so it stays out of logs and error messages.
#[derive(Clone, JsonSchema)]
pub struct Secret(#[schemars(with = "String")] SecretString);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Access the underlying value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.expose().trim().is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

impl Default for Secret {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Secret {}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for Secret {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::Secret;

    #[test]
    fn debug_output_is_redacted() {
        let secret = Secret::from("SECRET123");
        let printed = format!("{secret:?}");
        assert_eq!(printed, "Secret([REDACTED])");
        assert!(!printed.contains("SECRET123"));
    }

    #[test]
    fn serializes_the_plain_value() {
        let secret = Secret::from("abc");
        assert_eq!(serde_json::to_string(&secret).unwrap(), r#""abc""#);
        let back: Secret = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(back, secret);
    }

    #[test]
    fn whitespace_is_blank() {
        assert!(Secret::from("").is_blank());
        assert!(Secret::from(" \t").is_blank());
        assert!(!Secret::from("x").is_blank());
    }
}
