//! Host services handed to a source when it is activated.
//!
//! DynamoDB sources carry their keys in their own settings and have no feature switches, so
//! neither service is consulted yet. Both are part of the activation contract so that sources
//! can start using them without changing it.

use ndc_dynamodb_arp_configuration::Secret;

/// Resolves a credential reference to its secret value.
pub trait CredentialsResolver: Send + Sync {
    fn resolve(&self, reference: &str) -> Option<Secret>;
}

/// Read access to the host's runtime options.
pub trait OptionProvider: Send + Sync {
    fn bool_option(&self, name: &str) -> Option<bool>;
}

/// A resolver that knows no credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialsResolver for NoCredentials {
    fn resolve(&self, _reference: &str) -> Option<Secret> {
        None
    }
}

/// A provider with no options set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOptions;

impl OptionProvider for NoOptions {
    fn bool_option(&self, _name: &str) -> Option<bool> {
        None
    }
}
