//! Errors that can be thrown when processing configuration.

/// A required field was empty or whitespace-only when a connection string was requested.
///
/// Only the field name is carried; the value never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing required field '{field}'")]
pub struct MissingFieldError {
    pub field: &'static str,
}

/// The error type for errors that may be thrown when upgrading an older configuration version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpgradeError {
    #[error("connection string must start with '{expected}'")]
    UnsupportedScheme { expected: &'static str },
    /// Properties are numbered from 1 and reported by position, since their text may hold a
    /// piece of a secret.
    #[error("connection string property #{0} is not of the form Key=Value")]
    MalformedProperty(usize),
    #[error(
        "connection string property #{0} has no equivalent in the current configuration version"
    )]
    UnsupportedProperty(usize),
    #[error("connection string is missing the '{0}' property")]
    MissingProperty(&'static str),
    #[error("connection string sets '{0}' more than once")]
    DuplicateProperty(&'static str),
    #[error("pool setting '{0}' differs from its default and cannot be carried over")]
    CustomPoolSetting(&'static str),
}

/// The errors that can be thrown when parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: std::path::PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The errors that can be thrown when writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
