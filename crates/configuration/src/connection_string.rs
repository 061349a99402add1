//! Pieces shared by every way of producing a DynamoDB JDBC connection string.

use crate::error::MissingFieldError;

/// Scheme every DynamoDB JDBC connection string starts with.
pub const DRIVER_SCHEME: &str = "jdbc:dynamodb:";

/// Separates `Key=Value` properties, and terminates a rendered connection string.
pub const SEPARATOR: char = ';';

/// Return the value if it has any non-whitespace content.
pub(crate) fn require<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, MissingFieldError> {
    if value.trim().is_empty() {
        Err(MissingFieldError { field })
    } else {
        Ok(value)
    }
}

/// Strip the driver scheme, ignoring ASCII case.
pub(crate) fn strip_scheme(connection_string: &str) -> Option<&str> {
    let scheme = connection_string.get(..DRIVER_SCHEME.len())?;
    scheme
        .eq_ignore_ascii_case(DRIVER_SCHEME)
        .then(|| &connection_string[DRIVER_SCHEME.len()..])
}

/// A `Key=Value` property, or a segment that is not one. Positions count from 1.
pub(crate) enum Property<'a> {
    Pair {
        position: usize,
        key: &'a str,
        value: &'a str,
    },
    Malformed {
        position: usize,
    },
}

/// Split the part after the scheme into properties. Empty segments are skipped.
pub(crate) fn properties(body: &str) -> impl Iterator<Item = Property<'_>> {
    body.split(SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(index, segment)| (index + 1, segment))
        .map(|(position, segment)| match segment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Property::Pair {
                position,
                key: key.trim(),
                value: value.trim(),
            },
            _ => Property::Malformed { position },
        })
}
