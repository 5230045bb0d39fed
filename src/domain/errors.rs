//! Domain validation errors.

use std::fmt;

/// Errors that can occur when validating an import candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required identity field is absent, null, empty, `0` or `false`.
    MissingField(&'static str),

    /// A required identity field holds an array or object.
    UnsupportedValue(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field: {}", field),
            Self::UnsupportedValue(field) => {
                write!(f, "Unsupported value for field: {}", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
