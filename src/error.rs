//! Error types for calculator construction and dispatch

use thiserror::Error;

/// Errors raised while constructing a calculator from raw request fields.
///
/// All errors are synchronous: validation either fully succeeds (yielding a
/// usable calculator) or fully fails with no instance created. The HTTP
/// collaborator catches these at the request boundary and maps them to
/// client-error responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A required field was missing, non-numeric, non-positive where
    /// positivity is required, or outside a variant-specific bound
    #[error("{0}")]
    Validation(String),

    /// The type tag did not match any known calculator variant
    #[error("Unknown calculator type: {0}")]
    UnknownType(String),
}

impl CalcError {
    /// Build a validation error from any message
    pub fn validation(message: impl Into<String>) -> Self {
        CalcError::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passthrough() {
        let err = CalcError::validation("Years must be a positive number");
        assert_eq!(err.to_string(), "Years must be a positive number");
    }

    #[test]
    fn test_unknown_type_message() {
        let err = CalcError::UnknownType("mortgage".to_string());
        assert_eq!(err.to_string(), "Unknown calculator type: mortgage");
    }
}
