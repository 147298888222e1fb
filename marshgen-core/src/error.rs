//! Error types for marshalling operations.

use thiserror::Error;

/// Error type raised by marshallers and structured readers/writers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarshalError {
    /// An enum value or ordinal outside the declared set.
    #[error("invalid value '{value}' provided to enum '{enum_name}'")]
    InvalidEnumValue {
        /// Full schema name of the enum.
        enum_name: String,
        /// Offending value or ordinal, rendered as text.
        value: String,
    },

    /// A field held a value of a different kind than requested.
    #[error("field '{field}' holds {actual}, expected {expected}")]
    TypeMismatch {
        /// Field name.
        field: String,
        /// Requested kind.
        expected: String,
        /// Kind actually stored.
        actual: String,
    },
}

impl MarshalError {
    /// Creates an invalid enum value error.
    pub fn invalid_enum_value(enum_name: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidEnumValue {
            enum_name: enum_name.into(),
            value: value.to_string(),
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type alias for marshalling operations.
pub type Result<T> = std::result::Result<T, MarshalError>;
