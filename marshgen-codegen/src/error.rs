//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading or aggregation error.
    #[error("schema error: {0}")]
    Schema(#[from] marshgen_schema::SchemaError),

    /// A singular custom field (or a repeated field without a scalar fallback)
    /// references a type that resolves to nothing.
    #[error("unresolved type '{type_name}' in field '{field}' of message '{message}'")]
    UnresolvedType {
        /// Raw declared type name.
        type_name: String,
        /// Field name.
        field: String,
        /// Full name of the declaring message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an unresolved type error.
    pub fn unresolved(
        type_name: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::UnresolvedType {
            type_name: type_name.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<marshgen_schema::ParseError> for CodegenError {
    fn from(err: marshgen_schema::ParseError) -> Self {
        Self::Schema(err.into())
    }
}
