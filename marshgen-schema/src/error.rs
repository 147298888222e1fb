//! Error types for schema parsing and aggregation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed token or unexpected token.
    #[error("{source_id}:{line}:{column}: {message}")]
    Syntax {
        /// Source identifier.
        source_id: String,
        /// 1-based line.
        line: usize,
        /// 1-based column.
        column: usize,
        /// Error message.
        message: String,
    },

    /// Input ended while more tokens were expected.
    #[error("{source_id}: unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Source identifier.
        source_id: String,
        /// What the parser was looking for.
        expected: String,
    },

    /// A valid but unsupported construct.
    #[error("{source_id}:{line}: unsupported construct '{construct}'")]
    Unsupported {
        /// Source identifier.
        source_id: String,
        /// 1-based line.
        line: usize,
        /// Construct keyword.
        construct: String,
    },

    /// Duplicate definition within one source.
    #[error("{source_id}: duplicate {kind} '{name}'")]
    DuplicateDefinition {
        /// Source identifier.
        source_id: String,
        /// Kind of definition (message, field, enum value, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema aggregation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A source is not syntactically valid.
    #[error("schema parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two sources declare the same full name with different shapes.
    #[error("duplicate type '{full_name}' declared in '{first}' and '{second}'")]
    DuplicateType {
        /// Full schema name.
        full_name: String,
        /// Identifier of the first declaring source.
        first: String,
        /// Identifier of the conflicting source.
        second: String,
    },

    /// A named resource could not be found under any resource root.
    #[error("schema resource '{name}' not found")]
    ResourceNotFound {
        /// Resource name.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates a syntax error.
    pub fn syntax(
        source_id: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            source_id: source_id.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates an unexpected end of input error.
    pub fn eof(source_id: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            source_id: source_id.into(),
            expected: expected.into(),
        }
    }

    /// Creates an unsupported construct error.
    pub fn unsupported(
        source_id: impl Into<String>,
        line: usize,
        construct: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            source_id: source_id.into(),
            line,
            construct: construct.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(
        source_id: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::DuplicateDefinition {
            source_id: source_id.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate type error.
    pub fn duplicate_type(
        full_name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateType {
            full_name: full_name.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = ParseError::syntax("a.proto", 3, 14, "expected ';'");
        assert_eq!(err.to_string(), "a.proto:3:14: expected ';'");
    }

    #[test]
    fn test_schema_error_from_parse() {
        let err: SchemaError = ParseError::eof("a.proto", "'}'").into();
        assert!(matches!(err, SchemaError::Parse(ParseError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_duplicate_type_display() {
        let err = SchemaError::duplicate_type("org.acme.Person", "a.proto", "b.proto");
        assert!(err.to_string().contains("org.acme.Person"));
        assert!(err.to_string().contains("b.proto"));
    }
}
