//! Schema sources.
//!
//! A source is a named classpath-style resource, a file on disk, a raw text
//! payload or an already-parsed [`SchemaFile`].

use crate::builtin::{BUILTIN_IDENTIFIER, BUILTIN_SCHEMA};
use crate::error::{ParseError, SchemaError};
use crate::parser::parse_schema;
use crate::types::SchemaFile;
use crate::validation::validate_file;
use std::path::{Path, PathBuf};

/// A schema input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Resource name looked up under the aggregator's resource roots.
    Resource(String),
    /// Path to a schema file.
    File(PathBuf),
    /// Raw schema text with its identifier.
    Text {
        /// Source identifier.
        identifier: String,
        /// Schema content.
        content: String,
    },
    /// Pre-parsed schema file.
    Parsed(SchemaFile),
}

impl SchemaSource {
    /// Creates a resource source.
    #[must_use]
    pub fn resource(name: impl Into<String>) -> Self {
        Self::Resource(name.into())
    }

    /// Creates a file source.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Creates a text source with a synthetic random identifier.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            identifier: format!("{}.proto", uuid::Uuid::new_v4()),
            content: content.into(),
        }
    }

    /// Creates a text source with an explicit identifier.
    #[must_use]
    pub fn named_text(identifier: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Text {
            identifier: identifier.into(),
            content: content.into(),
        }
    }

    /// Loads, parses and validates the source.
    ///
    /// # Errors
    /// Returns `SchemaError` if the source cannot be read, parsed or validated.
    pub fn load(&self, resource_roots: &[PathBuf]) -> Result<SchemaFile, SchemaError> {
        let file = match self {
            Self::Resource(name) => load_resource(name, resource_roots)?,
            Self::File(path) => {
                let identifier = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                parse_schema(&identifier, &read_utf8(path)?)?
            }
            Self::Text {
                identifier,
                content,
            } => parse_schema(identifier, content)?,
            Self::Parsed(file) => file.clone(),
        };

        validate_file(&file)?;
        Ok(file)
    }
}

fn load_resource(name: &str, roots: &[PathBuf]) -> Result<SchemaFile, SchemaError> {
    if name == BUILTIN_IDENTIFIER {
        return Ok(parse_schema(BUILTIN_IDENTIFIER, BUILTIN_SCHEMA)?);
    }

    let path = roots
        .iter()
        .map(|root| root.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| SchemaError::ResourceNotFound {
            name: name.to_string(),
        })?;

    Ok(parse_schema(name, &read_utf8(&path)?)?)
}

fn read_utf8(path: &Path) -> Result<String, SchemaError> {
    let bytes = std::fs::read(path)?;
    let text = std::str::from_utf8(&bytes).map_err(ParseError::from)?;
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_source_random_identifier() {
        let a = SchemaSource::text("package a;");
        let b = SchemaSource::text("package a;");
        assert_ne!(a, b);

        let SchemaSource::Text { identifier, .. } = a else {
            panic!("expected text source");
        };
        assert!(identifier.ends_with(".proto"));
    }

    #[test]
    fn test_load_named_text() {
        let source = SchemaSource::named_text("order.proto", "package shop; message Order {}");
        let file = source.load(&[]).expect("Failed to load");
        assert_eq!(file.identifier, "order.proto");
        assert_eq!(file.messages[0].full_name, "shop.Order");
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("order.proto");
        std::fs::write(&path, "package shop; enum State { OPEN = 0; }").expect("write");

        let file = SchemaSource::file(&path).load(&[]).expect("Failed to load");
        assert_eq!(file.identifier, "order.proto");
        assert_eq!(file.enums[0].full_name, "shop.State");
    }

    #[test]
    fn test_load_resource_from_roots() {
        let empty = tempfile::tempdir().expect("Failed to create temp dir");
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("shop")).expect("mkdir");
        std::fs::write(root.path().join("shop/order.proto"), "package shop;").expect("write");

        let roots = vec![empty.path().to_path_buf(), root.path().to_path_buf()];
        let file = SchemaSource::resource("shop/order.proto")
            .load(&roots)
            .expect("Failed to load");
        assert_eq!(file.identifier, "shop/order.proto");
        assert_eq!(file.package, "shop");
    }

    #[test]
    fn test_load_missing_resource() {
        let err = SchemaSource::resource("missing.proto").load(&[]).unwrap_err();
        assert!(matches!(err, SchemaError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_load_builtin_resource() {
        let file = SchemaSource::resource(BUILTIN_IDENTIFIER)
            .load(&[])
            .expect("Failed to load");
        assert_eq!(file.package, crate::builtin::BUILTIN_PACKAGE);
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("bad.proto");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");

        let err = SchemaSource::file(&path).load(&[]).unwrap_err();
        assert!(matches!(err, SchemaError::Parse(ParseError::Utf8(_))));
    }

    #[test]
    fn test_load_validates() {
        let source = SchemaSource::named_text("dup.proto", "enum E { A = 1; B = 1; }");
        let err = source.load(&[]).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Parse(ParseError::DuplicateDefinition { .. })
        ));
    }
}
