//! Schema aggregation.
//!
//! Loads the built-in kinds schema plus every user source and merges them
//! into one [`SymbolTable`].

use crate::builtin::{BUILTIN_IDENTIFIER, BUILTIN_PACKAGE, BUILTIN_SCHEMA};
use crate::error::SchemaError;
use crate::source::SchemaSource;
use crate::symbols::SymbolTable;
use std::path::PathBuf;

/// Configuration for [`SchemaAggregator`].
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    reserved_package: String,
    builtin_schema: String,
    resource_roots: Vec<PathBuf>,
}

impl AggregatorConfig {
    /// Creates a configuration with the default built-in kinds schema and no
    /// resource roots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reserved_package: BUILTIN_PACKAGE.to_string(),
            builtin_schema: BUILTIN_SCHEMA.to_string(),
            resource_roots: Vec::new(),
        }
    }

    /// Sets the reserved package hidden from generated output.
    #[must_use]
    pub fn reserved_package(mut self, package: impl Into<String>) -> Self {
        self.reserved_package = package.into();
        self
    }

    /// Replaces the built-in kinds schema text.
    #[must_use]
    pub fn builtin_schema(mut self, text: impl Into<String>) -> Self {
        self.builtin_schema = text.into();
        self
    }

    /// Adds a directory searched for [`SchemaSource::Resource`] names.
    #[must_use]
    pub fn resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_roots.push(root.into());
        self
    }

    /// Returns the configured resource roots.
    #[must_use]
    pub fn resource_roots(&self) -> &[PathBuf] {
        &self.resource_roots
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects schema sources and merges them into a [`SymbolTable`].
#[derive(Debug, Clone, Default)]
pub struct SchemaAggregator {
    config: AggregatorConfig,
    sources: Vec<SchemaSource>,
}

impl SchemaAggregator {
    /// Creates an aggregator with the given configuration.
    #[must_use]
    pub fn new(config: AggregatorConfig) -> Self {
        Self {
            config,
            sources: Vec::new(),
        }
    }

    /// Adds a source.
    #[must_use]
    pub fn source(mut self, source: SchemaSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds several sources, preserving order.
    #[must_use]
    pub fn sources(mut self, sources: impl IntoIterator<Item = SchemaSource>) -> Self {
        self.sources.extend(sources);
        self
    }

    /// Loads every source and builds the symbol table.
    ///
    /// The built-in kinds schema is registered first, then sources in the
    /// order they were added.
    ///
    /// # Errors
    /// Returns `SchemaError::Parse` if any source is malformed and
    /// `SchemaError::DuplicateType` on conflicting declarations.
    pub fn aggregate(&self) -> Result<SymbolTable, SchemaError> {
        let mut table = SymbolTable::new(&self.config.reserved_package);

        let builtin = SchemaSource::named_text(BUILTIN_IDENTIFIER, &self.config.builtin_schema);
        table.insert_file(builtin.load(&self.config.resource_roots)?)?;

        for source in &self.sources {
            let file = source.load(&self.config.resource_roots)?;
            table.insert_file(file)?;
        }

        tracing::info!(
            "Aggregated {} schema files ({} types)",
            table.files().len(),
            table.len()
        );
        Ok(table)
    }
}

/// Aggregates sources with the default configuration.
///
/// # Errors
/// Returns `SchemaError` if any source fails to load or conflicts.
pub fn aggregate(
    sources: impl IntoIterator<Item = SchemaSource>,
) -> Result<SymbolTable, SchemaError> {
    SchemaAggregator::default().sources(sources).aggregate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::symbols::Symbol;

    const ORDER_PROTO: &str = r#"
package shop;
message Order {
    optional string id = 1;
    repeated Line lines = 2;
}
message Line {
    optional string sku = 1;
    optional int32 quantity = 2;
}
"#;

    #[test]
    fn test_aggregate_includes_builtin() {
        let table = aggregate([SchemaSource::named_text("order.proto", ORDER_PROTO)])
            .expect("Failed to aggregate");

        assert_eq!(table.files()[0].identifier, BUILTIN_IDENTIFIER);
        assert!(table.contains("marshgen.StringValue"));
        assert!(table.contains("shop.Order"));
        assert!(matches!(table.get("shop.Line"), Some(Symbol::Message(_))));

        let user: Vec<_> = table.user_files().map(|f| f.identifier.as_str()).collect();
        assert_eq!(user, vec!["order.proto"]);
    }

    #[test]
    fn test_aggregate_same_source_twice() {
        let table = aggregate([
            SchemaSource::named_text("order.proto", ORDER_PROTO),
            SchemaSource::named_text("order.proto", ORDER_PROTO),
        ])
        .expect("Identical sources must aggregate");
        assert_eq!(table.user_files().count(), 1);
    }

    #[test]
    fn test_aggregate_conflicting_sources() {
        let other = "package shop; message Order { optional int64 id = 1; }";
        let err = aggregate([
            SchemaSource::named_text("order.proto", ORDER_PROTO),
            SchemaSource::named_text("other.proto", other),
        ])
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
    }

    #[test]
    fn test_aggregate_parse_error_is_fatal() {
        let err = aggregate([
            SchemaSource::named_text("order.proto", ORDER_PROTO),
            SchemaSource::named_text("broken.proto", "message {"),
        ])
        .unwrap_err();
        assert!(matches!(err, SchemaError::Parse(ParseError::Syntax { .. })));
    }

    #[test]
    fn test_custom_reserved_package() {
        let config = AggregatorConfig::new()
            .reserved_package("core")
            .builtin_schema("package core; message Any { optional string value = 1; }");
        let table = SchemaAggregator::new(config)
            .source(SchemaSource::named_text("order.proto", ORDER_PROTO))
            .aggregate()
            .expect("Failed to aggregate");

        assert!(table.contains("core.Any"));
        assert!(!table.contains("marshgen.StringValue"));
        assert_eq!(table.user_files().count(), 1);
    }

    #[test]
    fn test_resource_roots_config() {
        let config = AggregatorConfig::new().resource_root("/a").resource_root("/b");
        assert_eq!(config.resource_roots().len(), 2);
    }
}
