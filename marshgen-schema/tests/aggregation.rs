//! Integration tests for schema aggregation across sources.

use std::fs;

use marshgen_schema::{
    AggregatorConfig, BUILTIN_PACKAGE, SchemaAggregator, SchemaError, SchemaSource, aggregate,
};
use tempfile::TempDir;

const ORDERS_PROTO: &str = r#"
package shop;
message Order {
    optional string id = 1;
    repeated string items = 2;
}
enum State { OPEN = 0; PAID = 1; }
"#;

const CONFLICTING_PROTO: &str = r#"
package shop;
message Order {
    optional int64 id = 1;
}
"#;

#[test]
fn test_identical_file_twice_is_accepted() {
    let table = aggregate([
        SchemaSource::named_text("orders.proto", ORDERS_PROTO),
        SchemaSource::named_text("orders.proto", ORDERS_PROTO),
    ])
    .expect("identical sources aggregate");

    assert_eq!(table.user_files().count(), 1);
    assert!(table.contains("shop.Order"));
    assert!(table.contains("shop.State"));
}

#[test]
fn test_identical_shape_under_other_identifier_is_accepted() {
    let table = aggregate([
        SchemaSource::text(ORDERS_PROTO),
        SchemaSource::text(ORDERS_PROTO),
    ])
    .expect("identical shapes aggregate");

    assert!(table.contains("shop.Order"));
}

#[test]
fn test_conflicting_shape_is_rejected() {
    let result = aggregate([
        SchemaSource::named_text("orders.proto", ORDERS_PROTO),
        SchemaSource::named_text("conflict.proto", CONFLICTING_PROTO),
    ]);

    assert!(matches!(
        result,
        Err(SchemaError::DuplicateType { ref full_name, .. }) if full_name == "shop.Order"
    ));
}

#[test]
fn test_file_and_resource_sources() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("orders.proto");
    fs::write(&path, ORDERS_PROTO).expect("write schema");

    let table = aggregate([SchemaSource::file(&path)]).expect("file source");
    let file = table.user_files().next().expect("user file");
    assert_eq!(file.identifier, "orders.proto");

    let table = SchemaAggregator::new(AggregatorConfig::new().resource_root(dir.path()))
        .source(SchemaSource::resource("orders.proto"))
        .aggregate()
        .expect("resource source");
    assert!(table.contains("shop.State"));

    let missing = SchemaAggregator::new(AggregatorConfig::new().resource_root(dir.path()))
        .source(SchemaSource::resource("missing.proto"))
        .aggregate();
    assert!(matches!(missing, Err(SchemaError::ResourceNotFound { .. })));
}

#[test]
fn test_malformed_source_fails() {
    let result = aggregate([SchemaSource::text("message Broken { optional string = 1; }")]);
    assert!(matches!(result, Err(SchemaError::Parse(_))));
}

#[test]
fn test_builtin_kinds_resolvable_but_reserved() {
    let table = aggregate(Vec::<SchemaSource>::new()).expect("builtin only");

    assert!(table.contains("marshgen.StringValue"));
    assert!(table.contains("marshgen.Serializable"));
    assert_eq!(table.reserved_package(), BUILTIN_PACKAGE);
    assert_eq!(table.user_files().count(), 0);
}
