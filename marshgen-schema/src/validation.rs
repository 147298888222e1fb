//! Schema validation utilities.
//!
//! Checks the per-file uniqueness rules that type resolution and marshaller
//! generation rely on.

use crate::error::ParseError;
use crate::types::{EnumType, MessageType, SchemaFile};
use std::collections::HashSet;

/// Validates a parsed schema file.
///
/// # Arguments
/// * `file` - The schema file to validate
///
/// # Returns
/// Ok(()) if valid, or ParseError describing the issue.
///
/// # Errors
/// Returns `ParseError::DuplicateDefinition` if validation fails.
pub fn validate_file(file: &SchemaFile) -> Result<(), ParseError> {
    validate_type_names(file)?;
    for message in &file.messages {
        validate_message(&file.identifier, message)?;
    }
    for enum_type in &file.enums {
        validate_enum(&file.identifier, enum_type)?;
    }
    Ok(())
}

/// Messages and enums share one namespace per file.
fn validate_type_names(file: &SchemaFile) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    let names = file
        .messages
        .iter()
        .map(|m| m.name.as_str())
        .chain(file.enums.iter().map(|e| e.name.as_str()));

    for name in names {
        if !seen.insert(name) {
            return Err(ParseError::duplicate(&file.identifier, "type", name));
        }
    }
    Ok(())
}

/// Validates field names and numbers within a message.
fn validate_message(source_id: &str, message: &MessageType) -> Result<(), ParseError> {
    let mut seen_names = HashSet::new();
    let mut seen_numbers = HashSet::new();

    for field in &message.fields {
        if !seen_names.insert(&field.name) {
            return Err(ParseError::duplicate(
                source_id,
                "field",
                format!("{}.{}", message.name, field.name),
            ));
        }
        if !seen_numbers.insert(field.number) {
            return Err(ParseError::duplicate(
                source_id,
                "field number",
                format!("{} in {}", field.number, message.name),
            ));
        }
    }
    Ok(())
}

/// Validates value names and ordinals within an enum.
fn validate_enum(source_id: &str, enum_type: &EnumType) -> Result<(), ParseError> {
    let mut seen_names = HashSet::new();
    let mut seen_ordinals = HashSet::new();

    for value in &enum_type.values {
        if !seen_names.insert(&value.name) {
            return Err(ParseError::duplicate(
                source_id,
                "enum value",
                format!("{}.{}", enum_type.name, value.name),
            ));
        }
        if !seen_ordinals.insert(value.ordinal) {
            return Err(ParseError::duplicate(
                source_id,
                "enum ordinal",
                format!("{} in {}", value.ordinal, enum_type.name),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    fn validate(text: &str) -> Result<(), ParseError> {
        let file = parse_schema("test.proto", text).expect("Failed to parse");
        validate_file(&file)
    }

    #[test]
    fn test_validate_valid_schema() {
        let text = r#"
package test;
message Order { optional string id = 1; repeated string items = 2; }
enum Side { BUY = 1; SELL = 2; }
"#;
        assert!(validate(text).is_ok());
    }

    #[test]
    fn test_validate_duplicate_type_name() {
        let text = "message Side { optional string a = 1; } enum Side { BUY = 1; }";
        let err = validate(text).unwrap_err();
        assert!(err.to_string().contains("duplicate type 'Side'"));
    }

    #[test]
    fn test_validate_duplicate_field_name() {
        let text = "message Order { optional string id = 1; optional int32 id = 2; }";
        let err = validate(text).unwrap_err();
        assert!(err.to_string().contains("duplicate field 'Order.id'"));
    }

    #[test]
    fn test_validate_duplicate_field_number() {
        let text = "message Order { optional string id = 1; optional int32 qty = 1; }";
        let err = validate(text).unwrap_err();
        assert!(err.to_string().contains("duplicate field number"));
    }

    #[test]
    fn test_validate_duplicate_enum_value() {
        let text = "enum Side { BUY = 1; BUY = 2; }";
        assert!(validate(text).is_err());
    }

    #[test]
    fn test_validate_duplicate_enum_ordinal() {
        let text = "enum Side { option allow_alias = true; BUY = 1; PURCHASE = 1; }";
        let err = validate(text).unwrap_err();
        assert!(err.to_string().contains("duplicate enum ordinal '1 in Side'"));
    }
}
