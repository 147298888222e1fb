//! Built-in kinds schema.
//!
//! Always registered ahead of user sources. Its types are available for
//! resolution but never produce generated output.

/// Identifier of the built-in kinds source.
pub const BUILTIN_IDENTIFIER: &str = "marshgen/types.proto";

/// Reserved package of the built-in kinds source.
pub const BUILTIN_PACKAGE: &str = "marshgen";

/// Built-in kinds schema text.
pub const BUILTIN_SCHEMA: &str = r#"
syntax = "proto2";
package marshgen;

message StringValue {
    optional string value = 1;
}

message IntValue {
    optional int32 value = 1;
}

message LongValue {
    optional int64 value = 1;
}

message DoubleValue {
    optional double value = 1;
}

message FloatValue {
    optional float value = 1;
}

message BoolValue {
    optional bool value = 1;
}

message Serializable {
    optional string clazz = 1;
    optional string value = 2;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;
    use crate::validation::validate_file;

    #[test]
    fn test_builtin_schema_parses() {
        let file = parse_schema(BUILTIN_IDENTIFIER, BUILTIN_SCHEMA).expect("Failed to parse");
        validate_file(&file).expect("Builtin schema must validate");

        assert_eq!(file.package, BUILTIN_PACKAGE);
        assert_eq!(file.messages.len(), 7);
        assert!(file.enums.is_empty());
        assert!(
            file.messages
                .iter()
                .all(|m| m.full_name.starts_with("marshgen."))
        );
    }
}
