//! Naming conventions for generated accessors.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `int32` | [`accessor_kind`] | `Int` |
//! | `int32` | [`boxed_class`] | `Integer` |

use marshgen_schema::ScalarKind;

/// Capitalizes the first letter of a string, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use marshgen_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("firstName"), "FirstName");
/// assert_eq!(capitalize("first_name"), "First_name");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Getter name for a field: `get<Field>`.
#[must_use]
pub fn getter_name(field: &str) -> String {
    format!("get{}", capitalize(field))
}

/// Boolean getter name for a field: `is<Field>`.
#[must_use]
pub fn boolean_getter_name(field: &str) -> String {
    format!("is{}", capitalize(field))
}

/// Setter name for a field: `set<Field>`.
#[must_use]
pub fn setter_name(field: &str) -> String {
    format!("set{}", capitalize(field))
}

/// Suffix of the structured reader/writer accessor for a scalar kind.
#[must_use]
pub const fn accessor_kind(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "String",
        ScalarKind::Int32 => "Int",
        ScalarKind::Int64 => "Long",
        ScalarKind::Double => "Double",
        ScalarKind::Float => "Float",
        ScalarKind::Bool => "Boolean",
    }
}

/// Boxed class name used as the element class of repeated scalar fields.
#[must_use]
pub const fn boxed_class(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "String",
        ScalarKind::Int32 => "Integer",
        ScalarKind::Int64 => "Long",
        ScalarKind::Double => "Double",
        ScalarKind::Float => "Float",
        ScalarKind::Bool => "Boolean",
    }
}
