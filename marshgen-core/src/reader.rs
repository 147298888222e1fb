//! Structured reader capability.
//!
//! Generated marshallers pull named, typed values through this trait. The
//! byte-level encoding behind it is up to the implementation.

use crate::error::Result;
use crate::value::Value;

/// Named, typed read operations used by generated `readFrom` logic.
///
/// Scalar reads return `Ok(None)` when the field is absent.
pub trait StructuredReader {
    /// Reads a string field.
    fn read_string(&mut self, name: &str) -> Result<Option<String>>;

    /// Reads a 32-bit integer field.
    fn read_int(&mut self, name: &str) -> Result<Option<i32>>;

    /// Reads a 64-bit integer field.
    fn read_long(&mut self, name: &str) -> Result<Option<i64>>;

    /// Reads a 64-bit float field.
    fn read_double(&mut self, name: &str) -> Result<Option<f64>>;

    /// Reads a 32-bit float field.
    fn read_float(&mut self, name: &str) -> Result<Option<f32>>;

    /// Reads a boolean field.
    fn read_boolean(&mut self, name: &str) -> Result<Option<bool>>;

    /// Reads a nested message or enum value typed by `class_name`.
    fn read_object(&mut self, name: &str, class_name: &str) -> Result<Value>;

    /// Reads a repeated field into a fresh ordered container of `element_class`.
    fn read_collection(&mut self, name: &str, element_class: &str) -> Result<Vec<Value>>;
}
