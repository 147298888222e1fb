//! Structured writer capability.

use crate::error::Result;
use crate::value::Value;

/// Named, typed write operations used by generated `writeTo` logic.
///
/// `None` scalars are written as absent.
pub trait StructuredWriter {
    /// Writes a string field.
    fn write_string(&mut self, name: &str, value: Option<&str>) -> Result<()>;

    /// Writes a 32-bit integer field.
    fn write_int(&mut self, name: &str, value: Option<i32>) -> Result<()>;

    /// Writes a 64-bit integer field.
    fn write_long(&mut self, name: &str, value: Option<i64>) -> Result<()>;

    /// Writes a 64-bit float field.
    fn write_double(&mut self, name: &str, value: Option<f64>) -> Result<()>;

    /// Writes a 32-bit float field.
    fn write_float(&mut self, name: &str, value: Option<f32>) -> Result<()>;

    /// Writes a boolean field.
    fn write_boolean(&mut self, name: &str, value: Option<bool>) -> Result<()>;

    /// Writes a nested message or enum value typed by `class_name`.
    fn write_object(&mut self, name: &str, value: &Value, class_name: &str) -> Result<()>;

    /// Writes a repeated field typed by `element_class`.
    fn write_collection(&mut self, name: &str, values: &[Value], element_class: &str)
    -> Result<()>;
}
