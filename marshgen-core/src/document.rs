//! In-memory structured reader and writer.
//!
//! A [`Document`] is an ordered list of named values. [`DocumentWriter`]
//! appends entries in call order, so tests can assert on write ordering;
//! [`DocumentReader`] looks entries up by name.

use crate::error::{MarshalError, Result};
use crate::reader::StructuredReader;
use crate::value::Value;
use crate::writer::StructuredWriter;

/// Ordered list of named values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<(String, Value)>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns the document.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Returns the first entry with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// Entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads typed values from a [`Document`].
#[derive(Debug, Clone)]
pub struct DocumentReader {
    document: Document,
}

impl DocumentReader {
    /// Wraps a document for reading.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn lookup(&self, name: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.document.get(name).unwrap_or(&NULL)
    }
}

macro_rules! read_scalar {
    ($self:ident, $name:ident, $variant:ident, $expected:literal) => {
        match $self.lookup($name) {
            Value::Null => Ok(None),
            Value::$variant(v) => Ok(Some(v.clone())),
            other => Err(MarshalError::type_mismatch(
                $name,
                $expected,
                other.kind_name(),
            )),
        }
    };
}

impl StructuredReader for DocumentReader {
    fn read_string(&mut self, name: &str) -> Result<Option<String>> {
        read_scalar!(self, name, String, "string")
    }

    fn read_int(&mut self, name: &str) -> Result<Option<i32>> {
        read_scalar!(self, name, Int, "int")
    }

    fn read_long(&mut self, name: &str) -> Result<Option<i64>> {
        read_scalar!(self, name, Long, "long")
    }

    fn read_double(&mut self, name: &str) -> Result<Option<f64>> {
        read_scalar!(self, name, Double, "double")
    }

    fn read_float(&mut self, name: &str) -> Result<Option<f32>> {
        read_scalar!(self, name, Float, "float")
    }

    fn read_boolean(&mut self, name: &str) -> Result<Option<bool>> {
        read_scalar!(self, name, Boolean, "boolean")
    }

    fn read_object(&mut self, name: &str, class_name: &str) -> Result<Value> {
        match self.lookup(name) {
            value @ (Value::Null | Value::Object(_) | Value::Enum(_)) => Ok(value.clone()),
            other => Err(MarshalError::type_mismatch(
                name,
                class_name,
                other.kind_name(),
            )),
        }
    }

    fn read_collection(&mut self, name: &str, element_class: &str) -> Result<Vec<Value>> {
        match self.lookup(name) {
            Value::Null => Ok(Vec::new()),
            Value::Collection(values) => Ok(values.clone()),
            other => Err(MarshalError::type_mismatch(
                name,
                format!("collection of {element_class}"),
                other.kind_name(),
            )),
        }
    }
}

/// Collects written values into a [`Document`], preserving call order.
#[derive(Debug, Clone, Default)]
pub struct DocumentWriter {
    document: Document,
}

impl DocumentWriter {
    /// Creates a writer with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected document.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Borrows the collected document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl StructuredWriter for DocumentWriter {
    fn write_string(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        self.document.push(name, value);
        Ok(())
    }

    fn write_int(&mut self, name: &str, value: Option<i32>) -> Result<()> {
        self.document.push(name, value);
        Ok(())
    }

    fn write_long(&mut self, name: &str, value: Option<i64>) -> Result<()> {
        self.document.push(name, value);
        Ok(())
    }

    fn write_double(&mut self, name: &str, value: Option<f64>) -> Result<()> {
        self.document.push(name, value);
        Ok(())
    }

    fn write_float(&mut self, name: &str, value: Option<f32>) -> Result<()> {
        self.document.push(name, value);
        Ok(())
    }

    fn write_boolean(&mut self, name: &str, value: Option<bool>) -> Result<()> {
        self.document.push(name, value);
        Ok(())
    }

    fn write_object(&mut self, name: &str, value: &Value, _class_name: &str) -> Result<()> {
        self.document.push(name, value.clone());
        Ok(())
    }

    fn write_collection(
        &mut self,
        name: &str,
        values: &[Value],
        _element_class: &str,
    ) -> Result<()> {
        self.document.push(name, Value::Collection(values.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    #[test]
    fn test_document_reader_scalars() {
        let doc = Document::new()
            .with("name", "Ada")
            .with("age", 36)
            .with("score", 9.5f64)
            .with("done", true);
        let mut reader = DocumentReader::new(doc);

        assert_eq!(reader.read_string("name").unwrap(), Some("Ada".to_string()));
        assert_eq!(reader.read_int("age").unwrap(), Some(36));
        assert_eq!(reader.read_double("score").unwrap(), Some(9.5));
        assert_eq!(reader.read_boolean("done").unwrap(), Some(true));
        assert_eq!(reader.read_long("missing").unwrap(), None);
    }

    #[test]
    fn test_document_reader_type_mismatch() {
        let mut reader = DocumentReader::new(Document::new().with("age", "old"));
        let err = reader.read_int("age").unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch { .. }));
    }

    #[test]
    fn test_document_reader_collection_defaults_to_empty() {
        let mut reader = DocumentReader::new(Document::new());
        assert!(reader.read_collection("tags", "String").unwrap().is_empty());
    }

    #[test]
    fn test_document_reader_object() {
        let address = Record::new("org.acme.Address").with("city", "Turin");
        let mut reader = DocumentReader::new(Document::new().with("address", address.clone()));
        assert_eq!(
            reader.read_object("address", "org.acme.Address").unwrap(),
            Value::Object(address)
        );
    }

    #[test]
    fn test_document_writer_preserves_order() {
        let mut writer = DocumentWriter::new();
        writer.write_string("b", Some("x")).unwrap();
        writer.write_int("a", Some(1)).unwrap();
        writer
            .write_collection("c", &[Value::Int(1)], "Integer")
            .unwrap();

        let doc = writer.into_document();
        assert_eq!(doc.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(doc.get("c"), Some(&Value::Collection(vec![Value::Int(1)])));
    }

    #[test]
    fn test_document_writer_absent_scalar() {
        let mut writer = DocumentWriter::new();
        writer.write_float("ratio", None).unwrap();
        assert_eq!(writer.document().get("ratio"), Some(&Value::Null));
        assert_eq!(writer.document().len(), 1);
    }
}
