//! Dynamic values handled by structured readers and writers.

use std::collections::BTreeMap;

/// A single field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value.
    Null,
    /// UTF-8 string.
    String(String),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// 64-bit float.
    Double(f64),
    /// 32-bit float.
    Float(f32),
    /// Boolean.
    Boolean(bool),
    /// Enum constant, by value name.
    Enum(String),
    /// Nested domain object.
    Object(Record),
    /// Ordered collection.
    Collection(Vec<Value>),
}

impl Value {
    /// Returns a short name for the kind of value held.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::Collection(_) => "collection",
        }
    }

    /// Returns true for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A domain object: a target class name plus named properties.
///
/// Properties are keyed by field name. Unset properties read back as
/// [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    class_name: String,
    properties: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record of the given target class.
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Returns the target class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(field.into(), value.into());
    }

    /// Sets a property and returns the record, for chained construction.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Gets a property, or [`Value::Null`] when unset.
    #[must_use]
    pub fn get(&self, field: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.properties.get(field).unwrap_or(&NULL)
    }

    /// Iterates over set properties in name order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}
