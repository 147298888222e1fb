//! Schema type definitions.
//!
//! This module contains the data structures representing a parsed schema
//! source: files, message types, fields and enum types.

/// Joins a package and a simple name; an empty package leaves the name bare.
#[must_use]
pub fn qualify_name(package: &str, simple_name: &str) -> String {
    if package.is_empty() {
        simple_name.to_string()
    } else {
        format!("{package}.{simple_name}")
    }
}

/// Builtin scalar keywords with a direct structured reader/writer accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    /// `string`
    String,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `double`
    Double,
    /// `float`
    Float,
    /// `bool`
    Bool,
}

impl ScalarKind {
    /// All builtin scalar kinds, in keyword table order.
    pub const ALL: [ScalarKind; 6] = [
        Self::String,
        Self::Int32,
        Self::Int64,
        Self::Double,
        Self::Float,
        Self::Bool,
    ];

    /// Parses a schema type keyword. Only the six builtin keywords match.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(Self::String),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "double" => Some(Self::Double),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    /// Returns the schema keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Double => "double",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

/// A `name = value` option attached to a file, message or enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaOption {
    /// Option name, e.g. `java_package` or `(custom.ext).field`.
    pub name: String,
    /// Constant value; string literals are stored unquoted.
    pub value: String,
}

impl SchemaOption {
    /// Creates a new option.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Looks up an option value by name.
fn find_option<'a>(options: &'a [SchemaOption], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .map(|opt| opt.value.as_str())
}

/// A parsed schema source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Source identifier (resource name, file name or synthetic id).
    pub identifier: String,
    /// Declared `syntax`, if any.
    pub syntax: Option<String>,
    /// Declared package; empty when the source has no package statement.
    pub package: String,
    /// Imported source names, in declaration order.
    pub imports: Vec<String>,
    /// File-level options.
    pub options: Vec<SchemaOption>,
    /// Message types, in declaration order.
    pub messages: Vec<MessageType>,
    /// Enum types, in declaration order.
    pub enums: Vec<EnumType>,
}

impl SchemaFile {
    /// Creates an empty file in the given package.
    #[must_use]
    pub fn new(identifier: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            syntax: None,
            package: package.into(),
            imports: Vec::new(),
            options: Vec::new(),
            messages: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Returns the value of a file-level option.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        find_option(&self.options, name)
    }

    /// Qualifies a simple name with this file's declared package.
    #[must_use]
    pub fn qualify(&self, simple_name: &str) -> String {
        qualify_name(&self.package, simple_name)
    }

    /// Adds a message type.
    pub fn add_message(&mut self, message: MessageType) {
        self.messages.push(message);
    }

    /// Adds an enum type.
    pub fn add_enum(&mut self, enum_type: EnumType) {
        self.enums.push(enum_type);
    }

    /// Returns the number of declared types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.messages.len() + self.enums.len()
    }
}

/// Field cardinality label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldLabel {
    /// No label (proto3 implicit presence).
    #[default]
    Implicit,
    /// `optional`
    Optional,
    /// `required`
    Required,
    /// `repeated`
    Repeated,
}

impl FieldLabel {
    /// Parses a label keyword.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "optional" => Some(Self::Optional),
            "required" => Some(Self::Required),
            "repeated" => Some(Self::Repeated),
            _ => None,
        }
    }
}

/// A field within a message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared type: a scalar keyword or a (possibly qualified) type reference.
    pub type_name: String,
    /// Field number.
    pub number: u32,
    /// Cardinality label.
    pub label: FieldLabel,
}

impl FieldDescriptor {
    /// Creates a field with an implicit label.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            number,
            label: FieldLabel::Implicit,
        }
    }

    /// Sets the label and returns the field.
    #[must_use]
    pub fn with_label(mut self, label: FieldLabel) -> Self {
        self.label = label;
        self
    }

    /// Returns true for `repeated` fields.
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.label == FieldLabel::Repeated
    }

    /// Returns the builtin scalar kind of the declared type, if any.
    #[must_use]
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        ScalarKind::from_keyword(&self.type_name)
    }
}

/// A message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageType {
    /// Simple name.
    pub name: String,
    /// Package-qualified name.
    pub full_name: String,
    /// Fields, in declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Message-level options.
    pub options: Vec<SchemaOption>,
}

impl MessageType {
    /// Creates an empty message type.
    #[must_use]
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            fields: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Returns the value of a message-level option.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        find_option(&self.options, name)
    }
}

/// A named enum constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Constant name.
    pub name: String,
    /// Declared ordinal.
    pub ordinal: i32,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>, ordinal: i32) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }
}

/// An enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    /// Simple name.
    pub name: String,
    /// Package-qualified name.
    pub full_name: String,
    /// Values, in declaration order.
    pub values: Vec<EnumValue>,
    /// Enum-level options.
    pub options: Vec<SchemaOption>,
}

impl EnumType {
    /// Creates an empty enum type.
    #[must_use]
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            values: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Adds a value.
    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    /// Returns the value of an enum-level option.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        find_option(&self.options, name)
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn value_by_name(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Looks up a value by ordinal.
    #[must_use]
    pub fn value_by_ordinal(&self, ordinal: i32) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.ordinal == ordinal)
    }
}
