//! Symbol table keyed by fully-qualified type name.
//!
//! Built once per generation pass by the aggregator and read-only afterwards.
//! Files are kept in registration order so that every consumer iterating them
//! sees the same, reproducible order.

use crate::error::SchemaError;
use crate::types::{EnumType, MessageType, SchemaFile};
use std::collections::BTreeMap;

/// Kind of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Message type.
    Message,
    /// Enum type.
    Enum,
}

/// Location of a registered type inside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRef {
    /// Index of the declaring file.
    pub file: usize,
    /// Kind of the type.
    pub kind: SymbolKind,
    /// Index in the declaring file's message or enum list.
    pub index: usize,
}

/// A registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'a> {
    /// Message type.
    Message(&'a MessageType),
    /// Enum type.
    Enum(&'a EnumType),
}

impl Symbol<'_> {
    /// Simple name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Message(m) => &m.name,
            Self::Enum(e) => &e.name,
        }
    }

    /// Full name of the type.
    #[must_use]
    pub fn full_name(&self) -> &str {
        match self {
            Self::Message(m) => &m.full_name,
            Self::Enum(e) => &e.full_name,
        }
    }
}

/// Mapping from full name to message or enum type.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    files: Vec<SchemaFile>,
    index: BTreeMap<String, SymbolRef>,
    reserved_package: String,
}

impl SymbolTable {
    /// Creates an empty table whose `reserved_package` is hidden from output.
    #[must_use]
    pub fn new(reserved_package: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            index: BTreeMap::new(),
            reserved_package: reserved_package.into(),
        }
    }

    /// All registered files, in registration order.
    #[must_use]
    pub fn files(&self) -> &[SchemaFile] {
        &self.files
    }

    /// Registered files outside the reserved package.
    pub fn user_files(&self) -> impl Iterator<Item = &SchemaFile> {
        self.files.iter().filter(|f| !self.is_reserved(f))
    }

    /// Returns true if `file` belongs to the reserved package.
    #[must_use]
    pub fn is_reserved(&self, file: &SchemaFile) -> bool {
        file.package == self.reserved_package
    }

    /// The reserved package name.
    #[must_use]
    pub fn reserved_package(&self) -> &str {
        &self.reserved_package
    }

    /// Looks up a type by full name.
    #[must_use]
    pub fn get(&self, full_name: &str) -> Option<Symbol<'_>> {
        self.index.get(full_name).map(|r| self.symbol(*r))
    }

    /// Looks up the file declaring the type with `full_name`.
    #[must_use]
    pub fn declaring_file(&self, full_name: &str) -> Option<&SchemaFile> {
        self.index.get(full_name).map(|r| &self.files[r.file])
    }

    /// Returns true if a type with `full_name` is registered.
    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        self.index.contains_key(full_name)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates over registered full names in sorted order.
    pub fn full_names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    fn symbol(&self, r: SymbolRef) -> Symbol<'_> {
        let file = &self.files[r.file];
        match r.kind {
            SymbolKind::Message => Symbol::Message(&file.messages[r.index]),
            SymbolKind::Enum => Symbol::Enum(&file.enums[r.index]),
        }
    }

    /// Registers a file.
    ///
    /// A file equal to an already-registered one is skipped. Types whose full
    /// name is already registered with an identical shape are dropped from
    /// `file`; a different shape under the same full name is an error.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateType` on conflicting declarations.
    pub fn insert_file(&mut self, mut file: SchemaFile) -> Result<bool, SchemaError> {
        if self.files.contains(&file) {
            tracing::debug!("Skipping already registered schema file {}", file.identifier);
            return Ok(false);
        }

        let mut keep_messages = Vec::with_capacity(file.messages.len());
        for message in std::mem::take(&mut file.messages) {
            match self.get(&message.full_name) {
                None => keep_messages.push(message),
                Some(Symbol::Message(existing)) if *existing == message => {
                    tracing::debug!("Ignoring identical redeclaration of {}", message.full_name);
                }
                Some(_) => return Err(self.conflict(&message.full_name, &file.identifier)),
            }
        }

        let mut keep_enums = Vec::with_capacity(file.enums.len());
        for enum_type in std::mem::take(&mut file.enums) {
            match self.get(&enum_type.full_name) {
                None => keep_enums.push(enum_type),
                Some(Symbol::Enum(existing)) if *existing == enum_type => {
                    tracing::debug!("Ignoring identical redeclaration of {}", enum_type.full_name);
                }
                Some(_) => return Err(self.conflict(&enum_type.full_name, &file.identifier)),
            }
        }

        file.messages = keep_messages;
        file.enums = keep_enums;

        let file_index = self.files.len();
        for (index, message) in file.messages.iter().enumerate() {
            self.index.insert(
                message.full_name.clone(),
                SymbolRef {
                    file: file_index,
                    kind: SymbolKind::Message,
                    index,
                },
            );
        }
        for (index, enum_type) in file.enums.iter().enumerate() {
            self.index.insert(
                enum_type.full_name.clone(),
                SymbolRef {
                    file: file_index,
                    kind: SymbolKind::Enum,
                    index,
                },
            );
        }

        tracing::debug!(
            "Registered schema file {} (package '{}', {} types)",
            file.identifier,
            file.package,
            file.type_count()
        );
        self.files.push(file);
        Ok(true)
    }

    fn conflict(&self, full_name: &str, identifier: &str) -> SchemaError {
        let first = self
            .declaring_file(full_name)
            .map(|f| f.identifier.clone())
            .unwrap_or_default();
        SchemaError::duplicate_type(full_name, first, identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnumValue, FieldDescriptor};

    fn file_with_person(identifier: &str, field_type: &str) -> SchemaFile {
        let mut file = SchemaFile::new(identifier, "org.acme");
        let mut person = MessageType::new("Person", "org.acme.Person");
        person.add_field(FieldDescriptor::new("name", field_type, 1));
        file.add_message(person);
        file
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut table = SymbolTable::new("marshgen");
        let mut file = file_with_person("a.proto", "string");
        let mut color = EnumType::new("Color", "org.acme.Color");
        color.add_value(EnumValue::new("RED", 0));
        file.add_enum(color);

        assert!(table.insert_file(file).expect("Failed to insert"));
        assert_eq!(table.len(), 2);
        assert!(matches!(table.get("org.acme.Person"), Some(Symbol::Message(_))));
        assert!(matches!(table.get("org.acme.Color"), Some(Symbol::Enum(_))));
        assert_eq!(
            table.declaring_file("org.acme.Color").map(|f| f.identifier.as_str()),
            Some("a.proto")
        );
        assert!(table.get("org.acme.Missing").is_none());
    }

    #[test]
    fn test_identical_file_skipped() {
        let mut table = SymbolTable::new("marshgen");
        assert!(table.insert_file(file_with_person("a.proto", "string")).unwrap());
        assert!(!table.insert_file(file_with_person("a.proto", "string")).unwrap());
        assert_eq!(table.files().len(), 1);
    }

    #[test]
    fn test_identical_shape_dropped_from_second_file() {
        let mut table = SymbolTable::new("marshgen");
        table.insert_file(file_with_person("a.proto", "string")).unwrap();
        table.insert_file(file_with_person("b.proto", "string")).unwrap();

        assert_eq!(table.files().len(), 2);
        assert!(table.files()[1].messages.is_empty());
        assert_eq!(
            table.declaring_file("org.acme.Person").map(|f| f.identifier.as_str()),
            Some("a.proto")
        );
    }

    #[test]
    fn test_conflicting_shape_rejected() {
        let mut table = SymbolTable::new("marshgen");
        table.insert_file(file_with_person("a.proto", "string")).unwrap();
        let err = table
            .insert_file(file_with_person("b.proto", "int32"))
            .unwrap_err();

        match err {
            SchemaError::DuplicateType {
                full_name,
                first,
                second,
            } => {
                assert_eq!(full_name, "org.acme.Person");
                assert_eq!(first, "a.proto");
                assert_eq!(second, "b.proto");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_message_and_enum_with_same_full_name_conflict() {
        let mut table = SymbolTable::new("marshgen");
        table.insert_file(file_with_person("a.proto", "string")).unwrap();

        let mut file = SchemaFile::new("b.proto", "org.acme");
        file.add_enum(EnumType::new("Person", "org.acme.Person"));
        assert!(table.insert_file(file).is_err());
    }

    #[test]
    fn test_user_files_exclude_reserved() {
        let mut table = SymbolTable::new("marshgen");
        table
            .insert_file(SchemaFile::new("types.proto", "marshgen"))
            .unwrap();
        table.insert_file(file_with_person("a.proto", "string")).unwrap();

        let user: Vec<_> = table.user_files().map(|f| f.identifier.as_str()).collect();
        assert_eq!(user, vec!["a.proto"]);
        assert_eq!(table.reserved_package(), "marshgen");
    }
}
