//! Type resolution.
//!
//! Maps a raw declared type name to the fully-qualified target class.
//!
//! Resolution runs two passes over every aggregated file:
//!
//! 1. match on *simple* name, messages across all files first, then enums;
//!    the result is qualified with the package of the file declaring the
//!    *usage site*, not of the file declaring the matched type;
//! 2. match on *full* name; the result is qualified with the package of the
//!    file declaring the matched type.
//!
//! The first pass means two unrelated types sharing a simple name in
//! different packages resolve to whichever is registered first.

use marshgen_schema::{ScalarKind, SchemaFile, SchemaOption, SymbolTable, qualify_name};

/// Outcome of resolving a raw type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// One of the six builtin scalar keywords; no symbol lookup performed.
    Builtin(ScalarKind),
    /// Fully-qualified target class name.
    Resolved(String),
    /// No message or enum matched.
    Unresolved,
}

/// Resolves type references against a read-only [`SymbolTable`].
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    table: &'a SymbolTable,
    package_option: &'a str,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver honoring the `package_option` override.
    #[must_use]
    pub fn new(table: &'a SymbolTable, package_option: &'a str) -> Self {
        Self {
            table,
            package_option,
        }
    }

    /// The symbol table being resolved against.
    #[must_use]
    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Target package for a type declared with `type_options`, seen from `file`.
    ///
    /// The type's own override wins, then the file's override, then the
    /// file's declared package.
    #[must_use]
    pub fn package_of(&self, file: &SchemaFile, type_options: &[SchemaOption]) -> String {
        type_options
            .iter()
            .find(|opt| opt.name == self.package_option)
            .map(|opt| opt.value.as_str())
            .or_else(|| file.option(self.package_option))
            .unwrap_or(&file.package)
            .to_string()
    }

    /// Qualified target class for a type declared in `file`.
    #[must_use]
    pub fn target_class(
        &self,
        file: &SchemaFile,
        type_options: &[SchemaOption],
        simple_name: &str,
    ) -> String {
        qualify_name(&self.package_of(file, type_options), simple_name)
    }

    /// Resolves `raw` as referenced from `declaring`.
    #[must_use]
    pub fn resolve(&self, declaring: &SchemaFile, raw: &str) -> Resolution {
        if let Some(kind) = ScalarKind::from_keyword(raw) {
            return Resolution::Builtin(kind);
        }

        let files = self.table.files();

        for file in files {
            if let Some(message) = file.messages.iter().find(|m| m.name == raw) {
                return Resolution::Resolved(self.target_class(
                    declaring,
                    &message.options,
                    &message.name,
                ));
            }
        }
        for file in files {
            if let Some(enum_type) = file.enums.iter().find(|e| e.name == raw) {
                return Resolution::Resolved(self.target_class(
                    declaring,
                    &enum_type.options,
                    &enum_type.name,
                ));
            }
        }

        let full_name = raw.trim_start_matches('.');
        for file in files {
            if let Some(message) = file.messages.iter().find(|m| m.full_name == full_name) {
                return Resolution::Resolved(self.target_class(
                    file,
                    &message.options,
                    &message.name,
                ));
            }
            if let Some(enum_type) = file.enums.iter().find(|e| e.full_name == full_name) {
                return Resolution::Resolved(self.target_class(
                    file,
                    &enum_type.options,
                    &enum_type.name,
                ));
            }
        }

        Resolution::Unresolved
    }
}
