//! # marshgen Schema
//!
//! Proto schema parser, type definitions and symbol table aggregation.
//!
//! This crate provides:
//! - Lexing and parsing of proto2/proto3 schema text
//! - Type definitions for files, messages, fields and enums
//! - Per-file schema validation
//! - The built-in kinds schema and the aggregator that merges sources into a
//!   [`SymbolTable`]

pub mod aggregator;
pub mod builtin;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod symbols;
pub mod types;
pub mod validation;

pub use aggregator::{AggregatorConfig, SchemaAggregator, aggregate};
pub use builtin::{BUILTIN_IDENTIFIER, BUILTIN_PACKAGE};
pub use error::{ParseError, SchemaError};
pub use parser::parse_schema;
pub use source::SchemaSource;
pub use symbols::{Symbol, SymbolKind, SymbolRef, SymbolTable};
pub use types::{
    EnumType, EnumValue, FieldDescriptor, FieldLabel, MessageType, ScalarKind, SchemaFile,
    SchemaOption, qualify_name,
};
pub use validation::validate_file;
