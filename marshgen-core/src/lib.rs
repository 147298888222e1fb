//! # marshgen Core
//!
//! Runtime contract shared by generated marshallers and the persistence layer.
//!
//! This crate provides:
//! - Structured reader/writer traits with named, typed get/put operations
//! - The four-operation [`MessageMarshaller`] and [`EnumMarshaller`] contracts
//! - Dynamic [`Value`] and [`Record`] domain objects
//! - In-memory document reader/writer implementations
//! - Error types for marshalling operations

pub mod document;
pub mod error;
pub mod marshaller;
pub mod reader;
pub mod value;
pub mod writer;

pub use document::{Document, DocumentReader, DocumentWriter};
pub use error::{MarshalError, Result};
pub use marshaller::{EnumMarshaller, MessageMarshaller};
pub use reader::StructuredReader;
pub use value::{Record, Value};
pub use writer::StructuredWriter;
