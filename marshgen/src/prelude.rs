//! Prelude module for convenient imports.
//!
//! ```ignore
//! use marshgen::prelude::*;
//! ```

// Runtime contract
pub use marshgen_core::{
    Document, DocumentReader, DocumentWriter, EnumMarshaller, MarshalError, MessageMarshaller,
    Record, StructuredReader, StructuredWriter, Value,
};

// Schema
pub use marshgen_schema::{
    AggregatorConfig, SchemaAggregator, SchemaError, SchemaSource, SymbolTable, aggregate,
};

// Generation
pub use marshgen_codegen::{
    Artifact, CodegenError, EnumArtifact, GenerationReport, Generator, GeneratorConfig,
    MessageArtifact, TypeFailure, render_java,
};

// Emission
pub use crate::emit::{EmitError, write_artifacts};
