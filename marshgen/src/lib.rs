//! # marshgen
//!
//! Schema-driven marshaller generator.
//!
//! marshgen reads proto schemas, resolves type references across files and
//! synthesizes one marshaller per declared message and enum. Marshallers
//! can be rendered as Java sources or interpreted directly at runtime.
//!
//! ## Features
//!
//! - **Multi-file aggregation** - Merge schema sources into one symbol table
//! - **Package overrides** - Honor `java_package`-style options per file or type
//! - **Best-effort generation** - Per-type failures never abort sibling types
//! - **Deterministic output** - Identical input yields identical sources
//!
//! ## Quick Start
//!
//! ```ignore
//! use marshgen::prelude::*;
//!
//! let table = aggregate([SchemaSource::file("orders.proto")])?;
//! let report = Generator::new(&table, GeneratorConfig::default()).generate();
//! write_artifacts(&report, Path::new("generated"), &GeneratorConfig::default())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Structured reader/writer capability and marshaller contracts
//! - [`schema`] - Proto parsing, validation and aggregation
//! - [`codegen`] - Resolution, synthesis and rendering
//! - [`emit`] - Writing rendered sources to disk

pub mod emit;
pub mod prelude;

/// Runtime marshaller contracts.
pub mod core {
    pub use marshgen_core::*;
}

/// Schema parsing, validation and aggregation.
pub mod schema {
    pub use marshgen_schema::*;
}

/// Marshaller generation.
pub mod codegen {
    pub use marshgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use emit::{EmitError, artifact_path, write_artifacts};
pub use marshgen_codegen::{Artifact, CodegenError, GenerationReport, Generator, GeneratorConfig};
pub use marshgen_schema::{AggregatorConfig, SchemaAggregator, SchemaSource, SymbolTable};
