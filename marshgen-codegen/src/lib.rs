//! # marshgen Codegen
//!
//! Marshaller artifact generation from aggregated proto schemas.
//!
//! This crate provides:
//! - Two-pass type resolution with package override options
//! - Field classification into accessor pairs
//! - Message and enum artifact synthesis with per-type failure isolation
//! - Java source rendering of artifacts
//! - Runtime interpretation of artifacts against the `marshgen-core` contract

pub mod artifact;
pub mod classify;
pub mod config;
pub mod enums;
pub mod error;
pub mod generator;
pub mod java;
pub mod message;
pub mod naming;
pub mod resolver;
mod runtime;

pub use artifact::{
    Access, Artifact, Call, DecodeBranch, EncodeBranch, EnumArtifact, FieldAccessor, MemberSlot,
    MessageArtifact, Operand, Statement,
};
pub use classify::classify_field;
pub use config::GeneratorConfig;
pub use enums::EnumSynthesizer;
pub use error::CodegenError;
pub use generator::{GenerationReport, Generator, TypeFailure};
pub use java::render_java;
pub use message::MessageSynthesizer;
pub use resolver::{Resolution, TypeResolver};

use marshgen_schema::{SchemaSource, aggregate};

/// Generates artifacts from a single schema text.
///
/// # Arguments
/// * `schema` - Proto schema content
///
/// # Returns
/// Artifacts for every message and enum declared in the schema.
///
/// # Errors
/// Returns `CodegenError` if parsing fails or any type cannot be synthesized.
pub fn generate_from_str(schema: &str) -> Result<Vec<Artifact>, CodegenError> {
    let table = aggregate([SchemaSource::text(schema)])?;
    Generator::new(&table, GeneratorConfig::default()).generate_strict()
}

/// Generates artifacts from a set of schema sources.
///
/// # Arguments
/// * `sources` - Schema sources, in registration order
/// * `config` - Generator configuration
///
/// # Returns
/// A best-effort report listing artifacts and per-type failures.
///
/// # Errors
/// Returns `CodegenError` if aggregation fails.
pub fn generate_from_sources(
    sources: impl IntoIterator<Item = SchemaSource>,
    config: GeneratorConfig,
) -> Result<GenerationReport, CodegenError> {
    let table = aggregate(sources)?;
    Ok(Generator::new(&table, config).generate())
}

/// Generates artifacts from a schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<Vec<Artifact>, CodegenError> {
    let table = aggregate([SchemaSource::file(path)])?;
    Generator::new(&table, GeneratorConfig::default()).generate_strict()
}
