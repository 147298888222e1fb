//! Generation driver.
//!
//! Walks every user file of a [`SymbolTable`] and synthesizes one artifact
//! per message and enum. Failures are isolated per type.

use marshgen_schema::SymbolTable;

use crate::artifact::Artifact;
use crate::config::GeneratorConfig;
use crate::enums::EnumSynthesizer;
use crate::error::CodegenError;
use crate::message::MessageSynthesizer;
use crate::resolver::TypeResolver;

/// A type that failed to synthesize.
#[derive(Debug)]
pub struct TypeFailure {
    /// Full schema name of the type.
    pub type_name: String,
    /// Cause.
    pub error: CodegenError,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Artifacts, per user file in registration order, messages before enums.
    pub artifacts: Vec<Artifact>,
    /// Per-type failures, in the same order.
    pub failures: Vec<TypeFailure>,
}

impl GenerationReport {
    /// Returns true if every type was synthesized.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Looks up an artifact by registered type name.
    #[must_use]
    pub fn artifact(&self, type_name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.type_name() == type_name)
    }

    /// Converts the report into its artifacts, failing on the first failure.
    ///
    /// # Errors
    /// Returns the error of the first failed type.
    pub fn into_result(self) -> Result<Vec<Artifact>, CodegenError> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.artifacts),
        }
    }
}

/// Marshaller generator over an aggregated symbol table.
#[derive(Debug)]
pub struct Generator<'a> {
    table: &'a SymbolTable,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(table: &'a SymbolTable, config: GeneratorConfig) -> Self {
        Self { table, config }
    }

    /// Generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Synthesizes every user-declared type, collecting failures.
    #[must_use]
    pub fn generate(&self) -> GenerationReport {
        let resolver = TypeResolver::new(self.table, self.config.package_option_name());
        let messages = MessageSynthesizer::new(resolver, &self.config);
        let enums = EnumSynthesizer::new(resolver, &self.config);

        let mut report = GenerationReport::default();

        for file in self.table.user_files() {
            for message in &file.messages {
                match messages.synthesize(file, message) {
                    Ok(artifact) => report.artifacts.push(Artifact::Message(artifact)),
                    Err(error) => {
                        tracing::warn!("Failed to generate {}: {}", message.full_name, error);
                        report.failures.push(TypeFailure {
                            type_name: message.full_name.clone(),
                            error,
                        });
                    }
                }
            }
            for enum_type in &file.enums {
                report
                    .artifacts
                    .push(Artifact::Enum(enums.synthesize(file, enum_type)));
            }
        }

        tracing::info!(
            "Generated {} marshallers ({} failures)",
            report.artifacts.len(),
            report.failures.len()
        );
        report
    }

    /// Synthesizes every user-declared type, failing on the first failure.
    ///
    /// # Errors
    /// Returns the error of the first type that could not be synthesized.
    pub fn generate_strict(&self) -> Result<Vec<Artifact>, CodegenError> {
        self.generate().into_result()
    }
}
