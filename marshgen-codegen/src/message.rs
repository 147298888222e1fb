//! Message artifact synthesis.

use marshgen_schema::{MessageType, SchemaFile};

use crate::artifact::MessageArtifact;
use crate::classify::classify_field;
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::resolver::TypeResolver;

/// Synthesizer for message marshaller artifacts.
#[derive(Debug, Clone, Copy)]
pub struct MessageSynthesizer<'a> {
    resolver: TypeResolver<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> MessageSynthesizer<'a> {
    /// Creates a new message synthesizer.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>, config: &'a GeneratorConfig) -> Self {
        Self { resolver, config }
    }

    /// Synthesizes the artifact for `message` declared in `file`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedType` for the first field whose type
    /// cannot be resolved.
    pub fn synthesize(
        &self,
        file: &SchemaFile,
        message: &MessageType,
    ) -> Result<MessageArtifact, CodegenError> {
        let fields = message
            .fields
            .iter()
            .map(|field| classify_field(&self.resolver, file, message, field))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Synthesized message marshaller for {} ({} fields)",
            message.full_name,
            fields.len()
        );

        Ok(MessageArtifact {
            name: self.config.message_marshaller_name(&message.name),
            package: file.package.clone(),
            target_class: self
                .resolver
                .target_class(file, &message.options, &message.name),
            type_name: message.full_name.clone(),
            fields,
        })
    }
}
