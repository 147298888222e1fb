//! Enum artifact synthesis.

use marshgen_schema::{EnumType, SchemaFile};

use crate::artifact::EnumArtifact;
use crate::config::GeneratorConfig;
use crate::resolver::TypeResolver;

/// Synthesizer for enum marshaller artifacts.
#[derive(Debug, Clone, Copy)]
pub struct EnumSynthesizer<'a> {
    resolver: TypeResolver<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> EnumSynthesizer<'a> {
    /// Creates a new enum synthesizer.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>, config: &'a GeneratorConfig) -> Self {
        Self { resolver, config }
    }

    /// Synthesizes the artifact for `enum_type` declared in `file`.
    #[must_use]
    pub fn synthesize(&self, file: &SchemaFile, enum_type: &EnumType) -> EnumArtifact {
        tracing::debug!(
            "Synthesized enum marshaller for {} ({} values)",
            enum_type.full_name,
            enum_type.values.len()
        );

        EnumArtifact {
            name: self.config.enum_marshaller_name(&enum_type.name),
            package: file.package.clone(),
            target_class: self
                .resolver
                .target_class(file, &enum_type.options, &enum_type.name),
            type_name: enum_type.full_name.clone(),
            values: enum_type.values.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::DecodeBranch;
    use marshgen_schema::{SchemaSource, aggregate};

    #[test]
    fn test_synthesize_enum() {
        let text = r#"
package trading;
enum Side {
    option java_package = "com.acme.trading";
    BUY = 1;
    SELL = 2;
    SHORT = -5;
}
"#;
        let table = aggregate([SchemaSource::named_text("side.proto", text)]).expect("aggregate");
        let config = GeneratorConfig::default();
        let synthesizer =
            EnumSynthesizer::new(TypeResolver::new(&table, config.package_option_name()), &config);
        let file = table.user_files().next().expect("file");

        let artifact = synthesizer.synthesize(file, &file.enums[0]);
        assert_eq!(artifact.name, "SideEnumMarshaller");
        assert_eq!(artifact.package, "trading");
        assert_eq!(artifact.target_class, "com.acme.trading.Side");
        assert_eq!(artifact.type_name, "trading.Side");

        let branches = artifact.decode_branches();
        assert_eq!(branches.len(), 4);
        assert_eq!(
            branches[2],
            DecodeBranch::Case {
                ordinal: -5,
                value: "SHORT".to_string()
            }
        );
    }
}
