//! Java source rendering of artifacts.

pub mod enums;
pub mod messages;

pub use enums::EnumRenderer;
pub use messages::MessageRenderer;

use crate::artifact::Artifact;
use crate::config::GeneratorConfig;

/// Renders an artifact as a Java compilation unit.
#[must_use]
pub fn render_java(artifact: &Artifact, config: &GeneratorConfig) -> String {
    match artifact {
        Artifact::Message(message) => MessageRenderer::new(config).render(message),
        Artifact::Enum(enum_artifact) => EnumRenderer::new(config).render(enum_artifact),
    }
}

/// Renders the header shared by every unit: banner, package and imports.
fn render_header(package: &str, imports: &[String]) -> String {
    let mut output = String::new();

    output.push_str("// Generated by marshgen. Do not edit.\n");
    if !package.is_empty() {
        output.push_str(&format!("package {};\n", package));
    }
    output.push('\n');

    for import in imports {
        output.push_str(&format!("import {};\n", import));
    }
    if !imports.is_empty() {
        output.push('\n');
    }

    output
}

/// Shared failure statement of enum marshallers.
const INVALID_ENUM_VALUE: &str =
    "throw new IllegalArgumentException(\"Invalid value provided to enum\");";
