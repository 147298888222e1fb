//! Message marshaller rendering.

use crate::artifact::{Access, MemberSlot, MessageArtifact, Statement};
use crate::config::GeneratorConfig;

use super::render_header;

const INSTANCE: &str = "o";

/// Renderer for message marshallers.
pub struct MessageRenderer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> MessageRenderer<'a> {
    /// Creates a new message renderer.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Renders one message marshaller.
    #[must_use]
    pub fn render(&self, artifact: &MessageArtifact) -> String {
        let runtime = self.config.runtime_package_name();
        let mut imports = vec!["java.io.IOException".to_string()];
        if artifact
            .fields
            .iter()
            .any(|f| matches!(f.access, Access::Collection { .. }))
        {
            imports.push("java.util.ArrayList".to_string());
        }
        imports.push(format!("{}.MessageMarshaller", runtime));
        imports.push(format!("{}.StructuredReader", runtime));
        imports.push(format!("{}.StructuredWriter", runtime));

        let mut output = render_header(&artifact.package, &imports);
        let target = &artifact.target_class;

        output.push_str(&format!(
            "public final class {} implements MessageMarshaller<{}> {{\n",
            artifact.name, target
        ));

        for slot in MessageArtifact::MEMBERS {
            output.push('\n');
            output.push_str(&self.render_member(artifact, slot));
        }

        output.push_str("}\n");
        output
    }

    fn render_member(&self, artifact: &MessageArtifact, slot: MemberSlot) -> String {
        let mut output = String::new();
        let target = &artifact.target_class;

        output.push_str("    @Override\n");
        match slot {
            MemberSlot::GetJavaClass => {
                output.push_str(&format!(
                    "    public Class<{}> getJavaClass() {{\n",
                    target
                ));
                output.push_str(&format!("        return {}.class;\n", target));
            }
            MemberSlot::GetTypeName => {
                output.push_str("    public String getTypeName() {\n");
                output.push_str(&format!("        return \"{}\";\n", artifact.type_name));
            }
            MemberSlot::ReadFrom => {
                output.push_str(&format!(
                    "    public {} readFrom(StructuredReader reader) throws IOException {{\n",
                    target
                ));
                for statement in artifact.read_statements() {
                    output.push_str(&render_statement(&statement));
                }
            }
            MemberSlot::WriteTo => {
                output.push_str(&format!(
                    "    public void writeTo(StructuredWriter writer, {} {}) throws IOException {{\n",
                    target, INSTANCE
                ));
                for statement in artifact.write_statements() {
                    output.push_str(&render_statement(&statement));
                }
            }
            MemberSlot::Decode | MemberSlot::Encode => {}
        }
        output.push_str("    }\n");

        output
    }
}

fn render_statement(statement: &Statement) -> String {
    match statement {
        Statement::Construct { class } => {
            format!("        {} {} = new {}();\n", class, INSTANCE, class)
        }
        Statement::Assign { setter, call } => {
            format!("        {}.{}(reader.{});\n", INSTANCE, setter, call)
        }
        Statement::Write(call) => {
            format!("        writer.{};\n", call.render(Some(INSTANCE)))
        }
        Statement::Return => format!("        return {};\n", INSTANCE),
    }
}
