//! Enum marshaller rendering.

use crate::artifact::{DecodeBranch, EncodeBranch, EnumArtifact, MemberSlot};
use crate::config::GeneratorConfig;

use super::{INVALID_ENUM_VALUE, render_header};

/// Renderer for enum marshallers.
pub struct EnumRenderer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> EnumRenderer<'a> {
    /// Creates a new enum renderer.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Renders one enum marshaller.
    #[must_use]
    pub fn render(&self, artifact: &EnumArtifact) -> String {
        let imports = vec![format!(
            "{}.EnumMarshaller",
            self.config.runtime_package_name()
        )];
        let mut output = render_header(&artifact.package, &imports);

        output.push_str(&format!(
            "public final class {} implements EnumMarshaller<{}> {{\n",
            artifact.name, artifact.target_class
        ));

        for slot in EnumArtifact::MEMBERS {
            output.push('\n');
            output.push_str(&self.render_member(artifact, slot));
        }

        output.push_str("}\n");
        output
    }

    fn render_member(&self, artifact: &EnumArtifact, slot: MemberSlot) -> String {
        let mut output = String::new();
        let target = &artifact.target_class;

        output.push_str("    @Override\n");
        match slot {
            MemberSlot::Decode => {
                output.push_str(&format!("    public {} decode(int ordinal) {{\n", target));
                output.push_str("        switch (ordinal) {\n");
                for branch in artifact.decode_branches() {
                    match branch {
                        DecodeBranch::Case { ordinal, value } => {
                            output.push_str(&format!("            case {}:\n", ordinal));
                            output.push_str(&format!(
                                "                return {}.{};\n",
                                target, value
                            ));
                        }
                        DecodeBranch::Fail => {
                            output.push_str("            default:\n");
                            output.push_str(&format!("                {}\n", INVALID_ENUM_VALUE));
                        }
                    }
                }
                output.push_str("        }\n");
            }
            MemberSlot::Encode => {
                output.push_str(&format!("    public int encode({} value) {{\n", target));
                let mut cases = String::new();
                for branch in artifact.encode_branches() {
                    match branch {
                        EncodeBranch::RejectAbsent => {
                            output.push_str("        if (value == null) {\n");
                            output.push_str(&format!("            {}\n", INVALID_ENUM_VALUE));
                            output.push_str("        }\n");
                        }
                        EncodeBranch::Case { value, ordinal } => {
                            cases.push_str(&format!("            case {}:\n", value));
                            cases.push_str(&format!("                return {};\n", ordinal));
                        }
                    }
                }
                output.push_str("        switch (value) {\n");
                output.push_str(&cases);
                output.push_str("            default:\n");
                output.push_str(&format!("                {}\n", INVALID_ENUM_VALUE));
                output.push_str("        }\n");
            }
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
            MemberSlot::ReadFrom | MemberSlot::WriteTo => {}
        }
        output.push_str("    }\n");

        output
    }
}
