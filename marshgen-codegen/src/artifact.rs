//! Generation artifacts.
//!
//! An artifact is an immutable, fixed-shape description of one marshaller.
//! Member slots are declared statically and filled by the synthesizers.

use marshgen_schema::{EnumValue, ScalarKind};
use std::fmt;

use crate::naming::accessor_kind;

/// Output unit produced for one message or enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// Message marshaller.
    Message(MessageArtifact),
    /// Enum marshaller.
    Enum(EnumArtifact),
}

impl Artifact {
    /// Marshaller simple name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Message(m) => &m.name,
            Self::Enum(e) => &e.name,
        }
    }

    /// Package the marshaller is emitted into.
    #[must_use]
    pub fn package(&self) -> &str {
        match self {
            Self::Message(m) => &m.package,
            Self::Enum(e) => &e.package,
        }
    }

    /// Fully-qualified target class.
    #[must_use]
    pub fn target_class(&self) -> &str {
        match self {
            Self::Message(m) => &m.target_class,
            Self::Enum(e) => &e.target_class,
        }
    }

    /// Registered type name (the full schema name).
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Message(m) => &m.type_name,
            Self::Enum(e) => &e.type_name,
        }
    }

    /// Member slots in output order.
    #[must_use]
    pub fn members(&self) -> &'static [MemberSlot] {
        match self {
            Self::Message(_) => &MessageArtifact::MEMBERS,
            Self::Enum(_) => &EnumArtifact::MEMBERS,
        }
    }

    /// Fully-qualified marshaller name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package().is_empty() {
            self.name().to_string()
        } else {
            format!("{}.{}", self.package(), self.name())
        }
    }

    /// Returns the message artifact, if this is one.
    #[must_use]
    pub fn as_message(&self) -> Option<&MessageArtifact> {
        match self {
            Self::Message(m) => Some(m),
            Self::Enum(_) => None,
        }
    }

    /// Returns the enum artifact, if this is one.
    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumArtifact> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Message(_) => None,
        }
    }
}

/// Marshaller member slots. Derived ordering is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberSlot {
    /// `decode(ordinal)`
    Decode,
    /// `encode(value)`
    Encode,
    /// `getJavaClass()`
    GetJavaClass,
    /// `getTypeName()`
    GetTypeName,
    /// `readFrom(reader)`
    ReadFrom,
    /// `writeTo(writer, value)`
    WriteTo,
}

impl MemberSlot {
    /// Method name of the slot in rendered output.
    #[must_use]
    pub const fn method_name(&self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Encode => "encode",
            Self::GetJavaClass => "getJavaClass",
            Self::GetTypeName => "getTypeName",
            Self::ReadFrom => "readFrom",
            Self::WriteTo => "writeTo",
        }
    }
}

/// How a field is carried through the structured reader/writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Kind-specific direct accessor pair.
    Scalar(ScalarKind),
    /// Collection accessor pair typed by an element class.
    Collection {
        /// Element class.
        element_class: String,
    },
    /// Object accessor pair typed by a resolved class.
    Object {
        /// Resolved class.
        class: String,
    },
}

/// Argument of a reader/writer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Field name string literal.
    FieldName(String),
    /// Current field value obtained through a getter.
    CurrentValue(String),
    /// Freshly constructed ordered container.
    NewList,
    /// Class literal.
    ClassLiteral(String),
}

/// A reader or writer method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Reader/writer method name.
    pub method: String,
    /// Arguments in order.
    pub operands: Vec<Operand>,
}

impl Call {
    /// Renders the call, applying getters to `subject` when given.
    #[must_use]
    pub fn render(&self, subject: Option<&str>) -> String {
        let operands: Vec<String> = self
            .operands
            .iter()
            .map(|operand| match operand {
                Operand::FieldName(name) => format!("\"{name}\""),
                Operand::CurrentValue(getter) => match subject {
                    Some(subject) => format!("{subject}.{getter}()"),
                    None => format!("{getter}()"),
                },
                Operand::NewList => "new ArrayList<>()".to_string(),
                Operand::ClassLiteral(class) => format!("{class}.class"),
            })
            .collect();
        format!("{}({})", self.method, operands.join(", "))
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Per-field accessor pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessor {
    /// Schema field name.
    pub field_name: String,
    /// Getter on the target class.
    pub getter: String,
    /// Setter on the target class.
    pub setter: String,
    /// Field category.
    pub access: Access,
}

impl FieldAccessor {
    /// Reader call producing the field value.
    #[must_use]
    pub fn read_call(&self) -> Call {
        let field = Operand::FieldName(self.field_name.clone());
        let (method, operands) = match &self.access {
            Access::Scalar(kind) => (format!("read{}", accessor_kind(*kind)), vec![field]),
            Access::Collection { element_class } => (
                "readCollection".to_string(),
                vec![
                    field,
                    Operand::NewList,
                    Operand::ClassLiteral(element_class.clone()),
                ],
            ),
            Access::Object { class } => (
                "readObject".to_string(),
                vec![field, Operand::ClassLiteral(class.clone())],
            ),
        };
        Call { method, operands }
    }

    /// Writer call emitting the current field value.
    #[must_use]
    pub fn write_call(&self) -> Call {
        let field = Operand::FieldName(self.field_name.clone());
        let value = Operand::CurrentValue(self.getter.clone());
        let (method, operands) = match &self.access {
            Access::Scalar(kind) => (format!("write{}", accessor_kind(*kind)), vec![field, value]),
            Access::Collection { element_class } => (
                "writeCollection".to_string(),
                vec![field, value, Operand::ClassLiteral(element_class.clone())],
            ),
            Access::Object { class } => (
                "writeObject".to_string(),
                vec![field, value, Operand::ClassLiteral(class.clone())],
            ),
        };
        Call { method, operands }
    }
}

/// Statement of a message marshaller body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Construct a fresh target instance.
    Construct {
        /// Target class.
        class: String,
    },
    /// Assign a reader call result through a setter.
    Assign {
        /// Setter name.
        setter: String,
        /// Reader call.
        call: Call,
    },
    /// Writer call.
    Write(Call),
    /// Return the constructed instance.
    Return,
}

/// Marshaller artifact for one message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArtifact {
    /// Marshaller simple name.
    pub name: String,
    /// Package the marshaller is emitted into.
    pub package: String,
    /// Fully-qualified target class.
    pub target_class: String,
    /// Full schema name.
    pub type_name: String,
    /// Field accessors in declaration order.
    pub fields: Vec<FieldAccessor>,
}

impl MessageArtifact {
    /// Member slots of a message marshaller, in output order.
    pub const MEMBERS: [MemberSlot; 4] = [
        MemberSlot::GetJavaClass,
        MemberSlot::GetTypeName,
        MemberSlot::ReadFrom,
        MemberSlot::WriteTo,
    ];

    /// Statement constructing the target instance.
    #[must_use]
    pub fn construct_statement(&self) -> Statement {
        Statement::Construct {
            class: self.target_class.clone(),
        }
    }

    /// `readFrom` body: construct, one assignment per field, return.
    #[must_use]
    pub fn read_statements(&self) -> Vec<Statement> {
        let mut statements = Vec::with_capacity(self.fields.len() + 2);
        statements.push(self.construct_statement());
        statements.extend(self.fields.iter().map(|field| Statement::Assign {
            setter: field.setter.clone(),
            call: field.read_call(),
        }));
        statements.push(Statement::Return);
        statements
    }

    /// `writeTo` body: one writer call per field.
    #[must_use]
    pub fn write_statements(&self) -> Vec<Statement> {
        self.fields
            .iter()
            .map(|field| Statement::Write(field.write_call()))
            .collect()
    }

    /// Looks up a field accessor by schema field name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldAccessor> {
        self.fields.iter().find(|f| f.field_name == name)
    }
}

/// Branch of an enum `decode` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeBranch {
    /// `ordinal -> value`
    Case {
        /// Declared ordinal.
        ordinal: i32,
        /// Value name.
        value: String,
    },
    /// Any other ordinal fails.
    Fail,
}

/// Branch of an enum `encode` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeBranch {
    /// Absent input fails.
    RejectAbsent,
    /// `value -> ordinal`
    Case {
        /// Value name.
        value: String,
        /// Declared ordinal.
        ordinal: i32,
    },
}

/// Marshaller artifact for one enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumArtifact {
    /// Marshaller simple name.
    pub name: String,
    /// Package the marshaller is emitted into.
    pub package: String,
    /// Fully-qualified target class.
    pub target_class: String,
    /// Full schema name.
    pub type_name: String,
    /// Declared values, ordinals verbatim.
    pub values: Vec<EnumValue>,
}

impl EnumArtifact {
    /// Member slots of an enum marshaller, in output order.
    pub const MEMBERS: [MemberSlot; 4] = [
        MemberSlot::Decode,
        MemberSlot::Encode,
        MemberSlot::GetJavaClass,
        MemberSlot::GetTypeName,
    ];

    /// `decode` branches: one case per declared value, then the failure default.
    #[must_use]
    pub fn decode_branches(&self) -> Vec<DecodeBranch> {
        self.values
            .iter()
            .map(|v| DecodeBranch::Case {
                ordinal: v.ordinal,
                value: v.name.clone(),
            })
            .chain(std::iter::once(DecodeBranch::Fail))
            .collect()
    }

    /// `encode` branches: the absent-value rejection, then one case per value.
    #[must_use]
    pub fn encode_branches(&self) -> Vec<EncodeBranch> {
        std::iter::once(EncodeBranch::RejectAbsent)
            .chain(self.values.iter().map(|v| EncodeBranch::Case {
                value: v.name.clone(),
                ordinal: v.ordinal,
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accessor(name: &str, getter: &str, access: Access) -> FieldAccessor {
        FieldAccessor {
            field_name: name.to_string(),
            getter: getter.to_string(),
            setter: format!("set{}", &getter[3..]),
            access,
        }
    }

    #[test]
    fn test_member_slots_sorted() {
        let mut message = MessageArtifact::MEMBERS.to_vec();
        message.sort();
        assert_eq!(message, MessageArtifact::MEMBERS);

        let mut enums = EnumArtifact::MEMBERS.to_vec();
        enums.sort();
        assert_eq!(enums, EnumArtifact::MEMBERS);

        let names: Vec<&str> = MessageArtifact::MEMBERS
            .iter()
            .map(MemberSlot::method_name)
            .collect();
        assert_eq!(names, ["getJavaClass", "getTypeName", "readFrom", "writeTo"]);
    }

    #[test]
    fn test_scalar_calls() {
        let field = accessor("count", "getCount", Access::Scalar(ScalarKind::Int32));
        assert_eq!(field.read_call().to_string(), "readInt(\"count\")");
        assert_eq!(field.write_call().to_string(), "writeInt(\"count\", getCount())");
        assert_eq!(
            field.write_call().render(Some("o")),
            "writeInt(\"count\", o.getCount())"
        );
    }

    #[test]
    fn test_collection_and_object_calls() {
        let lines = accessor(
            "lines",
            "getLines",
            Access::Collection {
                element_class: "shop.Line".to_string(),
            },
        );
        assert_eq!(
            lines.read_call().to_string(),
            "readCollection(\"lines\", new ArrayList<>(), shop.Line.class)"
        );
        assert_eq!(
            lines.write_call().to_string(),
            "writeCollection(\"lines\", getLines(), shop.Line.class)"
        );

        let owner = accessor(
            "owner",
            "getOwner",
            Access::Object {
                class: "shop.Person".to_string(),
            },
        );
        assert_eq!(
            owner.read_call().to_string(),
            "readObject(\"owner\", shop.Person.class)"
        );
        assert_eq!(
            owner.write_call().to_string(),
            "writeObject(\"owner\", getOwner(), shop.Person.class)"
        );
    }

    #[test]
    fn test_message_statements() {
        let artifact = MessageArtifact {
            name: "OrderMessageMarshaller".to_string(),
            package: "shop".to_string(),
            target_class: "shop.Order".to_string(),
            type_name: "shop.Order".to_string(),
            fields: vec![
                accessor("id", "getId", Access::Scalar(ScalarKind::String)),
                accessor("total", "getTotal", Access::Scalar(ScalarKind::Double)),
            ],
        };

        let reads = artifact.read_statements();
        assert_eq!(reads.len(), 4);
        assert_eq!(reads[0], artifact.construct_statement());
        assert!(matches!(&reads[1], Statement::Assign { setter, .. } if setter == "setId"));
        assert!(matches!(&reads[2], Statement::Assign { setter, .. } if setter == "setTotal"));
        assert_eq!(reads[3], Statement::Return);

        let writes = artifact.write_statements();
        assert_eq!(writes.len(), 2);
        assert!(artifact.field("total").is_some());
        assert!(artifact.field("missing").is_none());

        let wrapped = Artifact::Message(artifact);
        assert_eq!(wrapped.qualified_name(), "shop.OrderMessageMarshaller");
        assert_eq!(wrapped.members(), &MessageArtifact::MEMBERS);
        assert!(wrapped.as_enum().is_none());
    }

    #[test]
    fn test_enum_branches() {
        let artifact = EnumArtifact {
            name: "SideEnumMarshaller".to_string(),
            package: String::new(),
            target_class: "Side".to_string(),
            type_name: "Side".to_string(),
            values: vec![EnumValue::new("BUY", 1), EnumValue::new("SELL", 7)],
        };

        let decode = artifact.decode_branches();
        assert_eq!(decode.len(), 3);
        assert_eq!(
            decode[1],
            DecodeBranch::Case {
                ordinal: 7,
                value: "SELL".to_string()
            }
        );
        assert_eq!(decode[2], DecodeBranch::Fail);

        let encode = artifact.encode_branches();
        assert_eq!(encode[0], EncodeBranch::RejectAbsent);
        assert_eq!(encode.len(), 3);

        assert_eq!(Artifact::Enum(artifact).qualified_name(), "SideEnumMarshaller");
    }
}
