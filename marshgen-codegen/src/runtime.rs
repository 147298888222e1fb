//! Runtime interpretation of artifacts.
//!
//! Artifacts implement the `marshgen-core` marshaller contract directly,
//! executing the same statements the Java renderer emits against dynamic
//! [`Record`] values.

use marshgen_core::{
    Document, DocumentReader, EnumMarshaller, MarshalError, MessageMarshaller, Record,
    StructuredReader, StructuredWriter, Value,
};
use marshgen_schema::ScalarKind;

use crate::artifact::{
    Access, Artifact, DecodeBranch, EncodeBranch, EnumArtifact, FieldAccessor, MessageArtifact,
};

impl MessageMarshaller for MessageArtifact {
    type Target = Record;

    fn read_from(&self, reader: &mut dyn StructuredReader) -> marshgen_core::Result<Record> {
        let mut record = Record::new(&self.target_class);
        for field in &self.fields {
            record.set(&field.field_name, read_field(reader, field)?);
        }
        Ok(record)
    }

    fn write_to(
        &self,
        writer: &mut dyn StructuredWriter,
        value: &Record,
    ) -> marshgen_core::Result<()> {
        for field in &self.fields {
            write_field(writer, field, value.get(&field.field_name))?;
        }
        Ok(())
    }

    fn target_class(&self) -> &str {
        &self.target_class
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }
}

fn read_field(
    reader: &mut dyn StructuredReader,
    field: &FieldAccessor,
) -> marshgen_core::Result<Value> {
    let name = field.field_name.as_str();
    Ok(match &field.access {
        Access::Scalar(kind) => match kind {
            ScalarKind::String => reader.read_string(name)?.into(),
            ScalarKind::Int32 => reader.read_int(name)?.into(),
            ScalarKind::Int64 => reader.read_long(name)?.into(),
            ScalarKind::Double => reader.read_double(name)?.into(),
            ScalarKind::Float => reader.read_float(name)?.into(),
            ScalarKind::Bool => reader.read_boolean(name)?.into(),
        },
        Access::Collection { element_class } => {
            Value::Collection(reader.read_collection(name, element_class)?)
        }
        Access::Object { class } => reader.read_object(name, class)?,
    })
}

macro_rules! scalar_arg {
    ($value:expr, $name:expr, $variant:ident, $expected:literal) => {
        match $value {
            Value::Null => None,
            Value::$variant(v) => Some(*v),
            other => {
                return Err(MarshalError::type_mismatch(
                    $name,
                    $expected,
                    other.kind_name(),
                ));
            }
        }
    };
}

fn write_field(
    writer: &mut dyn StructuredWriter,
    field: &FieldAccessor,
    value: &Value,
) -> marshgen_core::Result<()> {
    let name = field.field_name.as_str();
    match &field.access {
        Access::Scalar(ScalarKind::String) => {
            let arg = match value {
                Value::Null => None,
                Value::String(s) => Some(s.as_str()),
                other => {
                    return Err(MarshalError::type_mismatch(
                        name,
                        "string",
                        other.kind_name(),
                    ));
                }
            };
            writer.write_string(name, arg)
        }
        Access::Scalar(ScalarKind::Int32) => {
            writer.write_int(name, scalar_arg!(value, name, Int, "int"))
        }
        Access::Scalar(ScalarKind::Int64) => {
            writer.write_long(name, scalar_arg!(value, name, Long, "long"))
        }
        Access::Scalar(ScalarKind::Double) => {
            writer.write_double(name, scalar_arg!(value, name, Double, "double"))
        }
        Access::Scalar(ScalarKind::Float) => {
            writer.write_float(name, scalar_arg!(value, name, Float, "float"))
        }
        Access::Scalar(ScalarKind::Bool) => {
            writer.write_boolean(name, scalar_arg!(value, name, Boolean, "boolean"))
        }
        Access::Collection { element_class } => match value {
            Value::Null => writer.write_collection(name, &[], element_class),
            Value::Collection(values) => writer.write_collection(name, values, element_class),
            other => Err(MarshalError::type_mismatch(
                name,
                "collection",
                other.kind_name(),
            )),
        },
        Access::Object { class } => writer.write_object(name, value, class),
    }
}

impl EnumMarshaller for EnumArtifact {
    type Target = String;

    fn encode(&self, value: Option<&String>) -> marshgen_core::Result<i32> {
        let Some(value) = value else {
            return Err(MarshalError::invalid_enum_value(&self.type_name, "null"));
        };

        self.encode_branches()
            .into_iter()
            .find_map(|branch| match branch {
                EncodeBranch::Case { value: name, ordinal } if &name == value => Some(ordinal),
                _ => None,
            })
            .ok_or_else(|| MarshalError::invalid_enum_value(&self.type_name, value))
    }

    fn decode(&self, ordinal: i32) -> marshgen_core::Result<String> {
        for branch in self.decode_branches() {
            match branch {
                DecodeBranch::Case { ordinal: declared, value } if declared == ordinal => {
                    return Ok(value);
                }
                DecodeBranch::Case { .. } => {}
                DecodeBranch::Fail => break,
            }
        }
        Err(MarshalError::invalid_enum_value(&self.type_name, ordinal))
    }

    fn target_class(&self) -> &str {
        &self.target_class
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Artifact {
    /// Reads the value stored under `name`: a nested record interpreted
    /// through a message artifact, or an enum constant by ordinal through an
    /// enum artifact.
    ///
    /// # Errors
    /// Returns `MarshalError` on reader failures, non-object values under a
    /// message artifact, or undeclared ordinals.
    pub fn read_value(
        &self,
        reader: &mut dyn StructuredReader,
        name: &str,
    ) -> marshgen_core::Result<Value> {
        match self {
            Self::Message(message) => match reader.read_object(name, &message.target_class)? {
                Value::Null => Ok(Value::Null),
                Value::Object(record) => {
                    let mut nested = Document::new();
                    for (field, value) in record.properties() {
                        nested.push(field, value.clone());
                    }
                    let mut nested = DocumentReader::new(nested);
                    Ok(Value::Object(message.read_from(&mut nested)?))
                }
                other => Err(MarshalError::type_mismatch(
                    name,
                    message.target_class.as_str(),
                    other.kind_name(),
                )),
            },
            Self::Enum(enum_artifact) => match reader.read_int(name)? {
                Some(ordinal) => Ok(Value::Enum(enum_artifact.decode(ordinal)?)),
                None => Ok(Value::Null),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marshgen_core::DocumentWriter;
    use marshgen_schema::EnumValue;

    fn accessor(name: &str, access: Access) -> FieldAccessor {
        FieldAccessor {
            field_name: name.to_string(),
            getter: String::new(),
            setter: String::new(),
            access,
        }
    }

    fn task_artifact() -> MessageArtifact {
        MessageArtifact {
            name: "TaskMessageMarshaller".to_string(),
            package: "todo".to_string(),
            target_class: "todo.Task".to_string(),
            type_name: "todo.Task".to_string(),
            fields: vec![
                accessor("title", Access::Scalar(ScalarKind::String)),
                accessor("done", Access::Scalar(ScalarKind::Bool)),
                accessor("estimate", Access::Scalar(ScalarKind::Float)),
                accessor(
                    "labels",
                    Access::Collection {
                        element_class: "String".to_string(),
                    },
                ),
                accessor(
                    "priority",
                    Access::Object {
                        class: "todo.Priority".to_string(),
                    },
                ),
            ],
        }
    }

    fn priority_artifact() -> EnumArtifact {
        EnumArtifact {
            name: "PriorityEnumMarshaller".to_string(),
            package: "todo".to_string(),
            target_class: "todo.Priority".to_string(),
            type_name: "todo.Priority".to_string(),
            values: vec![EnumValue::new("LOW", 0), EnumValue::new("HIGH", 10)],
        }
    }

    #[test]
    fn test_read_from_document() {
        let document = Document::new()
            .with("title", "ship it")
            .with("done", true)
            .with("labels", Value::Collection(vec!["a".into(), "b".into()]))
            .with("priority", Value::Enum("HIGH".to_string()));
        let mut reader = DocumentReader::new(document);

        let record = task_artifact().read_from(&mut reader).expect("read");
        assert_eq!(record.class_name(), "todo.Task");
        assert_eq!(record.get("title"), &Value::String("ship it".to_string()));
        assert_eq!(record.get("done"), &Value::Boolean(true));
        assert_eq!(record.get("estimate"), &Value::Null);
        assert_eq!(record.get("priority"), &Value::Enum("HIGH".to_string()));
    }

    #[test]
    fn test_write_to_in_field_order() {
        let record = Record::new("todo.Task")
            .with("priority", Value::Enum("LOW".to_string()))
            .with("done", false)
            .with("title", "draft");
        let mut writer = DocumentWriter::new();

        task_artifact().write_to(&mut writer, &record).expect("write");
        let document = writer.into_document();
        let names: Vec<&str> = document.names().collect();
        assert_eq!(names, ["title", "done", "estimate", "labels", "priority"]);
        assert_eq!(document.get("labels"), Some(&Value::Collection(Vec::new())));
        assert_eq!(document.get("estimate"), Some(&Value::Null));
    }

    #[test]
    fn test_write_type_mismatch() {
        let record = Record::new("todo.Task").with("done", "yes");
        let mut writer = DocumentWriter::new();

        let err = task_artifact().write_to(&mut writer, &record).unwrap_err();
        assert_eq!(err, MarshalError::type_mismatch("done", "boolean", "string"));
    }

    #[test]
    fn test_round_trip_through_document() {
        let artifact = task_artifact();
        let original = Record::new("todo.Task")
            .with("title", "review")
            .with("done", true)
            .with("estimate", 1.5f32)
            .with("labels", Value::Collection(vec!["x".into()]))
            .with("priority", Value::Enum("LOW".to_string()));

        let mut writer = DocumentWriter::new();
        artifact.write_to(&mut writer, &original).expect("write");
        let mut reader = DocumentReader::new(writer.into_document());
        let decoded = artifact.read_from(&mut reader).expect("read");

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_enum_encode_decode() {
        let artifact = priority_artifact();

        assert_eq!(artifact.encode(Some(&"HIGH".to_string())), Ok(10));
        assert_eq!(artifact.decode(0), Ok("LOW".to_string()));
        assert_eq!(
            artifact.decode(3),
            Err(MarshalError::invalid_enum_value("todo.Priority", 3))
        );
        assert_eq!(
            artifact.encode(None),
            Err(MarshalError::invalid_enum_value("todo.Priority", "null"))
        );
        assert!(artifact.encode(Some(&"MEDIUM".to_string())).is_err());
    }

    #[test]
    fn test_artifact_read_value() {
        let document = Document::new().with("priority", 10);
        let mut reader = DocumentReader::new(document);
        let artifact = Artifact::Enum(priority_artifact());

        assert_eq!(
            artifact.read_value(&mut reader, "priority"),
            Ok(Value::Enum("HIGH".to_string()))
        );
        assert_eq!(artifact.read_value(&mut reader, "absent"), Ok(Value::Null));
    }

    #[test]
    fn test_artifact_read_value_nested_message() {
        let person = MessageArtifact {
            name: "PersonMessageMarshaller".to_string(),
            package: "shop".to_string(),
            target_class: "shop.Person".to_string(),
            type_name: "shop.Person".to_string(),
            fields: vec![accessor("name", Access::Scalar(ScalarKind::String))],
        };
        let document = Document::new()
            .with("name", "top-level")
            .with("owner", Record::new("shop.Person").with("name", "ada"))
            .with("count", 3);
        let mut reader = DocumentReader::new(document);
        let artifact = Artifact::Message(person);

        assert_eq!(
            artifact.read_value(&mut reader, "owner"),
            Ok(Value::Object(Record::new("shop.Person").with("name", "ada")))
        );
        assert_eq!(artifact.read_value(&mut reader, "absent"), Ok(Value::Null));
        assert!(matches!(
            artifact.read_value(&mut reader, "count"),
            Err(MarshalError::TypeMismatch { .. })
        ));
    }
}
