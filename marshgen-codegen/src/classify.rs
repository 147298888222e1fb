//! Field classification.

use marshgen_schema::{FieldDescriptor, MessageType, ScalarKind, SchemaFile};

use crate::artifact::{Access, FieldAccessor};
use crate::error::CodegenError;
use crate::naming::{boolean_getter_name, boxed_class, getter_name, setter_name};
use crate::resolver::{Resolution, TypeResolver};

/// Classifies `field` of `message` (declared in `file`) into an accessor pair.
///
/// | Declared | Repeated | Access |
/// |----------|----------|--------|
/// | builtin scalar | no | [`Access::Scalar`] |
/// | builtin scalar | yes | [`Access::Collection`] of the boxed class |
/// | message / enum | yes | [`Access::Collection`] of the resolved class |
/// | message / enum | no | [`Access::Object`] of the resolved class |
///
/// Only a singular `bool` field uses an `is<Field>` getter.
///
/// # Errors
/// Returns `CodegenError::UnresolvedType` if the type is neither a builtin
/// keyword nor resolvable against the symbol table.
pub fn classify_field(
    resolver: &TypeResolver<'_>,
    file: &SchemaFile,
    message: &MessageType,
    field: &FieldDescriptor,
) -> Result<FieldAccessor, CodegenError> {
    let resolution = resolver.resolve(file, &field.type_name);

    let access = if field.is_repeated() {
        let element_class = match resolution {
            Resolution::Builtin(kind) => boxed_class(kind).to_string(),
            Resolution::Resolved(class) => class,
            Resolution::Unresolved => return Err(unresolved(message, field)),
        };
        Access::Collection { element_class }
    } else {
        match resolution {
            Resolution::Builtin(kind) => Access::Scalar(kind),
            Resolution::Resolved(class) => Access::Object { class },
            Resolution::Unresolved => return Err(unresolved(message, field)),
        }
    };

    let getter = match &access {
        Access::Scalar(ScalarKind::Bool) => boolean_getter_name(&field.name),
        _ => getter_name(&field.name),
    };

    Ok(FieldAccessor {
        field_name: field.name.clone(),
        getter,
        setter: setter_name(&field.name),
        access,
    })
}

fn unresolved(message: &MessageType, field: &FieldDescriptor) -> CodegenError {
    CodegenError::unresolved(&field.type_name, &field.name, &message.full_name)
}
