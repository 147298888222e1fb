//! Marshaller contracts.
//!
//! A materialized marshaller exposes exactly four operations: read, write,
//! target class and registered type name. Serialization contexts register
//! marshallers against [`MessageMarshaller::type_name`].

use crate::error::Result;
use crate::reader::StructuredReader;
use crate::writer::StructuredWriter;

/// Bidirectional conversion between a domain object and a structured
/// reader/writer.
pub trait MessageMarshaller {
    /// Domain type produced and consumed by this marshaller.
    type Target;

    /// Builds a fresh target instance from the reader.
    ///
    /// # Errors
    /// Propagates reader failures.
    fn read_from(&self, reader: &mut dyn StructuredReader) -> Result<Self::Target>;

    /// Writes every field of `value` to the writer, in declaration order.
    ///
    /// # Errors
    /// Propagates writer failures.
    fn write_to(&self, writer: &mut dyn StructuredWriter, value: &Self::Target) -> Result<()>;

    /// Fully-qualified target class name.
    fn target_class(&self) -> &str;

    /// Full schema name the marshaller is registered under.
    fn type_name(&self) -> &str;
}

/// Conversion between enum constants and their declared ordinals.
pub trait EnumMarshaller {
    /// Enum constant type.
    type Target;

    /// Returns the declared ordinal of `value`.
    ///
    /// # Errors
    /// Returns [`crate::MarshalError::InvalidEnumValue`] when `value` is absent.
    fn encode(&self, value: Option<&Self::Target>) -> Result<i32>;

    /// Returns the constant declared with `ordinal`.
    ///
    /// # Errors
    /// Returns [`crate::MarshalError::InvalidEnumValue`] for undeclared ordinals.
    fn decode(&self, ordinal: i32) -> Result<Self::Target>;

    /// Fully-qualified target class name.
    fn target_class(&self) -> &str;

    /// Full schema name the marshaller is registered under.
    fn type_name(&self) -> &str;
}
