//! Protobuf to Avro primitive type mappings.
//!
//! # Type Mappings
//!
//! | Protobuf | Avro |
//! |----------|------|
//! | `int64`, `uint64`, `sint64`, `fixed64`, `sfixed64` | `long` |
//! | `int32`, `uint32`, `sint32`, `fixed32`, `sfixed32` | `int` |
//! | `double` | `double` |
//! | `float` | `float` |
//! | `bool` | `boolean` |
//! | `string` | `string` |
//! | `bytes` | `bytes` |
//!
//! Message, enum and group tags have no primitive counterpart.

use avroschema_core::{SchemaError, SchemaResult};
use avroschema_descriptor::{FieldDescriptorProto, FieldType};
use std::fmt;

/// An Avro primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvroPrimitive {
    Int,
    Long,
    Float,
    Double,
    Boolean,
    String,
    Bytes,
}

impl AvroPrimitive {
    /// Map a protobuf type tag, `None` for non-primitive tags
    pub fn from_proto(ty: &FieldType) -> Option<Self> {
        match ty {
            FieldType::Int64
            | FieldType::Uint64
            | FieldType::Sint64
            | FieldType::Fixed64
            | FieldType::Sfixed64 => Some(AvroPrimitive::Long),
            FieldType::Int32
            | FieldType::Uint32
            | FieldType::Sint32
            | FieldType::Fixed32
            | FieldType::Sfixed32 => Some(AvroPrimitive::Int),
            FieldType::Double => Some(AvroPrimitive::Double),
            FieldType::Float => Some(AvroPrimitive::Float),
            FieldType::Bool => Some(AvroPrimitive::Boolean),
            FieldType::String => Some(AvroPrimitive::String),
            FieldType::Bytes => Some(AvroPrimitive::Bytes),
            FieldType::Group
            | FieldType::Message
            | FieldType::Enum
            | FieldType::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AvroPrimitive::Int => "int",
            AvroPrimitive::Long => "long",
            AvroPrimitive::Float => "float",
            AvroPrimitive::Double => "double",
            AvroPrimitive::Boolean => "boolean",
            AvroPrimitive::String => "string",
            AvroPrimitive::Bytes => "bytes",
        }
    }
}

impl fmt::Display for AvroPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a field's declared type tag to its Avro primitive
///
/// Fails with [`SchemaError::UnknownPrimitiveType`] for tags outside the
/// primitive set, including message and enum references.
pub fn map_field_type(field: &FieldDescriptorProto) -> SchemaResult<AvroPrimitive> {
    let tag = field.r#type.as_ref();
    tag.and_then(AvroPrimitive::from_proto)
        .ok_or_else(|| SchemaError::UnknownPrimitiveType {
            field: field.name.clone(),
            tag: tag.map_or_else(|| "<unset>".to_string(), |t| t.to_string()),
        })
}
