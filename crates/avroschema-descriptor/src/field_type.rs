//! Field type tags and labels
//!
//! Protobuf JSON renders enum values by name (`"TYPE_INT64"`), but some
//! tooling emits the numeric value instead. Both forms are accepted.
//! Values outside the known set are kept as `Unrecognized` so the
//! classifier can report them with the offending field's name.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declared type of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message,
    Bytes,
    Uint32,
    Enum,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
    /// A tag outside the known set, kept verbatim
    Unrecognized(std::string::String),
}

/// Coarse category a [`FieldType`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Primitive,
    Message,
    Enum,
    Group,
    Unknown,
}

impl FieldType {
    /// Parse a `TYPE_*` name
    pub fn from_name(name: &str) -> Self {
        match name {
            "TYPE_DOUBLE" => FieldType::Double,
            "TYPE_FLOAT" => FieldType::Float,
            "TYPE_INT64" => FieldType::Int64,
            "TYPE_UINT64" => FieldType::Uint64,
            "TYPE_INT32" => FieldType::Int32,
            "TYPE_FIXED64" => FieldType::Fixed64,
            "TYPE_FIXED32" => FieldType::Fixed32,
            "TYPE_BOOL" => FieldType::Bool,
            "TYPE_STRING" => FieldType::String,
            "TYPE_GROUP" => FieldType::Group,
            "TYPE_MESSAGE" => FieldType::Message,
            "TYPE_BYTES" => FieldType::Bytes,
            "TYPE_UINT32" => FieldType::Uint32,
            "TYPE_ENUM" => FieldType::Enum,
            "TYPE_SFIXED32" => FieldType::Sfixed32,
            "TYPE_SFIXED64" => FieldType::Sfixed64,
            "TYPE_SINT32" => FieldType::Sint32,
            "TYPE_SINT64" => FieldType::Sint64,
            other => FieldType::Unrecognized(other.to_string()),
        }
    }

    /// Parse the numeric value from `descriptor.proto`
    pub fn from_number(value: i64) -> Self {
        match value {
            1 => FieldType::Double,
            2 => FieldType::Float,
            3 => FieldType::Int64,
            4 => FieldType::Uint64,
            5 => FieldType::Int32,
            6 => FieldType::Fixed64,
            7 => FieldType::Fixed32,
            8 => FieldType::Bool,
            9 => FieldType::String,
            10 => FieldType::Group,
            11 => FieldType::Message,
            12 => FieldType::Bytes,
            13 => FieldType::Uint32,
            14 => FieldType::Enum,
            15 => FieldType::Sfixed32,
            16 => FieldType::Sfixed64,
            17 => FieldType::Sint32,
            18 => FieldType::Sint64,
            other => FieldType::Unrecognized(other.to_string()),
        }
    }

    /// The `TYPE_*` name, or the verbatim unrecognised value
    pub fn as_str_name(&self) -> &str {
        match self {
            FieldType::Double => "TYPE_DOUBLE",
            FieldType::Float => "TYPE_FLOAT",
            FieldType::Int64 => "TYPE_INT64",
            FieldType::Uint64 => "TYPE_UINT64",
            FieldType::Int32 => "TYPE_INT32",
            FieldType::Fixed64 => "TYPE_FIXED64",
            FieldType::Fixed32 => "TYPE_FIXED32",
            FieldType::Bool => "TYPE_BOOL",
            FieldType::String => "TYPE_STRING",
            FieldType::Group => "TYPE_GROUP",
            FieldType::Message => "TYPE_MESSAGE",
            FieldType::Bytes => "TYPE_BYTES",
            FieldType::Uint32 => "TYPE_UINT32",
            FieldType::Enum => "TYPE_ENUM",
            FieldType::Sfixed32 => "TYPE_SFIXED32",
            FieldType::Sfixed64 => "TYPE_SFIXED64",
            FieldType::Sint32 => "TYPE_SINT32",
            FieldType::Sint64 => "TYPE_SINT64",
            FieldType::Unrecognized(raw) => raw,
        }
    }

    pub fn category(&self) -> TypeCategory {
        match self {
            FieldType::Message => TypeCategory::Message,
            FieldType::Enum => TypeCategory::Enum,
            FieldType::Group => TypeCategory::Group,
            FieldType::Unrecognized(_) => TypeCategory::Unknown,
            _ => TypeCategory::Primitive,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str_name())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NameOrNumber::new(
            "a field type",
            FieldType::from_name,
            FieldType::from_number,
        ))
    }
}

/// Cardinality of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Optional,
    Required,
    Repeated,
    Unrecognized(String),
}

impl Label {
    pub fn from_name(name: &str) -> Self {
        match name {
            "LABEL_OPTIONAL" => Label::Optional,
            "LABEL_REQUIRED" => Label::Required,
            "LABEL_REPEATED" => Label::Repeated,
            other => Label::Unrecognized(other.to_string()),
        }
    }

    pub fn from_number(value: i64) -> Self {
        match value {
            1 => Label::Optional,
            2 => Label::Required,
            3 => Label::Repeated,
            other => Label::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str_name(&self) -> &str {
        match self {
            Label::Optional => "LABEL_OPTIONAL",
            Label::Required => "LABEL_REQUIRED",
            Label::Repeated => "LABEL_REPEATED",
            Label::Unrecognized(raw) => raw,
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str_name())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NameOrNumber::new(
            "a field label",
            Label::from_name,
            Label::from_number,
        ))
    }
}

/// Visitor accepting a protobuf enum rendered either by name or by number
struct NameOrNumber<T> {
    expecting: &'static str,
    from_name: fn(&str) -> T,
    from_number: fn(i64) -> T,
}

impl<T> NameOrNumber<T> {
    fn new(expecting: &'static str, from_name: fn(&str) -> T, from_number: fn(i64) -> T) -> Self {
        Self {
            expecting,
            from_name,
            from_number,
        }
    }
}

impl<T> Visitor<'_> for NameOrNumber<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} name or number", self.expecting)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        Ok((self.from_name)(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        Ok((self.from_number)(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        let value = i64::try_from(v).map_err(|_| E::custom(format!("{} out of range", v)))?;
        Ok((self.from_number)(value))
    }
}
