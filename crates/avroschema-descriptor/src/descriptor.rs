//! Descriptor tree types
//!
//! Only the parts of `descriptor.proto` schema synthesis reads are modelled;
//! every other key in the JSON input is ignored. Keys are accepted in both
//! lowerCamelCase (protojson) and the original snake_case.

use crate::field_type::{FieldType, Label};
use avroschema_core::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A set of source files, the unit handed over by the host toolchain
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileDescriptorSet {
    #[serde(default)]
    pub file: Vec<FileDescriptorProto>,
}

/// One `.proto` source file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptorProto {
    /// Path relative to the import root, e.g. `shop/v1/order.proto`
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub package: String,

    #[serde(default, alias = "message_type")]
    pub message_type: Vec<DescriptorProto>,

    #[serde(default, alias = "enum_type")]
    pub enum_type: Vec<EnumDescriptorProto>,

    #[serde(default)]
    pub options: Options,
}

/// A message declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorProto {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub field: Vec<FieldDescriptorProto>,

    #[serde(default, alias = "nested_type")]
    pub nested_type: Vec<DescriptorProto>,

    #[serde(default, alias = "enum_type")]
    pub enum_type: Vec<EnumDescriptorProto>,

    #[serde(default)]
    pub options: Options,
}

/// A field declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptorProto {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub number: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<FieldType>,

    /// Referenced type for message and enum fields, e.g. `.shop.Status`
    #[serde(default, alias = "type_name", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

/// An enum declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnumDescriptorProto {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: Vec<EnumValueDescriptorProto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnumValueDescriptorProto {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub number: i32,
}

/// Option values of a file or message, including custom extensions
///
/// Extensions are keyed `[full.name]` in protojson output; lookups accept
/// the name with or without brackets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Options(pub Map<String, Value>);

impl Options {
    /// Look up a raw option value
    pub fn get(&self, name: &str) -> Option<&Value> {
        let bare = name.trim_start_matches('[').trim_end_matches(']');
        self.0
            .get(&format!("[{bare}]"))
            .or_else(|| self.0.get(bare))
    }

    /// Look up a boolean option; `"true"`/`"false"` strings are accepted
    pub fn bool_option(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Set a boolean option under its bracketed extension key
    pub fn set_bool(&mut self, name: &str, value: bool) {
        let bare = name.trim_start_matches('[').trim_end_matches(']');
        self.0.insert(format!("[{bare}]"), Value::Bool(value));
    }
}

/// A message together with its position in the declaration tree
#[derive(Debug, Clone)]
pub struct MessageRef<'a> {
    pub descriptor: &'a DescriptorProto,
    /// Enclosing message names, outermost first
    pub parents: Vec<String>,
    pub package: &'a str,
}

impl MessageRef<'_> {
    /// Declared (short) name
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Fully-qualified name with leading dot, e.g. `.shop.Order.Line`
    pub fn full_name(&self) -> String {
        qualify(self.package, &self.parents, &self.descriptor.name)
    }
}

/// Build a fully-qualified name with leading dot
pub(crate) fn qualify(package: &str, parents: &[String], name: &str) -> String {
    let mut full = String::new();
    if !package.is_empty() {
        full.push('.');
        full.push_str(package);
    }
    for parent in parents {
        full.push('.');
        full.push_str(parent);
    }
    full.push('.');
    full.push_str(name);
    full
}

impl FileDescriptorSet {
    /// Parse a descriptor set from its JSON rendering
    pub fn from_json_str(content: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a descriptor set from JSON bytes
    pub fn from_json_slice(bytes: &[u8]) -> SchemaResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a descriptor set from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            SchemaError::Descriptor(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Find a file by its import path
    pub fn file_by_name(&self, name: &str) -> Option<&FileDescriptorProto> {
        self.file.iter().find(|f| f.name == name)
    }
}

impl FileDescriptorProto {
    /// Every message declared in this file, nested declarations included
    ///
    /// Order is declaration order with each parent before its children.
    pub fn messages(&self) -> Vec<MessageRef<'_>> {
        let mut out = Vec::new();
        for message in &self.message_type {
            flatten(&self.package, message, Vec::new(), &mut out);
        }
        out
    }
}

fn flatten<'a>(
    package: &'a str,
    message: &'a DescriptorProto,
    parents: Vec<String>,
    out: &mut Vec<MessageRef<'a>>,
) {
    let mut child_parents = parents.clone();
    child_parents.push(message.name.clone());
    out.push(MessageRef {
        descriptor: message,
        parents,
        package,
    });
    for nested in &message.nested_type {
        flatten(package, nested, child_parents.clone(), out);
    }
}

impl DescriptorProto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a field, builder style
    pub fn with_field(mut self, field: FieldDescriptorProto) -> Self {
        self.field.push(field);
        self
    }

    pub fn with_nested(mut self, nested: DescriptorProto) -> Self {
        self.nested_type.push(nested);
        self
    }

    pub fn with_enum(mut self, nested: EnumDescriptorProto) -> Self {
        self.enum_type.push(nested);
        self
    }

    /// Set a boolean option such as the opt-in annotation
    pub fn with_option(mut self, name: &str, value: bool) -> Self {
        self.options.set_bool(name, value);
        self
    }
}

impl FieldDescriptorProto {
    /// A singular field of a primitive type
    pub fn scalar(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            label: Some(Label::Optional),
            r#type: Some(ty),
            ..Default::default()
        }
    }

    /// A singular field referencing a message
    pub fn message(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Some(Label::Optional),
            r#type: Some(FieldType::Message),
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    /// A singular field referencing an enum
    pub fn enumeration(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Some(Label::Optional),
            r#type: Some(FieldType::Enum),
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    /// Mark the field repeated
    pub fn repeated(mut self) -> Self {
        self.label = Some(Label::Repeated);
        self
    }

    pub fn is_repeated(&self) -> bool {
        matches!(self.label, Some(Label::Repeated))
    }
}

impl EnumDescriptorProto {
    /// An enum with the given value names, numbered from zero
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let value = values
            .into_iter()
            .zip(0..)
            .map(|(name, number)| EnumValueDescriptorProto {
                name: name.into(),
                number,
            })
            .collect();
        Self {
            name: name.into(),
            value,
        }
    }
}
