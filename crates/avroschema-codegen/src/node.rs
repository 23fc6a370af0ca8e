//! Schema nodes and their textual rendering.
//!
//! Field nodes form a closed sum type with one template per variant. Child
//! field lists are reference-counted so a nested record resolved from the
//! cache shares its fields with every other reference to the same type.

use crate::avro_types::AvroPrimitive;
use std::sync::Arc;

/// One field of a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldNode {
    /// `{"name": N, "type": T}`
    Scalar { name: String, ty: AvroPrimitive },

    /// `{"name": N, "type": {"type": "array", "items": T}}`
    Array { name: String, items: AvroPrimitive },

    /// `{"name": N, "type": {"type": "enum", "name": E, "symbols": [ ... ]}}`
    Enum {
        name: String,
        type_name: String,
        symbols: Vec<String>,
    },

    /// `{"name": N, "type": { "name": R, "type": "record", "fields": [ ... ] }}`
    NestedRecord(NestedRecord),
}

/// A record-typed field with its inline record definition
#[derive(Debug, Clone, PartialEq)]
pub struct NestedRecord {
    pub field_name: String,
    pub type_name: String,
    pub fields: Arc<[FieldNode]>,
}

/// A named, namespaced record: the root of one message's schema
#[derive(Debug, Clone, PartialEq)]
pub struct RecordNode {
    pub name: String,
    pub namespace: String,
    pub fields: Arc<[FieldNode]>,
}

impl FieldNode {
    pub fn name(&self) -> &str {
        match self {
            FieldNode::Scalar { name, .. }
            | FieldNode::Array { name, .. }
            | FieldNode::Enum { name, .. } => name,
            FieldNode::NestedRecord(nested) => &nested.field_name,
        }
    }

    /// Append this field's schema text to `out`
    pub fn render(&self, out: &mut String) {
        match self {
            FieldNode::Scalar { name, ty } => {
                out.push_str("{\"name\": ");
                push_quoted(out, name);
                out.push_str(", \"type\": ");
                push_quoted(out, ty.as_str());
                out.push('}');
            }
            FieldNode::Array { name, items } => {
                out.push_str("{\"name\": ");
                push_quoted(out, name);
                out.push_str(", \"type\": {\"type\": \"array\", \"items\": ");
                push_quoted(out, items.as_str());
                out.push_str("}}");
            }
            FieldNode::Enum {
                name,
                type_name,
                symbols,
            } => {
                out.push_str("{\"name\": ");
                push_quoted(out, name);
                out.push_str(", \"type\": {\"type\": \"enum\", \"name\": ");
                push_quoted(out, type_name);
                out.push_str(", \"symbols\": [ ");
                for (i, symbol) in symbols.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    push_quoted(out, symbol);
                }
                out.push_str(" ]}}");
            }
            FieldNode::NestedRecord(nested) => {
                out.push_str("{\"name\": ");
                push_quoted(out, &nested.field_name);
                out.push_str(", \"type\": { \"name\": ");
                push_quoted(out, &nested.type_name);
                out.push_str(", \"type\": \"record\", \"fields\": [ ");
                render_fields(out, &nested.fields);
                out.push_str(" ] }}");
            }
        }
    }

    /// This field's schema text
    pub fn schema(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }
}

impl NestedRecord {
    /// A nested reference whose fields are not expanded
    pub fn unexpanded(field_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            type_name: type_name.into(),
            fields: Vec::new().into(),
        }
    }
}

impl RecordNode {
    /// A record with no fields yet, registered before its fields are assembled
    pub fn placeholder(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            fields: Vec::new().into(),
        }
    }

    /// The record's schema document
    pub fn schema(&self) -> String {
        let mut out = String::with_capacity(64 + self.fields.len() * 48);
        out.push_str("{\"name\": ");
        push_quoted(&mut out, &self.name);
        out.push_str(", \"type\": \"record\", \"namespace\": ");
        push_quoted(&mut out, &self.namespace);
        out.push_str(", \"fields\": [ ");
        render_fields(&mut out, &self.fields);
        out.push_str(" ]}");
        out
    }
}

fn render_fields(out: &mut String, fields: &[FieldNode]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        field.render(out);
    }
}

/// Push `s` as an escaped JSON string literal
fn push_quoted(out: &mut String, s: &str) {
    out.push_str(&serde_json::Value::String(s.to_owned()).to_string());
}

#[cfg(test)]
#[path = "node/node_tests.rs"]
mod node_tests;
