//! Field classification and reference resolution.

use crate::avro_types::map_field_type;
use crate::cache::CacheEntry;
use crate::naming::{camel_case, short_name};
use crate::node::{FieldNode, NestedRecord};
use crate::session::Session;
use avroschema_core::{SchemaError, SchemaResult};
use avroschema_descriptor::{FieldDescriptorProto, TypeCategory};
use tracing::{debug, trace};

impl Session<'_, '_> {
    /// Produce the node for one field, or `None` for a skipped group field
    ///
    /// Repeated fields always take the array path, whose element type must
    /// be primitive: repeated message and enum fields fail with
    /// [`SchemaError::UnknownPrimitiveType`].
    pub fn classify(&mut self, field: &FieldDescriptorProto) -> SchemaResult<Option<FieldNode>> {
        if field.is_repeated() {
            return Ok(Some(FieldNode::Array {
                name: self.output_name(&field.name),
                items: map_field_type(field)?,
            }));
        }

        let category = field
            .r#type
            .as_ref()
            .map_or(TypeCategory::Unknown, |t| t.category());

        match category {
            TypeCategory::Primitive => Ok(Some(FieldNode::Scalar {
                name: self.output_name(&field.name),
                ty: map_field_type(field)?,
            })),
            TypeCategory::Message => self.resolve_nested(field).map(Some),
            TypeCategory::Enum => self.resolve_enum(field).map(Some),
            TypeCategory::Group => {
                debug!(field = %field.name, "skipping group field");
                Ok(None)
            }
            TypeCategory::Unknown => Err(SchemaError::UnknownFieldType {
                field: field.name.clone(),
            }),
        }
    }

    /// Resolve a message-typed field to a nested record
    ///
    /// Lookups use the CamelCase of the referenced type's short name, which
    /// also names the node. A cached record lends its fields to a new node
    /// named after this field; a cached nested node is returned as-is, field
    /// name included. Otherwise an unexpanded node is cached under this
    /// field's CamelCased name, not the type's. A record already cached
    /// under that field key is left untouched.
    pub fn resolve_nested(&mut self, field: &FieldDescriptorProto) -> SchemaResult<FieldNode> {
        let type_name = referenced_type(field)?;
        let short = short_name(type_name);
        let key = camel_case(short);

        match self.cache.lookup(&key) {
            Some(CacheEntry::Record(record)) => {
                trace!(field = %field.name, type_name = %key, "reusing cached record");
                let fields = record.fields.clone();
                Ok(FieldNode::NestedRecord(NestedRecord {
                    field_name: self.output_name(&field.name),
                    type_name: self.output_name(&key),
                    fields,
                }))
            }
            Some(CacheEntry::Nested(nested)) => {
                trace!(field = %field.name, type_name = %key, "sharing cached nested record");
                Ok(FieldNode::NestedRecord(nested.clone()))
            }
            None => {
                let nested = NestedRecord::unexpanded(
                    self.output_name(&field.name),
                    self.output_name(&key),
                );
                self.cache
                    .register_nested(&camel_case(&field.name), nested.clone())?;
                Ok(FieldNode::NestedRecord(nested))
            }
        }
    }

    /// Resolve an enum-typed field to its symbol list in declaration order
    pub fn resolve_enum(&mut self, field: &FieldDescriptorProto) -> SchemaResult<FieldNode> {
        let type_name = field.type_name.as_deref().unwrap_or_default();
        let declaration =
            self.pool
                .resolve_enum(type_name)
                .ok_or_else(|| SchemaError::EnumNotFound {
                    field: field.name.clone(),
                    type_name: type_name.to_string(),
                })?;

        Ok(FieldNode::Enum {
            name: self.output_name(&field.name),
            type_name: short_name(type_name).to_string(),
            symbols: declaration.value.iter().map(|v| v.name.clone()).collect(),
        })
    }
}

fn referenced_type(field: &FieldDescriptorProto) -> SchemaResult<&str> {
    field
        .type_name
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            SchemaError::Descriptor(format!("message field {} has no type_name", field.name))
        })
}
