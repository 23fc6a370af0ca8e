//! Record assembly.

use crate::naming::camel_case_path;
use crate::node::RecordNode;
use crate::session::Session;
use avroschema_core::SchemaResult;
use avroschema_descriptor::MessageRef;
use tracing::debug;

impl Session<'_, '_> {
    /// Assemble the record for one message
    ///
    /// The record is cached under its nesting path before any field is
    /// classified, and the cached fields grow as each field is added. A
    /// field referring back to the message therefore wraps the fields
    /// declared before it instead of recursing. Any field failure aborts
    /// the whole record.
    pub fn assemble_record(
        &mut self,
        message: &MessageRef<'_>,
        namespace: &str,
    ) -> SchemaResult<RecordNode> {
        let descriptor = message.descriptor;
        let name = self.output_name(&descriptor.name);
        let key = record_key(message);
        self.cache
            .register_record(&key, RecordNode::placeholder(&name, namespace))?;

        let mut fields = Vec::with_capacity(descriptor.field.len());
        for field in &descriptor.field {
            if let Some(node) = self.classify(field)? {
                fields.push(node);
                self.cache.update_fields(&key, fields.as_slice().into())?;
            }
        }
        debug!(record = %name, key = %key, fields = fields.len(), "assembled record");

        let record = RecordNode {
            name,
            namespace: namespace.to_string(),
            fields: fields.into(),
        };
        self.cache.complete_record(&key, record.clone())?;
        Ok(record)
    }
}

/// Cache key of a message record: its CamelCased nesting path
fn record_key(message: &MessageRef<'_>) -> String {
    camel_case_path(
        message
            .parents
            .iter()
            .map(String::as_str)
            .chain([message.name()]),
    )
}
