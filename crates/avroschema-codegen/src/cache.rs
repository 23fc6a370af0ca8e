//! Per-unit memo table of synthesized types.
//!
//! One [`TypeCache`] lives for the traversal of one source file. Records are
//! keyed by their nesting path (`Request_Options`), nested references by
//! the CamelCase of the referring field. Each key holds one entry, which
//! keeps a shared type from being expanded per reference and a
//! self-referential type from recursing.

use crate::node::{FieldNode, NestedRecord, RecordNode};
use avroschema_core::{SchemaError, SchemaResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// A previously synthesized type
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    /// A message processed as a top-level record (possibly still assembling)
    Record(RecordNode),
    /// A type first reached through a nested reference
    Nested(NestedRecord),
}

impl CacheEntry {
    fn kind(&self) -> &'static str {
        match self {
            CacheEntry::Record(_) => "record",
            CacheEntry::Nested(_) => "nested record",
        }
    }
}

/// Mapping from cache key to synthesized entry
#[derive(Debug, Default)]
pub struct TypeCache {
    entries: HashMap<String, CacheEntry>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&CacheEntry> {
        let entry = self.entries.get(name);
        trace!(name, hit = entry.is_some(), "type cache lookup");
        entry
    }

    /// Insert a new entry; a second insert under the same name is a defect
    pub fn insert(&mut self, name: impl Into<String>, entry: CacheEntry) -> SchemaResult<()> {
        let name = name.into();
        if let Some(existing) = self.entries.get(&name) {
            return Err(SchemaError::CacheConsistency(format!(
                "{name} is already cached as a {}",
                existing.kind()
            )));
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Register a record before its fields are assembled
    ///
    /// A nested entry under the same key is promoted to the record, and an
    /// earlier record under the key is overwritten.
    pub fn register_record(&mut self, name: &str, placeholder: RecordNode) -> SchemaResult<()> {
        match self.entries.get(name) {
            None => self.insert(name, CacheEntry::Record(placeholder)),
            Some(existing) => {
                trace!(name, replaced = existing.kind(), "registering record over cached entry");
                self.entries
                    .insert(name.to_string(), CacheEntry::Record(placeholder));
                Ok(())
            }
        }
    }

    /// Publish the fields assembled so far for a registered record
    ///
    /// A reference resolved while the record is still assembling sees
    /// exactly these fields.
    pub fn update_fields(&mut self, name: &str, fields: Arc<[FieldNode]>) -> SchemaResult<()> {
        self.record_slot(name)?.fields = fields;
        Ok(())
    }

    /// Replace a registered record with its fully assembled form
    pub fn complete_record(&mut self, name: &str, record: RecordNode) -> SchemaResult<()> {
        *self.record_slot(name)? = record;
        Ok(())
    }

    fn record_slot(&mut self, name: &str) -> SchemaResult<&mut RecordNode> {
        match self.entries.get_mut(name) {
            Some(CacheEntry::Record(slot)) => Ok(slot),
            Some(other) => Err(SchemaError::CacheConsistency(format!(
                "record {name} was replaced by a {} during assembly",
                other.kind()
            ))),
            None => Err(SchemaError::CacheConsistency(format!(
                "record {name} completed without being registered"
            ))),
        }
    }

    /// Register an unexpanded nested reference
    ///
    /// An earlier nested entry under the same key is overwritten. A record
    /// under that key is left as it is and keeps answering lookups.
    pub fn register_nested(&mut self, name: &str, nested: NestedRecord) -> SchemaResult<()> {
        match self.entries.get(name) {
            None => self.insert(name, CacheEntry::Nested(nested)),
            Some(CacheEntry::Nested(_)) => {
                trace!(name, "overwriting nested entry");
                self.entries
                    .insert(name.to_string(), CacheEntry::Nested(nested));
                Ok(())
            }
            Some(CacheEntry::Record(_)) => {
                trace!(name, "keeping cached record over nested reference");
                Ok(())
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
