//! `.avsc` document emission.

use super::{GeneratedFile, SchemaEmitter};
use crate::walker::FileSchemas;
use avroschema_core::SchemaResult;
use std::path::PathBuf;

/// Emits `<namespace>.<Name>.avsc` per message
#[derive(Debug, Clone, Copy, Default)]
pub struct AvscEmitter;

impl SchemaEmitter for AvscEmitter {
    fn emit(&self, unit: &FileSchemas) -> SchemaResult<Vec<GeneratedFile>> {
        Ok(unit
            .schemas
            .iter()
            .map(|s| {
                let mut content = s.schema.clone();
                content.push('\n');
                GeneratedFile {
                    path: PathBuf::from(format!("{}.{}.avsc", unit.namespace, s.message)),
                    content,
                }
            })
            .collect())
    }
}
