//! Traversal session for one source unit.

use crate::cache::TypeCache;
use crate::naming::camel_case;
use avroschema_core::FieldNaming;
use avroschema_descriptor::DescriptorPool;

/// State threaded through the synthesis of one source file
///
/// Holds the descriptor pool used for enum resolution and the type cache
/// shared by every message of the unit. A session is never shared between
/// units, so independent files can be processed in parallel.
pub struct Session<'p, 'a> {
    pub(crate) pool: &'p DescriptorPool<'a>,
    pub(crate) cache: TypeCache,
    pub(crate) naming: FieldNaming,
}

impl<'p, 'a> Session<'p, 'a> {
    pub fn new(pool: &'p DescriptorPool<'a>, naming: FieldNaming) -> Self {
        Self {
            pool,
            cache: TypeCache::new(),
            naming,
        }
    }

    pub fn cache(&self) -> &TypeCache {
        &self.cache
    }

    /// Output name for a declared field or message name
    pub(crate) fn output_name(&self, declared: &str) -> String {
        match self.naming {
            FieldNaming::Declared => declared.to_string(),
            FieldNaming::CamelCase => camel_case(declared),
        }
    }
}
