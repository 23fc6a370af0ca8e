//! Fully-qualified name resolution across a descriptor set

use crate::descriptor::{EnumDescriptorProto, FileDescriptorProto, FileDescriptorSet, qualify};
use std::collections::HashMap;

/// Index of every enum declared in a [`FileDescriptorSet`], top-level or
/// nested in a message
///
/// Keys are fully-qualified names with a leading dot (`.shop.Order.Status`),
/// the form protoc writes into `type_name`.
#[derive(Debug, Default)]
pub struct DescriptorPool<'a> {
    enums: HashMap<String, &'a EnumDescriptorProto>,
}

impl<'a> DescriptorPool<'a> {
    /// Index every file of the set
    pub fn new(set: &'a FileDescriptorSet) -> Self {
        let mut pool = Self::default();
        for file in &set.file {
            pool.add_file(file);
        }
        pool
    }

    /// Index a single file
    pub fn add_file(&mut self, file: &'a FileDescriptorProto) {
        for e in &file.enum_type {
            self.enums.insert(qualify(&file.package, &[], &e.name), e);
        }
        for message in file.messages() {
            for e in &message.descriptor.enum_type {
                let mut parents = message.parents.clone();
                parents.push(message.descriptor.name.clone());
                self.enums.insert(qualify(&file.package, &parents, &e.name), e);
            }
        }
    }

    /// Resolve an enum by name; a missing leading dot is tolerated
    pub fn resolve_enum(&self, type_name: &str) -> Option<&'a EnumDescriptorProto> {
        self.enums.get(&normalize(type_name)).copied()
    }
}

fn normalize(type_name: &str) -> String {
    if type_name.starts_with('.') {
        type_name.to_string()
    } else {
        format!(".{type_name}")
    }
}
