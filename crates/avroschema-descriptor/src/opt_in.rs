//! Per-message opt-in selection
//!
//! Only messages the predicate accepts undergo schema synthesis. Messages
//! that are not opted in can still appear in output when an opted-in
//! message references them.

use crate::descriptor::{FileDescriptorProto, MessageRef};
use std::collections::HashSet;

/// Predicate deciding whether a message gets a schema
pub trait OptIn {
    fn is_opted_in(&self, file: &FileDescriptorProto, message: &MessageRef<'_>) -> bool;
}

impl<F> OptIn for F
where
    F: Fn(&FileDescriptorProto, &MessageRef<'_>) -> bool,
{
    fn is_opted_in(&self, file: &FileDescriptorProto, message: &MessageRef<'_>) -> bool {
        self(file, message)
    }
}

/// Boolean custom option on the message, defaulting to a file-wide option
#[derive(Debug, Clone)]
pub struct ExtensionOptIn {
    pub message_option: String,
    pub file_option: String,
}

impl ExtensionOptIn {
    pub fn new(message_option: impl Into<String>, file_option: impl Into<String>) -> Self {
        Self {
            message_option: message_option.into(),
            file_option: file_option.into(),
        }
    }
}

impl Default for ExtensionOptIn {
    fn default() -> Self {
        Self::new("gogoproto.avro_schema", "gogoproto.avro_schema_all")
    }
}

impl OptIn for ExtensionOptIn {
    fn is_opted_in(&self, file: &FileDescriptorProto, message: &MessageRef<'_>) -> bool {
        message
            .descriptor
            .options
            .bool_option(&self.message_option)
            .or_else(|| file.options.bool_option(&self.file_option))
            .unwrap_or(false)
    }
}

/// Explicit set of fully-qualified message names
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    names: HashSet<String>,
}

impl AllowList {
    /// Names are accepted with or without the leading dot
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim_start_matches('.').to_string())
            .collect();
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl OptIn for AllowList {
    fn is_opted_in(&self, _file: &FileDescriptorProto, message: &MessageRef<'_>) -> bool {
        let full_name = message.full_name();
        self.names.contains(full_name.trim_start_matches('.'))
    }
}

/// Every declared message
#[derive(Debug, Clone, Copy, Default)]
pub struct AllMessages;

impl OptIn for AllMessages {
    fn is_opted_in(&self, _file: &FileDescriptorProto, _message: &MessageRef<'_>) -> bool {
        true
    }
}

/// Accepts a message when any inner predicate does
#[derive(Default)]
pub struct AnyOf {
    predicates: Vec<Box<dyn OptIn + Send + Sync>>,
}

impl AnyOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: impl OptIn + Send + Sync + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl OptIn for AnyOf {
    fn is_opted_in(&self, file: &FileDescriptorProto, message: &MessageRef<'_>) -> bool {
        self.predicates
            .iter()
            .any(|p| p.is_opted_in(file, message))
    }
}
