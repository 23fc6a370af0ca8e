//! avroschema-descriptor - The input boundary of the generator
//!
//! Schema synthesis consumes protobuf descriptors. This crate models them as
//! plain serde types deserialized from the JSON rendering of a
//! `google.protobuf.FileDescriptorSet`, as produced by
//! `buf build --as-file-descriptor-set -o set.json`.
//!
//! JSON is used because custom options (the opt-in annotation among them)
//! are rendered explicitly as `"[pkg.ext]": value` keys, so no
//! extension-aware protobuf runtime is needed to read them.
//!
//! - [`FileDescriptorSet`] and friends: the descriptor tree
//! - [`FieldType`] / [`Label`]: field type tags and cardinality
//! - [`DescriptorPool`]: fully-qualified name resolution across a set
//! - [`OptIn`]: the per-message opt-in predicate

mod descriptor;
mod field_type;
mod opt_in;
mod pool;

pub use descriptor::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageRef, Options,
};
pub use field_type::{FieldType, Label, TypeCategory};
pub use opt_in::{AllMessages, AllowList, AnyOf, ExtensionOptIn, OptIn};
pub use pool::DescriptorPool;
