//! Avro schema synthesis from protobuf message descriptors.
//!
//! For every opted-in message of a source file a self-contained Avro record
//! schema is synthesized and handed to an emitter.
//!
//! # Architecture
//!
//! ```text
//! FileDescriptorSet
//!     ↓
//!  [SchemaGenerator]      one Session (and TypeCache) per file
//!     ↓
//!  [Record Assembler]     placeholder registered before fields
//!     ↓
//!  [Field Classifier] ──→ Type Mapper / TypeCache / DescriptorPool
//!     ↓
//!    RecordNode → schema text
//!     ↓
//!  ├─→ [RustSourceEmitter] → <file>_avro.rs
//!  └─→ [AvscEmitter]       → <namespace>.<Name>.avsc
//! ```
//!
//! Field nodes come in four shapes:
//!
//! - **Scalar**: a primitive field (`int64` → `"long"`)
//! - **Array**: a repeated primitive field
//! - **Enum**: an enum field with its symbols in declaration order
//! - **NestedRecord**: a message field, expanded inline at most once per file
//!
//! A type reached a second time reuses its cached fields, and a type that
//! refers back to itself wraps only the fields declared before the
//! reference, so synthesis always terminates.
//!
//! # Usage
//!
//! ```rust,no_run
//! use avroschema_codegen::{RustSourceEmitter, SchemaGenerator};
//! use avroschema_core::GeneratorConfig;
//! use avroschema_descriptor::FileDescriptorSet;
//!
//! let config = GeneratorConfig::load("avroschema.toml")?;
//! let set = FileDescriptorSet::load("descriptors.json")?;
//!
//! let files = SchemaGenerator::from_config(&config)
//!     .emit(&set, &[], &RustSourceEmitter::new())?;
//! for file in files {
//!     println!("{}", file.path.display());
//! }
//! # Ok::<(), avroschema_core::SchemaError>(())
//! ```

mod avro_types;
mod cache;
mod classify;
mod emit;
mod envelope;
pub mod naming;
mod node;
mod session;
mod walker;

pub use avro_types::{AvroPrimitive, map_field_type};
pub use cache::{CacheEntry, TypeCache};
pub use emit::{AvscEmitter, EmitFormat, GeneratedFile, RustSourceEmitter, SchemaEmitter};
pub use node::{FieldNode, NestedRecord, RecordNode};
pub use session::Session;
pub use walker::{FileSchemas, MessageSchema, SchemaGenerator};
