//! Emission of synthesized schemas.
//!
//! Emitters receive a whole [`FileSchemas`] unit only after every message
//! in it was synthesized, and turn it into files. Paths of the returned
//! [`GeneratedFile`]s are relative; the caller decides where they land.

mod avsc;
mod rust;

pub use avsc::AvscEmitter;
pub use rust::RustSourceEmitter;

use crate::walker::FileSchemas;
use avroschema_core::{SchemaError, SchemaResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Host-side consumer of synthesized schemas
pub trait SchemaEmitter {
    fn emit(&self, unit: &FileSchemas) -> SchemaResult<Vec<GeneratedFile>>;
}

/// Output format selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmitFormat {
    /// One Rust module per source file
    #[default]
    Rust,
    /// One `.avsc` document per message
    Avsc,
}

impl EmitFormat {
    pub fn emitter(self) -> Box<dyn SchemaEmitter> {
        match self {
            EmitFormat::Rust => Box::new(RustSourceEmitter::new()),
            EmitFormat::Avsc => Box::new(AvscEmitter),
        }
    }
}

impl FromStr for EmitFormat {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(EmitFormat::Rust),
            "avsc" | "avro" => Ok(EmitFormat::Avsc),
            _ => Err(SchemaError::Config(format!("unknown output format: {s}"))),
        }
    }
}

impl fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitFormat::Rust => write!(f, "rust"),
            EmitFormat::Avsc => write!(f, "avsc"),
        }
    }
}
