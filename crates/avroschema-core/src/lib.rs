//! avroschema-core - Shared types for the avroschema generator
//!
//! This crate provides the foundational types used by every other crate:
//! - [`SchemaError`] taxonomy for synthesis failures
//! - [`GeneratorConfig`] loaded from `avroschema.toml`
//! - [`LogLevel`] for configuring diagnostics

mod config;
mod error;

use std::str::FromStr;

pub use config::{
    CONFIG_FILENAME, FieldNaming, GeneratorConfig, NamespaceSource, OptInConfig, OutputConfig,
};
pub use error::{SchemaError, SchemaResult};

/// Log levels accepted in configuration and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl FromStr for LogLevel {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(SchemaError::Config(format!("unknown log level: {other}"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}
