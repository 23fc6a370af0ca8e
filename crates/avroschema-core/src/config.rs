//! Generator configuration types

use crate::{LogLevel, SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The standard configuration filename.
pub const CONFIG_FILENAME: &str = "avroschema.toml";

/// Configuration for one generator invocation
///
/// Every key is optional; an empty file yields [`GeneratorConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Which messages undergo schema synthesis
    #[serde(default)]
    pub opt_in: OptInConfig,

    /// How the schema text is rendered
    #[serde(default)]
    pub output: OutputConfig,
}

/// Opt-in selection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OptInConfig {
    /// Boolean message option that opts a message in
    #[serde(default = "default_message_option")]
    pub message_option: String,

    /// Boolean file option used when the message option is absent
    #[serde(default = "default_file_option")]
    pub file_option: String,

    /// Fully-qualified message names opted in regardless of options
    #[serde(default)]
    pub messages: Vec<String>,

    /// Opt every declared message in
    #[serde(default)]
    pub all: bool,
}

/// Output rendering settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Where the record namespace comes from
    #[serde(default)]
    pub namespace: NamespaceSource,

    /// How field and record names are derived from declarations
    #[serde(default)]
    pub field_names: FieldNaming,

    /// Pretty-print the schema JSON
    #[serde(default)]
    pub pretty: bool,
}

/// Source of the record namespace
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NamespaceSource {
    /// Logical name of the source file (`order_events.proto` -> `OrderEvents`)
    #[default]
    File,
    /// The proto package, falling back to the file name when empty
    Package,
}

/// Naming of fields and records in the output
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FieldNaming {
    /// Names exactly as declared
    #[default]
    Declared,
    /// Proto-style CamelCase (`created_at` -> `CreatedAt`)
    CamelCase,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_message_option() -> String {
    "gogoproto.avro_schema".to_string()
}

fn default_file_option() -> String {
    "gogoproto.avro_schema_all".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            opt_in: OptInConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OptInConfig {
    fn default() -> Self {
        Self {
            message_option: default_message_option(),
            file_option: default_file_option(),
            messages: Vec::new(),
            all: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SchemaError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> SchemaResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Parsed log level
    pub fn log_level(&self) -> SchemaResult<LogLevel> {
        self.log_level.parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> SchemaResult<()> {
        self.log_level()?;

        if self.opt_in.message_option.trim().is_empty() {
            return Err(SchemaError::Config(
                "opt_in.message_option cannot be empty".to_string(),
            ));
        }

        if self.opt_in.file_option.trim().is_empty() {
            return Err(SchemaError::Config(
                "opt_in.file_option cannot be empty".to_string(),
            ));
        }

        if let Some(pos) = self.opt_in.messages.iter().position(|m| m.trim().is_empty()) {
            return Err(SchemaError::Config(format!(
                "opt_in.messages[{pos}] cannot be empty"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
