//! Error types for schema synthesis

use thiserror::Error;

/// Result type alias for schema synthesis operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type for schema synthesis
///
/// Every variant is unrecoverable for the source unit being processed: the
/// walker never retries and never emits partial output.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A field's primitive type tag is outside the recognised set
    #[error("unknown primitive type {tag} for field {field}")]
    UnknownPrimitiveType { field: String, tag: String },

    /// A field's type category is unrecognised (groups are skipped, not errors)
    #[error("unknown type for {field}")]
    UnknownFieldType { field: String },

    /// An enum-typed field references a declaration the pool cannot resolve
    #[error("enum {type_name} not found for field {field}")]
    EnumNotFound { field: String, type_name: String },

    /// The type cache holds an entry of an unexpected shape
    #[error("type cache inconsistency: {0}")]
    CacheConsistency(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed descriptor input
    #[error("descriptor error: {0}")]
    Descriptor(String),

    /// The emission collaborator failed
    #[error("emit error: {0}")]
    Emit(String),

    /// Failure while synthesizing a specific message
    #[error("message {message}: {source}")]
    InMessage {
        message: String,
        #[source]
        source: Box<SchemaError>,
    },
}

impl SchemaError {
    /// Wrap this error with the name of the message being synthesized
    pub fn in_message(self, message: impl Into<String>) -> Self {
        SchemaError::InMessage {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping message context
    pub fn root_cause(&self) -> &SchemaError {
        match self {
            SchemaError::InMessage { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns a stable error code, suitable for process exit statuses
    pub fn error_code(&self) -> u32 {
        match self {
            SchemaError::UnknownPrimitiveType { .. } => 1,
            SchemaError::UnknownFieldType { .. } => 2,
            SchemaError::EnumNotFound { .. } => 3,
            SchemaError::CacheConsistency(_) => 4,
            SchemaError::Config(_) => 5,
            SchemaError::Descriptor(_) => 6,
            SchemaError::Emit(_) => 7,
            SchemaError::InMessage { source, .. } => source.error_code(),
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Descriptor(err.to_string())
    }
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::Config(err.to_string())
    }
}
