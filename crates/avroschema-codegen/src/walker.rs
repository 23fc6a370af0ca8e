//! Message walker: drives synthesis over whole source units.

use crate::emit::{GeneratedFile, SchemaEmitter};
use crate::naming::namespace_from_file;
use crate::session::Session;
use avroschema_core::{GeneratorConfig, NamespaceSource, OutputConfig, SchemaError, SchemaResult};
use avroschema_descriptor::{
    AllMessages, AllowList, AnyOf, DescriptorPool, ExtensionOptIn, FileDescriptorProto,
    FileDescriptorSet, OptIn,
};
use tracing::{debug, info};

/// Schema text synthesized for one opted-in message
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSchema {
    /// Declared (short) message name
    pub message: String,
    /// Fully-qualified name with leading dot
    pub full_name: String,
    pub schema: String,
}

/// Every schema of one source unit, in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct FileSchemas {
    /// Logical file name as it appears in the descriptor set
    pub file: String,
    pub namespace: String,
    pub schemas: Vec<MessageSchema>,
}

impl FileSchemas {
    /// Base name of the source file without directories or `.proto`
    pub fn file_stem(&self) -> &str {
        let base = self.file.rsplit('/').next().unwrap_or(&self.file);
        base.strip_suffix(".proto").unwrap_or(base)
    }
}

/// Walks source units and produces one schema per opted-in message
///
/// # Example
///
/// ```
/// use avroschema_codegen::SchemaGenerator;
/// use avroschema_descriptor::{AllMessages, FileDescriptorSet};
///
/// let set = FileDescriptorSet::from_json_str(r#"{
///     "file": [{
///         "name": "point.proto",
///         "messageType": [{
///             "name": "Point",
///             "field": [{"name": "x", "number": 1, "type": "TYPE_INT32"}]
///         }]
///     }]
/// }"#)?;
///
/// let units = SchemaGenerator::new(AllMessages).generate(&set, &[])?;
/// assert_eq!(
///     units[0].schemas[0].schema,
///     r#"{"name": "Point", "type": "record", "namespace": "Point", "fields": [ {"name": "x", "type": "int"} ]}"#
/// );
/// # Ok::<(), avroschema_core::SchemaError>(())
/// ```
pub struct SchemaGenerator {
    output: OutputConfig,
    opt_in: Box<dyn OptIn + Send + Sync>,
}

impl SchemaGenerator {
    pub fn new(opt_in: impl OptIn + Send + Sync + 'static) -> Self {
        Self {
            output: OutputConfig::default(),
            opt_in: Box::new(opt_in),
        }
    }

    /// Build a generator from configuration
    ///
    /// The extension option is always consulted; a non-empty allowlist
    /// widens the selection, and `all` selects every message.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let opt_in = &config.opt_in;
        let generator = if opt_in.all {
            Self::new(AllMessages)
        } else {
            let mut any = AnyOf::new().with(ExtensionOptIn::new(
                opt_in.message_option.clone(),
                opt_in.file_option.clone(),
            ));
            if !opt_in.messages.is_empty() {
                any = any.with(AllowList::new(&opt_in.messages));
            }
            Self::new(any)
        };
        generator.with_output(config.output.clone())
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Record namespace for messages of `file`
    pub fn namespace_for(&self, file: &FileDescriptorProto) -> String {
        match self.output.namespace {
            NamespaceSource::Package if !file.package.is_empty() => file.package.clone(),
            _ => namespace_from_file(&file.name),
        }
    }

    /// Synthesize every opted-in message of one source unit
    ///
    /// A fresh type cache is used per unit. The first failure aborts the
    /// unit and nothing of it is returned.
    pub fn generate_file(
        &self,
        pool: &DescriptorPool<'_>,
        file: &FileDescriptorProto,
    ) -> SchemaResult<FileSchemas> {
        let namespace = self.namespace_for(file);
        let mut session = Session::new(pool, self.output.field_names);
        let mut schemas = Vec::new();

        for message in file.messages() {
            if !self.opt_in.is_opted_in(file, &message) {
                debug!(message = %message.full_name(), "message not opted in");
                continue;
            }

            let record = session
                .assemble_record(&message, &namespace)
                .map_err(|e| e.in_message(message.full_name()))?;
            let schema = if self.output.pretty {
                prettify(&record.schema()).map_err(|e| e.in_message(message.full_name()))?
            } else {
                record.schema()
            };

            debug!(message = %message.full_name(), "synthesized schema");
            schemas.push(MessageSchema {
                message: message.name().to_string(),
                full_name: message.full_name(),
                schema,
            });
        }

        info!(
            file = %file.name,
            schemas = schemas.len(),
            cached = session.cache().len(),
            "generated file schemas"
        );
        Ok(FileSchemas {
            file: file.name.clone(),
            namespace,
            schemas,
        })
    }

    /// Synthesize the requested files of a descriptor set
    ///
    /// An empty `files` list selects every file. Enum references resolve
    /// against the whole set, so imported files need not be requested.
    pub fn generate(
        &self,
        set: &FileDescriptorSet,
        files: &[String],
    ) -> SchemaResult<Vec<FileSchemas>> {
        let pool = DescriptorPool::new(set);

        let selected: Vec<&FileDescriptorProto> = if files.is_empty() {
            set.file.iter().collect()
        } else {
            files
                .iter()
                .map(|name| {
                    set.file_by_name(name).ok_or_else(|| {
                        SchemaError::Descriptor(format!("file {name} is not in the descriptor set"))
                    })
                })
                .collect::<SchemaResult<_>>()?
        };

        selected
            .into_iter()
            .map(|file| self.generate_file(&pool, file))
            .collect()
    }

    /// Generate and hand every unit to `emitter`
    ///
    /// Emission starts only once every requested unit has succeeded.
    pub fn emit(
        &self,
        set: &FileDescriptorSet,
        files: &[String],
        emitter: &dyn SchemaEmitter,
    ) -> SchemaResult<Vec<GeneratedFile>> {
        let units = self.generate(set, files)?;
        let mut generated = Vec::new();
        for unit in &units {
            generated.extend(emitter.emit(unit)?);
        }
        Ok(generated)
    }
}

/// Re-render single-line schema text as indented JSON, keeping key order
fn prettify(schema: &str) -> SchemaResult<String> {
    let value: serde_json::Value = serde_json::from_str(schema)
        .map_err(|e| SchemaError::Emit(format!("synthesized schema is not valid JSON: {e}")))?;
    serde_json::to_string_pretty(&value).map_err(|e| SchemaError::Emit(e.to_string()))
}
