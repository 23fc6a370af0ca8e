//! Generate command implementation

use anyhow::{Context, Result};
use avroschema_codegen::{EmitFormat, SchemaGenerator};
use avroschema_core::{CONFIG_FILENAME, GeneratorConfig, LogLevel};
use avroschema_descriptor::FileDescriptorSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options of `avroschema generate`
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub descriptor_set: PathBuf,
    pub out: PathBuf,
    pub format: EmitFormat,
    pub config: Option<PathBuf>,
    pub files: Vec<String>,
    pub log_level: Option<LogLevel>,
}

/// Run the generate command: set up logging, then generate
pub fn run(options: GenerateOptions) -> Result<()> {
    let config = resolve_config(options.config.as_deref())?;
    let level = match options.log_level {
        Some(level) => level,
        None => config.log_level()?,
    };
    avroschema_logging::init_logging(level);

    let written = generate(&options, &config)?;

    println!(
        "✓ Generated {} file(s) in {}",
        written.len(),
        options.out.display()
    );
    Ok(())
}

/// Load the configuration to use
///
/// An explicit path must exist. Without one, `./avroschema.toml` is used
/// when present and defaults otherwise.
pub fn resolve_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let config = match path {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None if Path::new(CONFIG_FILENAME).is_file() => GeneratorConfig::load(CONFIG_FILENAME)
            .with_context(|| format!("Failed to load {CONFIG_FILENAME}"))?,
        None => GeneratorConfig::default(),
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Generate every requested file and write the output under `options.out`
///
/// Nothing is written unless generation succeeded for every source file.
pub fn generate(options: &GenerateOptions, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let set = FileDescriptorSet::load(&options.descriptor_set).with_context(|| {
        format!(
            "Failed to read descriptor set {}",
            options.descriptor_set.display()
        )
    })?;
    debug!(files = set.file.len(), "loaded descriptor set");

    let emitter = options.format.emitter();
    let generated = SchemaGenerator::from_config(config)
        .emit(&set, &options.files, emitter.as_ref())
        .context("Schema generation failed")?;

    fs::create_dir_all(&options.out)
        .with_context(|| format!("Failed to create directory: {}", options.out.display()))?;

    let mut written = Vec::with_capacity(generated.len());
    for file in generated {
        let path = options.out.join(&file.path);
        fs::write(&path, file.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote generated file");
        written.push(path);
    }

    Ok(written)
}
