//! Configuration check command

use anyhow::{Context, Result};
use avroschema_core::{CONFIG_FILENAME, GeneratorConfig};
use std::path::PathBuf;

/// Check command implementation
pub fn check(config_path: Option<PathBuf>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    println!("Checking configuration: {}", path.display());

    let config = load_checked(&path)?;

    println!("✓ Log level: {}", config.log_level()?);
    println!("✓ Message option: {}", config.opt_in.message_option);
    println!("✓ File option: {}", config.opt_in.file_option);
    if config.opt_in.all {
        println!("✓ Selection: every message");
    } else {
        println!("✓ Allowlist: {} message(s)", config.opt_in.messages.len());
    }
    println!("\nConfiguration is valid!");

    Ok(())
}

/// Load and validate a configuration file
pub fn load_checked(path: &std::path::Path) -> Result<GeneratorConfig> {
    let config = GeneratorConfig::load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}
