//! avroschema CLI - Avro schema generator
//!
//! Commands:
//! - `avroschema generate` - Generate Avro schemas from a descriptor set
//! - `avroschema check` - Validate an avroschema.toml configuration

use avroschema_codegen::EmitFormat;
use avroschema_core::{LogLevel, SchemaError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "avroschema")]
#[command(author, version, about = "Avro schema generator for protobuf messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Avro schemas for opted-in messages
    Generate {
        /// Descriptor set as JSON (e.g. `buf build --as-file-descriptor-set -o - | buf convert`)
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Output directory for generated files
        #[arg(short, long)]
        out: PathBuf,

        /// Output format (rust, avsc)
        #[arg(short, long, default_value = "rust")]
        format: EmitFormat,

        /// Path to avroschema.toml (default: ./avroschema.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Source files to generate (default: every file in the set)
        #[arg(long = "file")]
        files: Vec<String>,

        /// Override the configured log level
        #[arg(long)]
        log_level: Option<LogLevel>,
    },

    /// Validate an avroschema.toml configuration
    Check {
        /// Path to avroschema.toml (default: ./avroschema.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            descriptor_set,
            out,
            format,
            config,
            files,
            log_level,
        } => {
            generate::run(generate::GenerateOptions {
                descriptor_set,
                out,
                format,
                config,
                files,
                log_level,
            })?;
        }
        Commands::Check { config } => {
            check::check(config)?;
        }
    }

    Ok(())
}

/// Exit status for a failed command
///
/// The first [`SchemaError`] in the chain supplies its error code. Any
/// other failure (I/O, for instance) exits with 1.
fn exit_status(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<SchemaError>())
        .and_then(|schema_err| u8::try_from(schema_err.error_code()).ok())
        .unwrap_or(1)
}
