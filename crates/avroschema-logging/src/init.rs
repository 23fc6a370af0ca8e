//! Global subscriber installation

use crate::filter::env_filter;
use avroschema_core::LogLevel;
use tracing_subscriber::prelude::*;

/// Initialize logging at `level`, honouring `RUST_LOG` when set
///
/// Events are written to stderr so generated output on stdout stays clean.
/// Returns `false` when a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(level: LogLevel) -> bool {
    let directives = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(level, directives.as_deref());

    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .try_init()
        .is_ok()
}
