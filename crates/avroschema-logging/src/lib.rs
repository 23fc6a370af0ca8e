//! avroschema-logging - tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber once per process
//! - [`level_filter`] and [`env_filter`] to turn a [`LogLevel`] into filters

mod filter;
mod init;

pub use avroschema_core::LogLevel;
pub use filter::{env_filter, level_filter};
pub use init::init_logging;
