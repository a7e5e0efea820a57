//! # Rust Sync Logger
//!
//! A small process-wide logging facility. Callers on any thread emit leveled
//! messages; each one is filtered by severity, rendered into a single line
//! and written to standard error under a lock, so lines never interleave.
//!
//! ```text
//! [2025-01-08 10:30:45.123] [ThreadId(1)] [INFO] User: alice ID: 123
//! ```
//!
//! ## Features
//!
//! - **Cheap filtering**: a disabled level costs one relaxed atomic load and
//!   the macros never evaluate their arguments
//! - **Atomic lines**: one locked write and flush per line
//! - **Runtime configuration**: level, location, thread id and colours can be
//!   changed from any thread at any time
//!
//! ```
//! use rust_sync_logger::{info, debug, LogLevel};
//!
//! rust_sync_logger::set_level(LogLevel::Debug);
//! rust_sync_logger::set_include_location(true);
//!
//! info!("Server listening on port ", 8080);
//! debug!("Loaded ", 3, " routes");
//! ```

pub mod core;
pub mod macros;

use std::sync::OnceLock;

pub mod prelude {
    pub use crate::core::{
        LineOptions, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, LoggerSettings, Result,
    };
    pub use crate::{get_level, is_enabled, logger, set_level};
}

pub use crate::core::{
    LineOptions, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, LoggerSettings, Result,
};

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created on first use with default settings
/// and writing to standard error
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new)
}

pub fn set_level(level: LogLevel) {
    logger().set_level(level);
}

pub fn get_level() -> LogLevel {
    logger().get_level()
}

pub fn set_include_location(enable: bool) {
    logger().set_include_location(enable);
}

pub fn set_include_thread_id(enable: bool) {
    logger().set_include_thread_id(enable);
}

pub fn set_use_colours(enable: bool) {
    logger().set_use_colours(enable);
}

#[inline]
pub fn is_enabled(level: LogLevel) -> bool {
    logger().is_enabled(level)
}

/// Configure the process-wide logger from `SYNC_LOGGER_*` environment variables
pub fn init_from_env() -> Result<()> {
    logger().config().load_env()
}
