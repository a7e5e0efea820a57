//! Core logger types

pub mod config;
pub mod error;
pub mod format;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{detect_colours, LoggerConfig, LoggerSettings};
pub use error::{LoggerError, Result};
pub use format::{current_thread_identity, render_arguments, timestamp_now};
pub use log_level::{colour_code, level_name, LogLevel};
pub use log_record::{LineOptions, LogRecord};
pub use logger::{Logger, LoggerBuilder, Sink};
pub use metrics::LoggerMetrics;
