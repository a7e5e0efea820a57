//! Main logger implementation

use super::{
    config::{LoggerConfig, LoggerSettings},
    error::{LoggerError, Result},
    format::render_arguments,
    log_level::LogLevel,
    log_record::{LineOptions, LogRecord},
    metrics::LoggerMetrics,
};
use parking_lot::Mutex;
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::panic::Location;

/// Destination every rendered line is written to
pub type Sink = Box<dyn Write + Send>;

/// A logging context: configuration, an exclusively locked sink and counters
///
/// Lines are rendered on the calling thread, then written under the sink
/// lock with a single `write_all` followed by `flush`, so concurrent lines
/// never interleave. Lines from one thread appear in call order.
pub struct Logger {
    config: LoggerConfig,
    sink: Mutex<Sink>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with default settings writing to standard error
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(io::stderr())
    }

    /// Logger with default settings writing to `sink`
    #[must_use]
    pub fn with_sink<W: Write + Send + 'static>(sink: W) -> Self {
        Self::from_parts(LoggerConfig::new(), Box::new(sink))
    }

    fn from_parts(config: LoggerConfig, sink: Sink) -> Self {
        Self {
            config,
            sink: Mutex::new(sink),
            metrics: LoggerMetrics::new(),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn set_level(&self, level: LogLevel) {
        self.config.set_level(level);
    }

    pub fn get_level(&self) -> LogLevel {
        self.config.get_level()
    }

    pub fn set_include_location(&self, enable: bool) {
        self.config.set_include_location(enable);
    }

    pub fn set_include_thread_id(&self, enable: bool) {
        self.config.set_include_thread_id(enable);
    }

    pub fn set_use_colours(&self, enable: bool) {
        self.config.set_use_colours(enable);
    }

    /// Check the gate before building any arguments
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.config.is_enabled(level)
    }

    #[inline]
    pub fn is_enabled_raw(&self, level: u8) -> bool {
        self.config.is_enabled_raw(level)
    }

    /// Render `args` back to back and write one line
    ///
    /// Arguments are already evaluated by the time this runs; use the
    /// logging macros or [`Logger::log_with`] when building them is costly.
    /// Sink failures are counted in [`Logger::metrics`] and otherwise ignored.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, args: &[&dyn Display]) {
        self.log_raw(level as u8, file, line, args);
    }

    /// Same as [`Logger::log`] for a numeric severity
    ///
    /// Values above `FATAL` pass the gate and render as `UNKNOWN`.
    pub fn log_raw(&self, level: u8, file: &str, line: u32, args: &[&dyn Display]) {
        if !self.is_enabled_raw(level) {
            return;
        }
        let _ = self.emit(level, file, line, render_arguments(args));
    }

    /// Like [`Logger::log`], but reports sink failures
    ///
    /// Returns `Ok(false)` when the level is filtered out.
    pub fn try_log(
        &self,
        level: LogLevel,
        file: &str,
        line: u32,
        args: &[&dyn Display],
    ) -> Result<bool> {
        if !self.is_enabled(level) {
            return Ok(false);
        }
        self.emit(level as u8, file, line, render_arguments(args))?;
        Ok(true)
    }

    /// Log a message produced by `message`, which only runs if the gate passes
    pub fn log_with<F>(&self, level: LogLevel, file: &str, line: u32, message: F)
    where
        F: FnOnce() -> String,
    {
        if !self.is_enabled(level) {
            return;
        }
        let _ = self.emit(level as u8, file, line, message());
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Display) {
        self.log_at_caller(LogLevel::Trace, &message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.log_at_caller(LogLevel::Debug, &message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log_at_caller(LogLevel::Info, &message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        self.log_at_caller(LogLevel::Warn, &message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log_at_caller(LogLevel::Error, &message);
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Display) {
        self.log_at_caller(LogLevel::Fatal, &message);
    }

    #[track_caller]
    fn log_at_caller(&self, level: LogLevel, message: &dyn Display) {
        if !self.is_enabled(level) {
            return;
        }
        let location = Location::caller();
        self.log(level, location.file(), location.line(), &[message]);
    }

    fn emit(&self, level: u8, file: &str, line: u32, message: String) -> Result<()> {
        let options = LineOptions::from_config(&self.config);
        let record = LogRecord::capture(level, message, file, line, &options);
        let text = record.render_line(&options);
        self.write_line(&text)
    }

    /// Hold the sink lock for exactly one write and flush
    fn write_line(&self, text: &str) -> Result<()> {
        let result = {
            let mut sink = self.sink.lock();
            sink.write_all(text.as_bytes()).and_then(|()| sink.flush())
        };

        match result {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(source) => {
                self.metrics.record_failure();
                Err(LoggerError::io_operation(
                    "writing log line",
                    "sink rejected the line",
                    source,
                ))
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use rust_sync_logger::{Logger, LogLevel};
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .include_location(true)
///     .use_colours(false)
///     .sink(std::io::sink())
///     .build();
///
/// assert!(logger.is_enabled(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    settings: LoggerSettings,
    sink: Option<Sink>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            settings: LoggerSettings::default(),
            sink: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.settings.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn include_location(mut self, enable: bool) -> Self {
        self.settings.include_location = enable;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn include_thread_id(mut self, enable: bool) -> Self {
        self.settings.include_thread_id = enable;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn use_colours(mut self, enable: bool) -> Self {
        self.settings.use_colours = enable;
        self
    }

    /// Replace all four settings at once
    #[must_use = "builder methods return a new value"]
    pub fn settings(mut self, settings: LoggerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Write to `sink` instead of standard error
    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stderr()));
        Logger::from_parts(LoggerConfig::from_settings(&self.settings), sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
