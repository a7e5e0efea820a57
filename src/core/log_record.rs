//! Ephemeral log record and line assembly

use super::config::LoggerConfig;
use super::format::{current_thread_identity, timestamp_now};
use super::log_level::{colour_code, level_name};
use std::fmt::Write;

// SGR bytes are written directly: the line format fixes them exactly, and
// `use_colours` alone decides whether they appear.
const COLOUR_RESET: &str = "\x1b[0m";

/// Which optional segments a rendered line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions {
    pub include_location: bool,
    pub include_thread_id: bool,
    pub use_colours: bool,
}

impl LineOptions {
    /// Read the three flags from `config`, each with its own relaxed load
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            include_location: config.include_location(),
            include_thread_id: config.include_thread_id(),
            use_colours: config.use_colours(),
        }
    }

    pub const fn plain() -> Self {
        Self {
            include_location: false,
            include_thread_id: false,
            use_colours: false,
        }
    }
}

/// One log call, built on the stack and discarded after it is written
///
/// `level` is kept as the raw severity so values outside the known range
/// still render (as `UNKNOWN`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub level: u8,
    pub message: String,
    pub file: &'a str,
    pub line: u32,
    pub timestamp: String,
    pub thread_id: String,
}

impl<'a> LogRecord<'a> {
    /// Stamp a rendered message with the current time, and with the
    /// calling thread when `options` asks for it
    pub fn capture(
        level: u8,
        message: String,
        file: &'a str,
        line: u32,
        options: &LineOptions,
    ) -> Self {
        let thread_id = if options.include_thread_id {
            current_thread_identity()
        } else {
            String::new()
        };

        Self {
            level,
            message,
            file,
            line,
            timestamp: timestamp_now(),
            thread_id,
        }
    }

    /// Assemble the full, newline-terminated line
    ///
    /// `[<colour>][<timestamp>] [<thread>] [<LEVEL>] <message> (<file>:<line>)<reset>\n`,
    /// with disabled segments left out entirely.
    pub fn render_line(&self, options: &LineOptions) -> String {
        let mut out = String::with_capacity(self.message.len() + self.thread_id.len() + 64);

        if options.use_colours {
            let _ = write!(out, "\x1b[{}m", colour_code(self.level));
        }

        let _ = write!(out, "[{}]", self.timestamp);

        if options.include_thread_id {
            let _ = write!(out, " [{}]", self.thread_id);
        }

        let _ = write!(out, " [{}] {}", level_name(self.level), self.message);

        if options.include_location {
            let _ = write!(out, " ({}:{})", self.file, self.line);
        }

        if options.use_colours {
            out.push_str(COLOUR_RESET);
        }

        out.push('\n');
        out
    }
}
