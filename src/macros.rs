//! Logging macros
//!
//! Each macro takes any number of `Display` values and writes them back to
//! back, with no separator. The level gate is checked first: when the level
//! is filtered out, none of the argument expressions are evaluated.
//! The call site's `file!()` and `line!()` are captured automatically.
//!
//! # Examples
//!
//! ```
//! use rust_sync_logger::{info, warn};
//!
//! let user = "alice";
//! info!("User: ", user, " ID: ", 123);
//! warn!("Retry attempt ", 3, " of ", 5);
//! ```

/// Log through an explicit [`Logger`](crate::Logger).
///
/// # Examples
///
/// ```
/// use rust_sync_logger::{log_to, Logger, LogLevel};
///
/// let logger = Logger::with_sink(std::io::sink());
/// log_to!(logger, LogLevel::Info, "Processing ", 100, " items");
/// log_to!(logger, LogLevel::Trace, "never built: ", expensive());
/// # fn expensive() -> u64 { unreachable!() }
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::LogLevel = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                ::core::file!(),
                ::core::line!(),
                &[$(&$arg as &dyn ::core::fmt::Display),*],
            );
        }
    }};
}

/// Log at `level` through the process-wide logger.
///
/// ```
/// use rust_sync_logger::{log, LogLevel};
/// log!(LogLevel::Error, "Error code: ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_to!($crate::logger(), $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::LogLevel::Trace $(, $arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::LogLevel::Debug $(, $arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::LogLevel::Info $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::LogLevel::Warn $(, $arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::LogLevel::Error $(, $arg)*)
    };
}

/// Log a fatal-level message. This only logs; it does not abort.
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::LogLevel::Fatal $(, $arg)*)
    };
}
