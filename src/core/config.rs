//! Shared logger configuration
//!
//! Every field is an independent atomic read and written with relaxed
//! ordering. A reader may observe a freshly stored value in one field and a
//! stale one in another; a single field is never torn.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Environment variable holding the minimum level name
pub const ENV_LEVEL: &str = "SYNC_LOGGER_LEVEL";
/// Environment variable toggling the `(file:line)` suffix
pub const ENV_LOCATION: &str = "SYNC_LOGGER_LOCATION";
/// Environment variable toggling the thread identity segment
pub const ENV_THREAD_ID: &str = "SYNC_LOGGER_THREAD_ID";
/// Environment variable toggling ANSI colours
pub const ENV_COLOURS: &str = "SYNC_LOGGER_COLOURS";

/// Plain, serializable copy of the four settings
///
/// # Example
///
/// ```
/// use rust_sync_logger::{LoggerSettings, LogLevel};
///
/// let settings = LoggerSettings::from_json(r#"{"min_level": "WARN", "use_colours": false}"#).unwrap();
/// assert_eq!(settings.min_level, LogLevel::Warn);
/// assert!(settings.include_thread_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub min_level: LogLevel,
    pub include_location: bool,
    pub include_thread_id: bool,
    pub use_colours: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            include_location: false,
            include_thread_id: true,
            use_colours: true,
        }
    }
}

impl LoggerSettings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Process-lifetime configuration store read on every log call
#[derive(Debug)]
pub struct LoggerConfig {
    min_level: AtomicU8,
    include_location: AtomicBool,
    include_thread_id: AtomicBool,
    use_colours: AtomicBool,
}

impl LoggerConfig {
    pub const fn new() -> Self {
        Self {
            min_level: AtomicU8::new(LogLevel::Info as u8),
            include_location: AtomicBool::new(false),
            include_thread_id: AtomicBool::new(true),
            use_colours: AtomicBool::new(true),
        }
    }

    pub fn from_settings(settings: &LoggerSettings) -> Self {
        let config = Self::new();
        config.apply(settings);
        config
    }

    #[inline]
    pub fn set_level(&self, level: LogLevel) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn get_level(&self) -> LogLevel {
        // Only `set_level` stores here, so the value is always in range.
        LogLevel::from_u8(self.min_level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// The level gate: one relaxed load and a compare
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.is_enabled_raw(level as u8)
    }

    #[inline]
    pub fn is_enabled_raw(&self, level: u8) -> bool {
        level >= self.min_level.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_include_location(&self, enable: bool) {
        self.include_location.store(enable, Ordering::Relaxed);
    }

    #[inline]
    pub fn include_location(&self) -> bool {
        self.include_location.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_include_thread_id(&self, enable: bool) {
        self.include_thread_id.store(enable, Ordering::Relaxed);
    }

    #[inline]
    pub fn include_thread_id(&self) -> bool {
        self.include_thread_id.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_use_colours(&self, enable: bool) {
        self.use_colours.store(enable, Ordering::Relaxed);
    }

    #[inline]
    pub fn use_colours(&self) -> bool {
        self.use_colours.load(Ordering::Relaxed)
    }

    /// Read all four fields; each is loaded independently
    pub fn snapshot(&self) -> LoggerSettings {
        LoggerSettings {
            min_level: self.get_level(),
            include_location: self.include_location(),
            include_thread_id: self.include_thread_id(),
            use_colours: self.use_colours(),
        }
    }

    /// Store all four fields, one at a time
    pub fn apply(&self, settings: &LoggerSettings) {
        self.set_level(settings.min_level);
        self.set_include_location(settings.include_location);
        self.set_include_thread_id(settings.include_thread_id);
        self.set_use_colours(settings.use_colours);
    }

    /// Apply the `SYNC_LOGGER_*` environment variables
    ///
    /// Unset variables leave their field alone, except colours: without
    /// `SYNC_LOGGER_COLOURS` the decision comes from [`detect_colours`]
    /// against standard error, which is where lines are written.
    pub fn load_env(&self) -> Result<()> {
        let lookup = |key: &str| std::env::var(key).ok();
        self.load_from(lookup)?;

        if lookup(ENV_COLOURS).is_none() {
            self.set_use_colours(detect_colours(lookup, std::io::stderr().is_terminal()));
        }

        Ok(())
    }

    /// Apply settings from an arbitrary key lookup
    ///
    /// Fields parsed before an invalid value stay applied.
    pub fn load_from<F>(&self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_LEVEL) {
            let level = value
                .parse::<LogLevel>()
                .map_err(|e| LoggerError::config(ENV_LEVEL, e.to_string()))?;
            self.set_level(level);
        }
        if let Some(value) = lookup(ENV_LOCATION) {
            self.set_include_location(parse_flag(ENV_LOCATION, &value)?);
        }
        if let Some(value) = lookup(ENV_THREAD_ID) {
            self.set_include_thread_id(parse_flag(ENV_THREAD_ID, &value)?);
        }
        if let Some(value) = lookup(ENV_COLOURS) {
            self.set_use_colours(parse_flag(ENV_COLOURS, &value)?);
        }
        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Colour decision from the `CLICOLOR_FORCE` / `NO_COLOR` / `CLICOLOR`
/// conventions, in that order of precedence
///
/// A non-zero `CLICOLOR_FORCE` forces colours on; a non-empty `NO_COLOR`
/// turns them off; `CLICOLOR=0` turns them off. Otherwise colours follow
/// whether the sink is a terminal.
pub fn detect_colours<F>(lookup: F, sink_is_terminal: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if lookup("CLICOLOR_FORCE").is_some_and(|v| !v.is_empty() && v != "0") {
        return true;
    }
    if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if lookup("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }
    sink_is_terminal
}

fn parse_flag(component: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::config(
            component,
            format!("expected a boolean, got '{}'", value),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new();
        assert_eq!(config.get_level(), LogLevel::Info);
        assert!(!config.include_location());
        assert!(config.include_thread_id());
        assert!(config.use_colours());
        assert_eq!(config.snapshot(), LoggerSettings::default());
    }

    #[test]
    fn test_gate_follows_min_level() {
        let config = LoggerConfig::new();
        assert!(!config.is_enabled(LogLevel::Debug));
        assert!(config.is_enabled(LogLevel::Info));

        config.set_level(LogLevel::Fatal);
        for level in &LogLevel::ALL[..5] {
            assert!(!config.is_enabled(*level));
        }
        assert!(config.is_enabled(LogLevel::Fatal));
        assert!(config.is_enabled_raw(200));
    }

    #[test]
    fn test_setters_touch_only_their_field() {
        let config = LoggerConfig::new();
        config.set_include_location(true);
        assert_eq!(
            config.snapshot(),
            LoggerSettings {
                include_location: true,
                ..LoggerSettings::default()
            }
        );

        config.set_use_colours(false);
        config.set_include_thread_id(false);
        assert!(config.include_location());
        assert!(!config.include_thread_id());
        assert!(!config.use_colours());
        assert_eq!(config.get_level(), LogLevel::Info);
    }

    #[test]
    fn test_apply_and_snapshot() {
        let settings = LoggerSettings {
            min_level: LogLevel::Trace,
            include_location: true,
            include_thread_id: false,
            use_colours: false,
        };
        let config = LoggerConfig::from_settings(&settings);
        assert_eq!(config.snapshot(), settings);
    }

    #[test]
    fn test_settings_from_json() {
        let settings = LoggerSettings::from_json(r#"{"include_location": true}"#).unwrap();
        assert!(settings.include_location);
        assert_eq!(settings.min_level, LogLevel::Info);

        assert!(matches!(
            LoggerSettings::from_json(r#"{"min_level": "LOUD"}"#),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_load_from_lookup() {
        let config = LoggerConfig::new();
        config
            .load_from(lookup(&[
                (ENV_LEVEL, "debug"),
                (ENV_LOCATION, "yes"),
                (ENV_THREAD_ID, "0"),
                (ENV_COLOURS, "off"),
            ]))
            .unwrap();

        assert_eq!(config.get_level(), LogLevel::Debug);
        assert!(config.include_location());
        assert!(!config.include_thread_id());
        assert!(!config.use_colours());
    }

    #[test]
    fn test_load_from_keeps_unset_fields() {
        let config = LoggerConfig::new();
        config.set_include_location(true);
        config.load_from(lookup(&[(ENV_LEVEL, "error")])).unwrap();

        assert_eq!(config.get_level(), LogLevel::Error);
        assert!(config.include_location());
        assert!(config.include_thread_id());
    }

    #[test]
    fn test_load_from_rejects_bad_values() {
        let config = LoggerConfig::new();
        let err = config
            .load_from(lookup(&[(ENV_LEVEL, "warn"), (ENV_LOCATION, "maybe")]))
            .unwrap_err();

        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains(ENV_LOCATION));
        // the level was parsed before the failure
        assert_eq!(config.get_level(), LogLevel::Warn);

        let err = config.load_from(lookup(&[(ENV_LEVEL, "loud")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LEVEL));
    }

    #[test]
    fn test_detect_colours_follows_sink_terminal() {
        assert!(detect_colours(lookup(&[]), true));
        assert!(!detect_colours(lookup(&[]), false));
        assert!(detect_colours(lookup(&[("CLICOLOR", "1")]), true));
        assert!(!detect_colours(lookup(&[("CLICOLOR", "1")]), false));
    }

    #[test]
    fn test_detect_colours_env_conventions() {
        assert!(!detect_colours(lookup(&[("CLICOLOR", "0")]), true));
        assert!(!detect_colours(lookup(&[("NO_COLOR", "1")]), true));
        assert!(detect_colours(lookup(&[("NO_COLOR", "")]), true));
        assert!(detect_colours(lookup(&[("CLICOLOR_FORCE", "1")]), false));
        assert!(!detect_colours(lookup(&[("CLICOLOR_FORCE", "0")]), false));
        assert!(detect_colours(
            lookup(&[("CLICOLOR_FORCE", "1"), ("NO_COLOR", "1"), ("CLICOLOR", "0")]),
            false
        ));
    }
}
