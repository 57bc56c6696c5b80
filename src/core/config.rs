//! Per-level logger configuration
//!
//! A [`Config`] is built once, usually at process start, and is read-only for
//! the lifetime of the logger that owns it.
//!
//! # Examples
//!
//! ```
//! use daily_logger::{Config, Destination, Destinations, LevelConfig, LogLevel, MetadataFlags};
//!
//! let mut config = Config::default().with_log_path("var/logs");
//! config.warning = LevelConfig::default_for(LogLevel::Warning)
//!     .with_destinations(Destination::Stderr | Destination::File);
//! config.trace = config.trace.with_destinations(Destinations::empty());
//!
//! assert!(config.validate().is_ok());
//! ```

use super::error::{LoggerError, Result};
use super::flags::{Destination, Destinations, Metadata, MetadataFlags};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Base directory used when [`Config::log_path`] is unset
pub const DEFAULT_LOG_PATH: &str = "logs";

/// File created inside each day directory
pub const DEFAULT_FILE_NAME: &str = "log.log";

/// Minimum width the default level prefixes are padded to
pub const DEFAULT_PREFIX_WIDTH: usize = 10;

/// Routing and formatting for a single level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub destinations: Destinations,
    pub prefix: String,
    pub flags: MetadataFlags,
}

impl LevelConfig {
    pub fn new(destinations: Destinations, prefix: impl Into<String>, flags: MetadataFlags) -> Self {
        Self {
            destinations,
            prefix: prefix.into(),
            flags,
        }
    }

    /// Stdout and file, level name padded to [`DEFAULT_PREFIX_WIDTH`],
    /// date, time and source location
    pub fn default_for(level: LogLevel) -> Self {
        Self {
            destinations: Destination::Stdout | Destination::File,
            prefix: format!("{:<width$}", level, width = DEFAULT_PREFIX_WIDTH),
            flags: Metadata::Date | Metadata::Time | Metadata::SourceLocation,
        }
    }

    #[must_use]
    pub fn with_destinations(mut self, destinations: impl Into<Destinations>) -> Self {
        self.destinations = destinations.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: impl Into<MetadataFlags>) -> Self {
        self.flags = flags.into();
        self
    }
}

/// Logger configuration
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the day directories; `logs` when unset
    pub log_path: Option<PathBuf>,
    pub trace: LevelConfig,
    pub debug: LevelConfig,
    pub info: LevelConfig,
    pub warning: LevelConfig,
    pub error: LevelConfig,
    /// File name inside each day directory
    pub file_name: String,
    /// Unix permission bits for created day directories
    pub dir_mode: Option<u32>,
    /// Unix permission bits for created log files
    pub file_mode: Option<u32>,
    /// Escape `\n`, `\r` and `\t` so one message is always one line
    pub sanitize_messages: bool,
    /// Print internal failures to the process stderr
    pub report_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: None,
            trace: LevelConfig::default_for(LogLevel::Trace),
            debug: LevelConfig::default_for(LogLevel::Debug),
            info: LevelConfig::default_for(LogLevel::Info),
            warning: LevelConfig::default_for(LogLevel::Warning),
            error: LevelConfig::default_for(LogLevel::Error),
            file_name: DEFAULT_FILE_NAME.to_string(),
            dir_mode: None,
            file_mode: None,
            sanitize_messages: false,
            report_errors: false,
        }
    }
}

impl Config {
    pub fn level(&self, level: LogLevel) -> &LevelConfig {
        match level {
            LogLevel::Trace => &self.trace,
            LogLevel::Debug => &self.debug,
            LogLevel::Info => &self.info,
            LogLevel::Warning => &self.warning,
            LogLevel::Error => &self.error,
        }
    }

    pub fn level_mut(&mut self, level: LogLevel) -> &mut LevelConfig {
        match level {
            LogLevel::Trace => &mut self.trace,
            LogLevel::Debug => &mut self.debug,
            LogLevel::Info => &mut self.info,
            LogLevel::Warning => &mut self.warning,
            LogLevel::Error => &mut self.error,
        }
    }

    /// Effective base directory for day directories
    pub fn base_path(&self) -> &Path {
        self.log_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_LOG_PATH))
    }

    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel, config: LevelConfig) -> Self {
        *self.level_mut(level) = config;
        self
    }

    /// Apply the same destinations to every level
    #[must_use]
    pub fn with_destinations(mut self, destinations: impl Into<Destinations>) -> Self {
        let destinations = destinations.into();
        for level in LogLevel::ALL {
            self.level_mut(level).destinations = destinations;
        }
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    #[must_use]
    pub fn with_modes(mut self, dir_mode: Option<u32>, file_mode: Option<u32>) -> Self {
        self.dir_mode = dir_mode;
        self.file_mode = file_mode;
        self
    }

    #[must_use]
    pub fn with_sanitized_messages(mut self, enabled: bool) -> Self {
        self.sanitize_messages = enabled;
        self
    }

    #[must_use]
    pub fn with_error_reporting(mut self, enabled: bool) -> Self {
        self.report_errors = enabled;
        self
    }

    /// Check values that would make every file write fail
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty file name, a
    /// file name with a path separator, or a mode above `0o7777`.
    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(LoggerError::config("Config", "file_name must not be empty"));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(LoggerError::config(
                "Config",
                format!("file_name '{}' must not contain a path separator", self.file_name),
            ));
        }
        for (name, mode) in [("dir_mode", self.dir_mode), ("file_mode", self.file_mode)] {
            if let Some(mode) = mode {
                if mode > 0o7777 {
                    return Err(LoggerError::config(
                        "Config",
                        format!("{} {:#o} is not a permission mode", name, mode),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_logger::{Config, Destination};
    ///
    /// let config = Config::from_json(r#"{
    ///     "log_path": "app-logs",
    ///     "error": {"destinations": ["Stderr", "File"], "prefix": "ERR ", "flags": ["Time"]}
    /// }"#).unwrap();
    ///
    /// assert!(config.error.destinations.contains(Destination::Stderr));
    /// assert_eq!(config.info, Config::default().info);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("Failed to read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_every_level_to_stdout_and_file() {
        let config = Config::default();
        for level in LogLevel::ALL {
            let level_config = config.level(level);
            assert!(level_config.destinations.contains(Destination::Stdout));
            assert!(level_config.destinations.contains(Destination::File));
            assert!(!level_config.destinations.contains(Destination::Stderr));
            assert_eq!(
                level_config.flags,
                Metadata::Date | Metadata::Time | Metadata::SourceLocation
            );
        }
    }

    #[test]
    fn test_default_prefixes_are_padded() {
        let config = Config::default();
        assert_eq!(config.info.prefix, "Info      ");
        assert_eq!(config.warning.prefix, "Warning   ");
        assert_eq!(config.error.prefix.len(), DEFAULT_PREFIX_WIDTH);
    }

    #[test]
    fn test_base_path_defaults_to_logs() {
        assert_eq!(Config::default().base_path(), Path::new("logs"));
        let config = Config::default().with_log_path("/tmp/app");
        assert_eq!(config.base_path(), Path::new("/tmp/app"));
    }

    #[test]
    fn test_with_destinations_applies_to_all_levels() {
        let config = Config::default().with_destinations(Destination::Stderr);
        for level in LogLevel::ALL {
            assert_eq!(
                config.level(level).destinations,
                Destinations::from(Destination::Stderr)
            );
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Config::default().validate().is_ok());
        assert!(Config::default().with_file_name("").validate().is_err());
        assert!(Config::default().with_file_name("a/b.log").validate().is_err());
        assert!(Config::default()
            .with_modes(Some(0o10000), None)
            .validate()
            .is_err());
        assert!(Config::default()
            .with_modes(Some(0o755), Some(0o644))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_json_partial_override() {
        let config = Config::from_json(r#"{"file_name": "app.log", "report_errors": true}"#).unwrap();
        assert_eq!(config.file_name, "app.log");
        assert!(config.report_errors);
        assert_eq!(config.trace, Config::default().trace);
    }

    #[test]
    fn test_json_invalid_config_is_rejected() {
        let err = Config::from_json(r#"{"file_name": ""}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Config::from_json("{not json").unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logger.json");
        let config = Config::default()
            .with_log_path("elsewhere")
            .with_level(
                LogLevel::Debug,
                LevelConfig::new(Destinations::empty(), "", MetadataFlags::empty()),
            );
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(Config::from_json_file(&path).unwrap(), config);
        assert!(Config::from_json_file(dir.path().join("missing.json")).is_err());
    }
}
