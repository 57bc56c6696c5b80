//! Main logger implementation

use super::{
    composer::WriterComposer,
    config::Config,
    error::{LoggerError, Result},
    formatter::{FormattingWriter, LineFormatter},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    timestamp::{Clock, SystemClock},
};
use crate::writers::{ConsoleStreams, Rotation};
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::fmt::Display;
use std::io;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

/// Leveled logger writing to console streams and a daily log file
///
/// Every emit method takes the same lock for the whole compose, format and
/// write sequence, so lines from concurrent callers never interleave. Emit
/// methods never fail or panic on I/O errors; see [`Logger::metrics`] for
/// lines that did not reach every destination.
///
/// # Example
///
/// ```no_run
/// use daily_logger::{Config, Logger};
///
/// let logger = Logger::new(Config::default().with_log_path("var/log/app"));
/// logger.info("server started");
/// logger.warning(format_args!("{} connections pending", 3));
/// logger.error(std::io::Error::other("disk unavailable"));
/// ```
pub struct Logger {
    config: Config,
    clock: Arc<dyn Clock>,
    composer: Mutex<WriterComposer>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger for `config` writing to the process's stdout and stderr
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::builder().config(config).build()
    }

    #[track_caller]
    pub fn trace(&self, message: impl Display) {
        self.log_at(LogLevel::Trace, Location::caller(), &message);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.log_at(LogLevel::Debug, Location::caller(), &message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log_at(LogLevel::Info, Location::caller(), &message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl Display) {
        self.log_at(LogLevel::Warning, Location::caller(), &message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log_at(LogLevel::Error, Location::caller(), &message);
    }

    /// Emit at `level`, attributing the line to the caller
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Display) {
        self.log_at(level, Location::caller(), &message);
    }

    /// Emit at `level`, attributing the line to `location`
    ///
    /// For wrappers that capture the call site themselves.
    pub fn log_at(
        &self,
        level: LogLevel,
        location: &'static Location<'static>,
        message: &dyn Display,
    ) {
        let level_config = self.config.level(level);
        if level_config.destinations.is_empty() {
            return;
        }

        // Rendered before locking: a Display impl may log through this logger
        let message = message.to_string();

        let mut composer = self.composer.lock();
        let mut entry = LogEntry::new(level, message, self.clock.now(), location);
        if self.config.sanitize_messages {
            entry = entry.sanitized();
        }

        let composed = composer.compose(level_config, entry.timestamp.date_naive());
        if let Some(rotation) = composed.rotation {
            self.observe_rotation(rotation);
        }

        let file_missing = composed.file_missing;
        let formatter = LineFormatter::new(&level_config.prefix, level_config.flags);
        let mut writer = FormattingWriter::new(composed.writer, formatter);
        let written = writer.write_entry(&entry);
        let mut failed = writer.into_inner().failed_targets();

        // A File destination without an open file loses the line too
        let outcome = match written {
            Err(e) => Err(e),
            Ok(()) if file_missing => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no log file is open for today",
            )),
            Ok(()) => Ok(()),
        };
        if file_missing {
            failed += 1;
        }

        match outcome {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_failed();
                let total = level_config.destinations.len();
                self.report(&LoggerError::destination_write(entry.level, failed, total, e));
            }
        }
    }

    fn observe_rotation(&self, rotation: Result<Rotation>) {
        match rotation {
            Ok(Rotation::Unchanged) => {}
            Ok(Rotation::Rotated(_)) => {
                self.metrics.record_rotation();
            }
            Err(e) => {
                self.metrics.record_rotation_failure();
                self.report(&e);
            }
        }
    }

    /// Self-report an internal failure to the process stderr
    fn report(&self, error: &LoggerError) {
        if self.config.report_errors {
            eprintln!("[LOGGER ERROR] {}", error);
        }
    }

    /// Flush both console streams and the open log file
    pub fn flush(&self) -> Result<()> {
        self.composer.lock().flush().map_err(|e| {
            LoggerError::io_operation("flushing log destinations", "flush failed", e)
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Day of the open log file; `None` before the first file write
    pub fn current_log_date(&self) -> Option<NaiveDate> {
        self.composer.lock().current_log_date()
    }

    /// Path of the open log file, if any
    pub fn current_log_file(&self) -> Option<PathBuf> {
        self.composer.lock().current_log_file().map(PathBuf::from)
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use daily_logger::{Config, Destinations, Logger};
    ///
    /// let logger = Logger::new(Config::default().with_destinations(Destinations::empty()));
    /// logger.info("discarded");
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.lines_written(), 0);
    /// assert_eq!(metrics.failure_rate(), 0.0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use daily_logger::prelude::*;
    /// use daily_logger::writers::{ConsoleStreams, MemoryStream};
    ///
    /// let out = MemoryStream::new();
    /// let logger = Logger::builder()
    ///     .config(Config::default().with_destinations(Destination::Stdout))
    ///     .console(ConsoleStreams::new(out.clone(), std::io::sink()))
    ///     .build();
    ///
    /// logger.info("captured");
    /// assert!(out.contents().ends_with("captured\n"));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    config: Config,
    clock: Arc<dyn Clock>,
    console: Option<ConsoleStreams>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            clock: Arc::new(SystemClock),
            console: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the wall clock, e.g. to simulate a change of day
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the process's stdout and stderr
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleStreams) -> Self {
        self.console = Some(console);
        self
    }

    /// Build the Logger
    ///
    /// Nothing is opened or created on disk until the first line is written to
    /// a File destination.
    pub fn build(self) -> Logger {
        let console = self.console.unwrap_or_default();
        let composer = WriterComposer::from_config(&self.config, console);

        Logger {
            config: self.config,
            clock: self.clock,
            composer: Mutex::new(composer),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
