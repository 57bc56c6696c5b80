//! Process-wide logger
//!
//! Install a configured logger once at start-up with [`init`], before other
//! threads start logging. Code that logs without any setup gets a logger built
//! from [`Config::default`] on first use.
//!
//! # Examples
//!
//! ```no_run
//! use daily_logger::{global, Config, Logger};
//!
//! global::init(Logger::new(Config::default().with_log_path("var/logs")))
//!     .expect("logger installed twice");
//!
//! global::info("server started");
//! ```

use crate::core::{Config, LogLevel, Logger, LoggerError, Result};
use std::fmt::Display;
use std::panic::Location;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger
///
/// # Errors
///
/// Returns [`LoggerError::AlreadyInitialized`] if a logger is already
/// installed, including the default one created by an earlier emit.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// The process-wide logger, created from the default config if needed
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| Logger::new(Config::default()))
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

#[track_caller]
pub fn log(level: LogLevel, message: impl Display) {
    logger().log_at(level, Location::caller(), &message);
}

#[track_caller]
pub fn trace(message: impl Display) {
    logger().log_at(LogLevel::Trace, Location::caller(), &message);
}

#[track_caller]
pub fn debug(message: impl Display) {
    logger().log_at(LogLevel::Debug, Location::caller(), &message);
}

#[track_caller]
pub fn info(message: impl Display) {
    logger().log_at(LogLevel::Info, Location::caller(), &message);
}

#[track_caller]
pub fn warning(message: impl Display) {
    logger().log_at(LogLevel::Warning, Location::caller(), &message);
}

#[track_caller]
pub fn error(message: impl Display) {
    logger().log_at(LogLevel::Error, Location::caller(), &message);
}
