//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::panic::Location;

/// One message on its way to the destinations of its level
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub location: &'static Location<'static>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    pub fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            level,
            message,
            timestamp,
            location,
        }
    }

    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.message = Self::sanitize_message(&self.message);
        self
    }

    /// File name of the call site without its directories
    pub fn short_file(&self) -> &'static str {
        let file = self.location.file();
        file.rsplit(['/', '\\']).next().unwrap_or(file)
    }
}
