//! Error types for the logger system
//!
//! None of these ever reach the caller of an emit operation. They are returned
//! by the configuration and setup APIs, and used internally to describe
//! rotation and write failures before they are dropped or self-reported.

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Daily file rotation error
    #[error("File rotation failed for '{path}': {message}")]
    FileRotationError { path: String, message: String },

    /// One or more destinations did not receive a line
    #[error("{level} line lost on {failed} of {total} destinations: {source}")]
    DestinationWrite {
        level: LogLevel,
        failed: usize,
        total: usize,
        #[source]
        source: std::io::Error,
    },

    /// The process-wide logger was already installed
    #[error("Global logger already initialized")]
    AlreadyInitialized,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file rotation error
    pub fn file_rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileRotationError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn destination_write(
        level: LogLevel,
        failed: usize,
        total: usize,
        source: std::io::Error,
    ) -> Self {
        LoggerError::DestinationWrite {
            level,
            failed,
            total,
            source,
        }
    }
}
