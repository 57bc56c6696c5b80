//! Core logger types

pub mod composer;
pub mod config;
pub mod error;
pub mod flags;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use composer::{Composed, WriterComposer};
pub use config::{Config, LevelConfig, DEFAULT_FILE_NAME, DEFAULT_LOG_PATH, DEFAULT_PREFIX_WIDTH};
pub use error::{LoggerError, Result};
pub use flags::{Destination, Destinations, Flag, FlagSet, Metadata, MetadataFlags};
pub use formatter::{FormattingWriter, LineFormatter};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::{Clock, SystemClock};
