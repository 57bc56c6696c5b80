//! # Daily Logger
//!
//! A leveled logger that fans each line out to the console streams and a log
//! file partitioned by calendar day.
//!
//! ## Features
//!
//! - **Per-level routing**: each of Trace, Debug, Info, Warning and Error has
//!   its own destinations, prefix and metadata
//! - **Daily files**: `<base>/YYYY-MM-DD/log.log`, switched on the first write
//!   of a new day
//! - **Thread safe**: one lock per logger, lines never interleave
//! - **Never fails the caller**: write errors are counted, not returned
//!
//! ```no_run
//! use daily_logger::{global, Config, Logger};
//!
//! let logger = Logger::new(Config::default());
//! logger.info("server started");
//!
//! // Or through the process-wide logger
//! global::warning("cache is cold");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Clock, Config, Destination, Destinations, LevelConfig, LogLevel, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Metadata, MetadataFlags, Result,
    };
}

pub use crate::core::{
    Clock, Config, Destination, Destinations, Flag, FlagSet, LevelConfig, LogEntry, LogLevel,
    Logger, LoggerBuilder, LoggerError, LoggerMetrics, Metadata, MetadataFlags, Result,
    SystemClock,
};
