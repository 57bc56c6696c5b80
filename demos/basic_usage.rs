//! Basic logger usage example
//!
//! Demonstrates console logging, per-level routing and the logging macros.
//!
//! Run with: cargo run --example basic_usage

use daily_logger::prelude::*;
use daily_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Daily Logger - Basic Usage Example ===\n");

    // Console only: no directory is created
    let logger = Logger::new(Config::default().with_destinations(Destination::Stdout));

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Per-level routing:");
    let config = Config::default()
        .with_destinations(Destination::Stdout)
        .with_level(
            LogLevel::Trace,
            LevelConfig::default_for(LogLevel::Trace).with_destinations(Destinations::empty()),
        )
        .with_level(
            LogLevel::Error,
            LevelConfig::new(
                Destination::Stderr.into(),
                "[ERROR] ",
                Metadata::Time | Metadata::Microseconds,
            ),
        );
    let routed = Logger::new(config);
    routed.trace("Trace is switched off (hidden)");
    routed.info("Info goes to stdout");
    routed.error("Error goes to stderr with microsecond time");

    println!("\n3. Macros with format arguments:");
    let port = 8080;
    info!(routed, "Server listening on port {}", port);
    warning!(routed, "Retry attempt {} of {}", 3, 5);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
