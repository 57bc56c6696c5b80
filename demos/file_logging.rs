//! File logging example
//!
//! Demonstrates logging to the console and a daily log file simultaneously.
//!
//! Run with: cargo run --example file_logging

use daily_logger::prelude::*;
use daily_logger::global;

fn main() -> Result<()> {
    println!("=== Daily Logger - File Logging Example ===\n");

    let config = Config::default()
        .with_log_path("demo_logs")
        .with_file_name("application.log");
    config.validate()?;
    global::init(Logger::new(config))?;

    println!("1. Logging to both console and file:");
    global::info("Application started");
    global::debug("Loading configuration...");
    global::info("Configuration loaded successfully");
    global::warning("Using default settings for some options");
    global::error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        global::info(format_args!("Processing item {}/5", i));
        if i == 3 {
            global::warning("Item 3 took longer than expected");
        }
    }

    let logger = global::logger();
    logger.flush()?;

    if let Some(path) = logger.current_log_file() {
        println!("\n3. Lines were also written to {}", path.display());
    }

    let metrics = logger.metrics();
    println!(
        "   {} lines written, {} failed, {} rotations",
        metrics.lines_written(),
        metrics.failed_lines(),
        metrics.rotations()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
