//! Tests for the process-wide logger
//!
//! The global slot can only be filled once per process, so the whole
//! lifecycle runs in a single test.

use daily_logger::writers::{ConsoleStreams, MemoryStream};
use daily_logger::{global, Config, Destination, LogLevel, Logger, LoggerError};

#[test]
fn test_global_logger_lifecycle() {
    assert!(!global::is_initialized());

    let stdout = MemoryStream::new();
    let logger = Logger::builder()
        .config(Config::default().with_destinations(Destination::Stdout))
        .console(ConsoleStreams::new(stdout.clone(), std::io::sink()))
        .build();
    global::init(logger).expect("first init must succeed");
    assert!(global::is_initialized());

    global::info("hello from the global logger");
    let line = line!() + 1;
    global::log(LogLevel::Error, format_args!("code {}", 7));
    daily_logger::info!(global::logger(), "via macro {}", 1);

    let lines = stdout.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Info      "));
    assert!(lines[0].ends_with("hello from the global logger"));
    assert!(lines[1].contains(&format!("global_tests.rs:{}: code 7", line)));
    assert!(lines[2].ends_with("via macro 1"));

    let second = Logger::new(Config::default());
    assert!(matches!(
        global::init(second),
        Err(LoggerError::AlreadyInitialized)
    ));

    global::warning("still the first logger");
    assert_eq!(stdout.lines().len(), 4);
    assert_eq!(global::logger().metrics().lines_written(), 4);
}
