//! Destination writers

pub mod console;
pub mod daily_file;
pub mod fan_out;

pub use console::{ConsoleStreams, MemoryStream};
pub use daily_file::{DailyFile, Rotation};
pub use fan_out::FanOutWriter;
