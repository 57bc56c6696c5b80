//! Per-call writer composition
//!
//! The composer owns every mutable resource of a logger: both console streams
//! and the daily file slot. It lives behind the logger's lock and builds a new
//! fan-out target for each emitted line.

use super::config::{Config, LevelConfig};
use super::error::Result;
use super::flags::Destination;
use crate::writers::{ConsoleStreams, DailyFile, FanOutWriter, Rotation};
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;

/// Result of composing the destinations for one line
pub struct Composed<'a> {
    pub writer: FanOutWriter<'a>,
    /// Outcome of the rotation check; `None` when File was not requested
    pub rotation: Option<Result<Rotation>>,
    /// File was requested but no file is open for the day
    pub file_missing: bool,
}

pub struct WriterComposer {
    console: ConsoleStreams,
    daily_file: DailyFile,
}

impl WriterComposer {
    pub fn new(console: ConsoleStreams, daily_file: DailyFile) -> Self {
        Self {
            console,
            daily_file,
        }
    }

    /// Composer for `config` writing to the given console streams
    pub fn from_config(config: &Config, console: ConsoleStreams) -> Self {
        let daily_file = DailyFile::new(config.base_path(), config.file_name.clone())
            .with_modes(config.dir_mode, config.file_mode);
        Self::new(console, daily_file)
    }

    /// Build the fan-out target for one line of `level`
    ///
    /// Destinations are added in the order stdout, stderr, file. The file slot
    /// is rotated first when `today` differs from the stored day.
    pub fn compose(&mut self, level: &LevelConfig, today: NaiveDate) -> Composed<'_> {
        let destinations = level.destinations;
        let mut targets: Vec<&mut (dyn Write + Send)> = Vec::with_capacity(destinations.len());
        let mut rotation = None;
        let mut file_missing = false;

        if destinations.contains(Destination::Stdout) {
            targets.push(self.console.stdout.as_mut());
        }
        if destinations.contains(Destination::Stderr) {
            targets.push(self.console.stderr.as_mut());
        }
        if destinations.contains(Destination::File) {
            rotation = Some(self.daily_file.rotate_if_needed(today));
            match self.daily_file.handle_mut() {
                Some(file) => targets.push(file),
                None => file_missing = true,
            }
        }

        Composed {
            writer: FanOutWriter::new(targets),
            rotation,
            file_missing,
        }
    }

    pub fn current_log_date(&self) -> Option<NaiveDate> {
        self.daily_file.current_date()
    }

    pub fn current_log_file(&self) -> Option<&Path> {
        self.daily_file.current_path()
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        let console = self.console.flush();
        let file = match self.daily_file.handle_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        };
        console.and(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flags::{Destinations, MetadataFlags};
    use crate::writers::MemoryStream;
    use std::fs;
    use tempfile::TempDir;

    fn composer(temp_dir: &TempDir) -> (WriterComposer, MemoryStream, MemoryStream) {
        let out = MemoryStream::new();
        let err = MemoryStream::new();
        let config = Config::default().with_log_path(temp_dir.path());
        let composer =
            WriterComposer::from_config(&config, ConsoleStreams::new(out.clone(), err.clone()));
        (composer, out, err)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_compose_console_only() {
        let temp_dir = TempDir::new().unwrap();
        let (mut composer, out, err) = composer(&temp_dir);
        let level = LevelConfig::new(Destination::Stdout.into(), "", MetadataFlags::empty());

        let mut composed = composer.compose(&level, today());
        assert!(composed.rotation.is_none());
        assert_eq!(composed.writer.len(), 1);
        composed.writer.write_all(b"x\n").unwrap();
        drop(composed);

        assert_eq!(out.contents(), "x\n");
        assert!(err.is_empty());
        assert_eq!(composer.current_log_date(), None);
        assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_compose_all_destinations() {
        let temp_dir = TempDir::new().unwrap();
        let (mut composer, out, err) = composer(&temp_dir);
        let level = LevelConfig::new(Destinations::all(), "", MetadataFlags::empty());

        let mut composed = composer.compose(&level, today());
        assert!(matches!(composed.rotation, Some(Ok(Rotation::Rotated(_)))));
        assert_eq!(composed.writer.len(), 3);
        assert!(!composed.file_missing);
        composed.writer.write_all(b"everywhere\n").unwrap();
        drop(composed);
        composer.flush().unwrap();

        assert_eq!(out.contents(), "everywhere\n");
        assert_eq!(err.contents(), "everywhere\n");
        let file = temp_dir.path().join("2024-01-15").join("log.log");
        assert_eq!(fs::read_to_string(file).unwrap(), "everywhere\n");
    }

    #[test]
    fn test_compose_empty_set_has_no_targets() {
        let temp_dir = TempDir::new().unwrap();
        let (mut composer, out, err) = composer(&temp_dir);
        let level = LevelConfig::new(Destinations::empty(), "", MetadataFlags::empty());

        let composed = composer.compose(&level, today());
        assert!(composed.writer.is_empty());
        assert!(composed.rotation.is_none());
        drop(composed);
        assert!(out.is_empty() && err.is_empty());
    }

    #[test]
    fn test_compose_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let config = Config::default().with_log_path(&blocker);
        let mut composer = WriterComposer::from_config(
            &config,
            ConsoleStreams::new(MemoryStream::new(), MemoryStream::new()),
        );
        let level = LevelConfig::new(Destinations::all(), "", MetadataFlags::empty());

        let first = composer.compose(&level, today());
        assert!(matches!(first.rotation, Some(Err(_))));
        assert!(first.file_missing);
        assert_eq!(first.writer.len(), 2);
        drop(first);

        let second = composer.compose(&level, today());
        assert!(matches!(second.rotation, Some(Ok(Rotation::Unchanged))));
        assert!(second.file_missing);
    }

    #[test]
    fn test_second_compose_same_day_does_not_rotate() {
        let temp_dir = TempDir::new().unwrap();
        let (mut composer, _out, _err) = composer(&temp_dir);
        let level = LevelConfig::new(Destination::File.into(), "", MetadataFlags::empty());

        let first = composer.compose(&level, today());
        assert!(matches!(first.rotation, Some(Ok(Rotation::Rotated(_)))));
        drop(first);
        let second = composer.compose(&level, today());
        assert!(matches!(second.rotation, Some(Ok(Rotation::Unchanged))));
    }
}
