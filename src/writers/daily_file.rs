//! Date-partitioned log file
//!
//! Lines for a calendar day go to `<base>/<YYYY-MM-DD>/<file name>`. The file
//! is switched the first time a write happens on a new day; earlier days'
//! files are closed and never touched again.

use crate::core::error::{LoggerError, Result};
use crate::core::timestamp::day_directory_name;
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a rotation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rotation {
    /// Same day as the previous check
    Unchanged,
    /// A new day began and this file is now open
    Rotated(PathBuf),
}

/// Holds at most one open log file, the one for the current day
///
/// # Examples
///
/// ```no_run
/// use chrono::Local;
/// use daily_logger::writers::{DailyFile, Rotation};
///
/// let mut daily = DailyFile::new("logs", "log.log");
/// let rotation = daily.rotate_if_needed(Local::now().date_naive()).unwrap();
/// assert!(matches!(rotation, Rotation::Rotated(_)));
/// assert!(daily.handle_mut().is_some());
/// ```
#[derive(Debug)]
pub struct DailyFile {
    base_path: PathBuf,
    file_name: String,
    dir_mode: Option<u32>,
    file_mode: Option<u32>,
    /// Day of the last rotation; `None` until the first file write
    current_date: Option<NaiveDate>,
    current_path: Option<PathBuf>,
    file: Option<File>,
}

impl DailyFile {
    pub fn new(base_path: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            file_name: file_name.into(),
            dir_mode: None,
            file_mode: None,
            current_date: None,
            current_path: None,
            file: None,
        }
    }

    /// Permission bits for created directories and files (unix only)
    #[must_use]
    pub fn with_modes(mut self, dir_mode: Option<u32>, file_mode: Option<u32>) -> Self {
        self.dir_mode = dir_mode;
        self.file_mode = file_mode;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current_date
    }

    /// Path of the open file, if opening it succeeded
    pub fn current_path(&self) -> Option<&Path> {
        self.file.as_ref().and(self.current_path.as_deref())
    }

    pub fn handle_mut(&mut self) -> Option<&mut File> {
        self.file.as_mut()
    }

    /// Path of the log file for `day`
    pub fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.base_path
            .join(day_directory_name(day))
            .join(&self.file_name)
    }

    /// Switch to `today`'s file if the stored day differs
    ///
    /// The stored day is updated before the file is opened, so a failed open
    /// leaves the slot empty until the next day change instead of retrying on
    /// every write.
    ///
    /// # Errors
    ///
    /// Returns an error when the day's file cannot be opened. A directory
    /// creation failure is only reported if the open fails too.
    pub fn rotate_if_needed(&mut self, today: NaiveDate) -> Result<Rotation> {
        if self.current_date == Some(today) {
            return Ok(Rotation::Unchanged);
        }

        self.current_date = Some(today);
        // Release the previous day's handle before opening the new one
        self.file = None;

        let path = self.path_for(today);
        self.current_path = Some(path.clone());

        let dir_result = match path.parent() {
            Some(dir) => self.create_directory(dir),
            None => Ok(()),
        };

        match self.open(&path) {
            Ok(file) => {
                self.file = Some(file);
                Ok(Rotation::Rotated(path))
            }
            Err(open_err) => Err(match dir_result {
                Err(dir_err) => LoggerError::io_operation(
                    "creating log directory",
                    format!("Failed to create directory for '{}'", path.display()),
                    dir_err,
                ),
                Ok(()) => LoggerError::file_rotation(
                    path.display().to_string(),
                    format!("Failed to open: {}", open_err),
                ),
            }),
        }
    }

    fn create_directory(&self, dir: &Path) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            if let Some(mode) = self.dir_mode {
                builder.mode(mode);
            }
        }
        builder.create(dir)
    }

    fn open(&self, path: &Path) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            if let Some(mode) = self.file_mode {
                options.mode(mode);
            }
        }
        options.open(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_first_check_always_rotates() {
        let temp_dir = TempDir::new().unwrap();
        let mut daily = DailyFile::new(temp_dir.path(), "log.log");
        assert_eq!(daily.current_date(), None);

        let rotation = daily.rotate_if_needed(day(15)).unwrap();
        let expected = temp_dir.path().join("2024-01-15").join("log.log");
        assert_eq!(rotation, Rotation::Rotated(expected.clone()));
        assert_eq!(daily.current_date(), Some(day(15)));
        assert_eq!(daily.current_path(), Some(expected.as_path()));
        assert!(expected.exists());
    }

    #[test]
    fn test_same_day_keeps_handle() {
        let temp_dir = TempDir::new().unwrap();
        let mut daily = DailyFile::new(temp_dir.path(), "log.log");
        daily.rotate_if_needed(day(15)).unwrap();
        daily.handle_mut().unwrap().write_all(b"first\n").unwrap();

        assert_eq!(daily.rotate_if_needed(day(15)).unwrap(), Rotation::Unchanged);
        daily.handle_mut().unwrap().write_all(b"second\n").unwrap();

        let content = fs::read_to_string(daily.path_for(day(15))).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_new_day_switches_file_and_leaves_old_one() {
        let temp_dir = TempDir::new().unwrap();
        let mut daily = DailyFile::new(temp_dir.path(), "log.log");
        daily.rotate_if_needed(day(14)).unwrap();
        daily.handle_mut().unwrap().write_all(b"yesterday\n").unwrap();

        daily.rotate_if_needed(day(15)).unwrap();
        daily.handle_mut().unwrap().write_all(b"today\n").unwrap();

        assert_eq!(fs::read_to_string(daily.path_for(day(14))).unwrap(), "yesterday\n");
        assert_eq!(fs::read_to_string(daily.path_for(day(15))).unwrap(), "today\n");
    }

    #[test]
    fn test_existing_file_is_appended_not_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2024-01-15").join("log.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "earlier run\n").unwrap();

        let mut daily = DailyFile::new(temp_dir.path(), "log.log");
        daily.rotate_if_needed(day(15)).unwrap();
        daily.handle_mut().unwrap().write_all(b"this run\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier run\nthis run\n");
    }

    #[test]
    fn test_open_failure_leaves_slot_empty_for_the_day() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the base directory should be
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let mut daily = DailyFile::new(&blocker, "log.log");
        assert!(daily.rotate_if_needed(day(15)).is_err());
        assert!(daily.handle_mut().is_none());
        assert_eq!(daily.current_path(), None);
        assert_eq!(daily.current_date(), Some(day(15)));

        // No retry until the day changes
        assert_eq!(daily.rotate_if_needed(day(15)).unwrap(), Rotation::Unchanged);
        assert!(daily.handle_mut().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_configured_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let mut daily = DailyFile::new(temp_dir.path(), "log.log").with_modes(None, Some(0o600));
        daily.rotate_if_needed(day(15)).unwrap();

        let mode = fs::metadata(daily.path_for(day(15))).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
