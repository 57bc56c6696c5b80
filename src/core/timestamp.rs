//! Clock and timestamp formatting
//!
//! Every emitted line takes exactly one reading from a [`Clock`]. That reading
//! picks the day directory (always local time) and feeds the date and time
//! rendered in the line.

use chrono::{DateTime, Local, NaiveDate};

/// Day directory name: `2024-01-15`
pub const DAY_DIR_FORMAT: &str = "%Y-%m-%d";

/// Line date: `2024/01/15`
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Line time: `10:30:45`
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Line time with microseconds: `10:30:45.123456`
pub const TIME_MICROS_FORMAT: &str = "%H:%M:%S%.6f";

/// Source of the current time
///
/// The logger reads the clock once per emitted line. Tests substitute their own
/// implementation to simulate a change of calendar day.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, Local, TimeZone};
/// use daily_logger::Clock;
///
/// struct Frozen(DateTime<Local>);
///
/// impl Clock for Frozen {
///     fn now(&self) -> DateTime<Local> {
///         self.0
///     }
/// }
///
/// let clock = Frozen(Local.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
/// assert_eq!(clock.now().date_naive().to_string(), "2024-01-15");
/// ```
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the process's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Name of the directory that holds the log file for `day`
#[must_use]
pub fn day_directory_name(day: NaiveDate) -> String {
    day.format(DAY_DIR_FORMAT).to_string()
}

/// Render the `date time` preamble fields of a line
///
/// Returns the date and time parts separately; either is `None` when its flag
/// is off. `utc` converts the reading before formatting.
pub(crate) fn render_date_time(
    timestamp: &DateTime<Local>,
    date: bool,
    time: bool,
    micros: bool,
    utc: bool,
) -> (Option<String>, Option<String>) {
    let time_format = if micros { TIME_MICROS_FORMAT } else { TIME_FORMAT };
    let wall = if utc {
        timestamp.naive_utc()
    } else {
        timestamp.naive_local()
    };

    (
        date.then(|| wall.format(DATE_FORMAT).to_string()),
        (time || micros).then(|| wall.format(time_format).to_string()),
    )
}
