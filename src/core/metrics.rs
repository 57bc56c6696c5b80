//! Logger metrics for observability
//!
//! Emit calls never report failures to their caller. These counters are the
//! only place lost or partially delivered lines show up.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what a logger has done so far
///
/// # Example
///
/// ```
/// use daily_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.failed_lines(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines delivered to every destination of their level
    lines_written: AtomicU64,

    /// Lines that at least one destination failed to receive
    failed_lines: AtomicU64,

    /// Times a new day's file was opened
    rotations: AtomicU64,

    /// Times opening a new day's file failed
    rotation_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            failed_lines: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            rotation_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_lines(&self) -> u64 {
        self.failed_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotation_failures(&self) -> u64 {
        self.rotation_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rotation_failure(&self) -> u64 {
        self.rotation_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of emitted lines that failed somewhere, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_lines();
        let total = self.lines_written() + failed;
        if total == 0 {
            return 0.0;
        }
        (failed as f64 / total as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.failed_lines.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
        self.rotation_failures.store(0, Ordering::Relaxed);
    }
}
