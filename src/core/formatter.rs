//! Line rendering
//!
//! A line is `<prefix><date ><time ><file:line: >message\n`. With
//! [`Metadata::MsgPrefix`] the prefix moves to just before the message.

use super::flags::{Metadata, MetadataFlags};
use super::log_entry::LogEntry;
use super::timestamp::render_date_time;
use std::io::{self, Write};

/// Renders entries with one level's prefix and metadata flags
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter<'a> {
    prefix: &'a str,
    flags: MetadataFlags,
}

impl<'a> LineFormatter<'a> {
    pub fn new(prefix: &'a str, flags: MetadataFlags) -> Self {
        Self { prefix, flags }
    }

    /// Render a complete line, trailing newline included
    pub fn format(&self, entry: &LogEntry) -> String {
        let flags = self.flags;
        let mut line = String::with_capacity(self.prefix.len() + entry.message.len() + 48);

        if !flags.contains(Metadata::MsgPrefix) {
            line.push_str(self.prefix);
        }

        let (date, time) = render_date_time(
            &entry.timestamp,
            flags.contains(Metadata::Date),
            flags.contains(Metadata::Time),
            flags.contains(Metadata::Microseconds),
            flags.contains(Metadata::Utc),
        );
        for part in [date, time].into_iter().flatten() {
            line.push_str(&part);
            line.push(' ');
        }

        if flags.contains(Metadata::SourceLocation) {
            let file = if flags.contains(Metadata::FullPath) {
                entry.location.file()
            } else {
                entry.short_file()
            };
            line.push_str(file);
            line.push(':');
            line.push_str(&entry.location.line().to_string());
            line.push_str(": ");
        }

        if flags.contains(Metadata::MsgPrefix) {
            line.push_str(self.prefix);
        }

        line.push_str(&entry.message);
        line.push('\n');
        line
    }
}

/// Writes formatted lines into a wrapped target
///
/// Each line reaches the target as a single `write_all` followed by a flush,
/// so a fan-out target hands every destination the whole line at once.
pub struct FormattingWriter<'a, W: Write> {
    inner: W,
    formatter: LineFormatter<'a>,
}

impl<'a, W: Write> FormattingWriter<'a, W> {
    pub fn new(inner: W, formatter: LineFormatter<'a>) -> Self {
        Self { inner, formatter }
    }

    pub fn write_entry(&mut self, entry: &LogEntry) -> io::Result<()> {
        let line = self.formatter.format(entry);
        let written = self.inner.write_all(line.as_bytes());
        let flushed = self.inner.flush();
        written.and(flushed)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
