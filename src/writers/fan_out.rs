//! Best-effort fan-out writer

use std::io::{self, Write};

/// Forwards every write to each of its targets, in order
///
/// A failing target never stops the remaining ones from being written. The
/// first failure is returned once all targets were attempted, and
/// [`FanOutWriter::failed_targets`] counts how many targets failed overall.
///
/// # Examples
///
/// ```
/// use daily_logger::writers::FanOutWriter;
/// use std::io::Write;
///
/// let mut first: Vec<u8> = Vec::new();
/// let mut second: Vec<u8> = Vec::new();
/// {
///     let mut targets: Vec<&mut (dyn Write + Send)> = Vec::new();
///     targets.push(&mut first);
///     targets.push(&mut second);
///     FanOutWriter::new(targets).write_all(b"hello\n").unwrap();
/// }
/// assert_eq!(first, b"hello\n");
/// assert_eq!(second, b"hello\n");
/// ```
pub struct FanOutWriter<'a> {
    targets: Vec<&'a mut (dyn Write + Send)>,
    failed_targets: usize,
}

impl<'a> FanOutWriter<'a> {
    pub fn new(targets: Vec<&'a mut (dyn Write + Send)>) -> Self {
        Self {
            targets,
            failed_targets: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of target writes or flushes that failed so far
    pub fn failed_targets(&self) -> usize {
        self.failed_targets
    }

    fn for_each_target<F>(&mut self, mut op: F) -> io::Result<()>
    where
        F: FnMut(&mut (dyn Write + Send)) -> io::Result<()>,
    {
        let mut first_error = None;
        for target in self.targets.iter_mut() {
            if let Err(e) = op(&mut **target) {
                self.failed_targets += 1;
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Write for FanOutWriter<'_> {
    /// Writes the whole buffer to every target
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.for_each_target(|target| target.write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.for_each_target(|target| target.flush())
    }
}
