//! Console streams

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// The two console destinations of a logger
///
/// Defaults to the process's stdout and stderr. Any `Write + Send` sink can
/// stand in for either, which is how output is captured in tests.
pub struct ConsoleStreams {
    pub(crate) stdout: Box<dyn Write + Send>,
    pub(crate) stderr: Box<dyn Write + Send>,
}

impl ConsoleStreams {
    /// The process's standard output and standard error
    pub fn system() -> Self {
        Self {
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    pub fn new(stdout: impl Write + Send + 'static, stderr: impl Write + Send + 'static) -> Self {
        Self {
            stdout: Box::new(stdout),
            stderr: Box::new(stderr),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        let out = self.stdout.flush();
        let err = self.stderr.flush();
        out.and(err)
    }
}

impl Default for ConsoleStreams {
    fn default() -> Self {
        Self::system()
    }
}

/// Shared in-memory sink
///
/// Clones share the same buffer, so one clone can be handed to a logger while
/// another reads back what was written.
///
/// # Examples
///
/// ```
/// use daily_logger::writers::MemoryStream;
/// use std::io::Write;
///
/// let stream = MemoryStream::new();
/// let mut writer = stream.clone();
/// writer.write_all(b"captured\n").unwrap();
/// assert_eq!(stream.contents(), "captured\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
