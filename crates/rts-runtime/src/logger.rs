//! The named-value logger primitive
//!
//! Every record renders as exactly one line, `<name> = <value>\n`, with the
//! value in plain unsigned decimal (no padding, no digit grouping). Names are
//! raw bytes and pass through verbatim, including control characters.

use std::fmt;
use std::io::{self, Write};

use crate::error::{LogError, LogResult};

/// A name/value pair borrowed from the caller for a single emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    name: &'a [u8],
    value: u64,
}

impl<'a> LogRecord<'a> {
    /// Create a record. The name must be non-empty.
    pub fn new<N: AsRef<[u8]> + ?Sized>(name: &'a N, value: u64) -> LogResult<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(LogError::EmptyName);
        }
        Ok(LogRecord { name, value })
    }

    pub fn name(&self) -> &'a [u8] {
        self.name
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Render the full line, terminator included.
    pub fn render(&self) -> Vec<u8> {
        let digits = self.value.to_string();
        let mut line = Vec::with_capacity(self.name.len() + 3 + digits.len() + 1);
        line.extend_from_slice(self.name);
        line.extend_from_slice(b" = ");
        line.extend_from_slice(digits.as_bytes());
        line.push(b'\n');
        line
    }
}

/// Lossy rendering without the line terminator, for diagnostics.
impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", String::from_utf8_lossy(self.name), self.value)
    }
}

/// Writes log records to the sink it owns.
///
/// The C-facing `print` symbol builds a fresh `Logger` over standard output
/// for every call; Rust hosts and tests can hand in any [`Write`] instead.
#[derive(Debug)]
pub struct Logger<W: Write> {
    sink: W,
}

impl Logger<io::Stdout> {
    pub fn stdout() -> Self {
        Logger::new(io::stdout())
    }
}

impl<W: Write> Logger<W> {
    pub fn new(sink: W) -> Self {
        Logger { sink }
    }

    /// Write one record as a single line and flush it.
    ///
    /// The line goes out in one `write_all` so records never interleave
    /// partially with other writers on the same stream.
    pub fn emit(&mut self, record: &LogRecord<'_>) -> LogResult<()> {
        #[cfg(feature = "debug_runtime")]
        tracing::trace!(%record, "emitting log record");

        self.sink.write_all(&record.render())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Shorthand for [`LogRecord::new`] followed by [`Logger::emit`].
    pub fn log<N: AsRef<[u8]> + ?Sized>(&mut self, name: &N, value: u64) -> LogResult<()> {
        let record = LogRecord::new(name, value)?;
        self.emit(&record)
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
