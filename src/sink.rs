//! The in-memory capture buffer

use crate::decode::{self, JsonObject};
use crate::error::DecodeError;
use parking_lot::Mutex;
use std::io;
use std::sync::{Arc, OnceLock};
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory buffer that captures log output.
///
/// Cloning a `LogSink` yields another handle to the same buffer, so one clone can
/// be handed to the logging facility while the test keeps another for assertions.
#[derive(Clone, Default)]
pub struct LogSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogSink {
    /// Creates an empty sink with its own buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that appends every byte written to it to this sink.
    ///
    /// The handle stays usable across [`LogSink::reset`].
    pub fn writer(&self) -> SinkWriter {
        SinkWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }

    /// The entire content captured since the most recent reset, exactly as written.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn content(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// All non-empty entries, where entries are delimited by `'\n'`.
    ///
    /// Entries are trimmed of leading and trailing whitespace, and entries that
    /// are only whitespace are dropped.
    pub fn strings(&self) -> Vec<String> {
        self.content()
            .split('\n')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The captured content decoded as a stream of JSON objects, one per entry.
    ///
    /// Stops at the first entry that does not decode; the error keeps the objects
    /// decoded before it (see [`DecodeError::decoded`]). Entries that are valid JSON
    /// but not objects, `null` included, stop decoding too.
    pub fn json_objects(&self) -> Result<Vec<JsonObject>, DecodeError> {
        decode::decode_objects(&self.content())
    }

    /// Whether the captured content contains `pattern` anywhere.
    pub fn contains(&self, pattern: &str) -> bool {
        self.content().contains(pattern)
    }

    /// Number of bytes captured since the most recent reset.
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Whether nothing has been captured since the most recent reset.
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Clears everything captured so far.
    pub fn reset(&self) {
        self.buffer.lock().clear();
    }
}

impl std::fmt::Debug for LogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSink")
            .field("len", &self.len())
            .finish()
    }
}

/// Writable handle to a [`LogSink`].
#[derive(Clone)]
pub struct SinkWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer()
    }
}

/// The process-wide sink, created on first use and kept until the process exits.
pub fn global() -> &'static LogSink {
    static GLOBAL: OnceLock<LogSink> = OnceLock::new();
    GLOBAL.get_or_init(LogSink::new)
}
