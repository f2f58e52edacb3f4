//! crates/levlog-sink/src/sink.rs
//! Swappable, mutex-serialized writer handle.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::line_mode::LineMode;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// A clone-shared handle to a byte destination.
///
/// Cloning an `OutputSink` shares the underlying writer: a
/// [`replace`](Self::replace) through any clone is observed by all of them.
/// Loggers that must not share a destination each construct their own sink.
///
/// # Examples
///
/// ```
/// use levlog_sink::{CaptureBuffer, OutputSink};
///
/// let buffer = CaptureBuffer::new();
/// let sink = OutputSink::new(Box::new(buffer.clone()));
/// sink.write_line(b"hello").unwrap();
/// assert_eq!(buffer.to_string_lossy(), "hello\n");
/// ```
#[derive(Clone)]
pub struct OutputSink {
    writer: SharedWriter,
    line_mode: LineMode,
}

impl OutputSink {
    /// Creates a sink with the default [`LineMode::WithNewline`] policy.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with an explicit [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: Box<dyn Write + Send>, line_mode: LineMode) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            line_mode,
        }
    }

    /// A sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// A sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// A sink that swallows everything it is given.
    #[must_use]
    pub fn discard() -> Self {
        Self::new(Box::new(io::sink()))
    }

    /// Returns the newline policy applied by [`write_line`](Self::write_line).
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Replaces the underlying writer, keeping the newline policy.
    ///
    /// Every clone of this sink observes the new destination.
    pub fn replace(&self, writer: Box<dyn Write + Send>) {
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = writer;
    }

    /// Writes one rendered payload under a single lock acquisition.
    ///
    /// With [`LineMode::WithNewline`] a terminator is appended when the
    /// payload does not already end with one.
    pub fn write_line(&self, payload: &[u8]) -> io::Result<()> {
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        guard.write_all(payload)?;
        if self.line_mode.append_newline() && !payload.ends_with(b"\n") {
            guard.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        guard.flush()
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureBuffer;

    #[test]
    fn write_line_appends_missing_terminator() {
        let buffer = CaptureBuffer::new();
        let sink = buffer.sink();
        sink.write_line(b"one").expect("write succeeds");
        sink.write_line(b"two\n").expect("write succeeds");

        assert_eq!(buffer.to_string_lossy(), "one\ntwo\n");
    }

    #[test]
    fn without_newline_preserves_payload() {
        let buffer = CaptureBuffer::new();
        let sink = OutputSink::with_line_mode(Box::new(buffer.clone()), LineMode::WithoutNewline);
        sink.write_line(b"partial").expect("write succeeds");

        assert_eq!(buffer.contents(), b"partial".to_vec());
    }

    #[test]
    fn replace_switches_destination_for_all_clones() {
        let first = CaptureBuffer::new();
        let second = CaptureBuffer::new();
        let sink = first.sink();
        let alias = sink.clone();

        sink.write_line(b"before").expect("write succeeds");
        alias.replace(Box::new(second.clone()));
        sink.write_line(b"after").expect("write succeeds");

        assert_eq!(first.to_string_lossy(), "before\n");
        assert_eq!(second.to_string_lossy(), "after\n");
    }

    #[test]
    fn discard_swallows_output() {
        let sink = OutputSink::discard();
        sink.write_line(b"nobody hears this").expect("write succeeds");
        sink.flush().expect("flush succeeds");
    }
}
