//! crates/levlog-sink/src/capture.rs
//! In-memory capture writer for tests and embedders.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::sink::OutputSink;

/// A clone-shared in-memory byte buffer implementing [`Write`].
///
/// Clones share storage, so a test can hand one clone to a sink and keep
/// another to inspect what was written.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use levlog_sink::CaptureBuffer;
///
/// let buffer = CaptureBuffer::new();
/// let mut writer = buffer.clone();
/// writer.write_all(b"captured").unwrap();
///
/// assert_eq!(buffer.to_string_lossy(), "captured");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an [`OutputSink`] writing into this buffer.
    #[must_use]
    pub fn sink(&self) -> OutputSink {
        OutputSink::new(Box::new(self.clone()))
    }

    /// Returns a copy of everything written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the captured bytes as a string, replacing invalid UTF-8.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Reports whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
