#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levlog-sink` provides the byte destinations the `levlog` facade writes
//! rendered log lines to. A logger owns an [`OutputSink`]: a swappable,
//! mutex-serialized handle around any [`std::io::Write`] implementor. The
//! facade renders a complete line into a scratch buffer and hands it to the
//! sink in one call, so concurrent loggers sharing a destination never
//! interleave within a line.
//!
//! # Design
//!
//! [`OutputSink`] clones share the underlying writer; replacing the writer
//! through one clone is observed by all of them. [`LineMode`] controls
//! whether [`OutputSink::write_line`] guarantees a trailing newline.
//! [`CaptureBuffer`] is an in-memory writer for tests and embedders that
//! want to inspect emitted output.
//!
//! # Invariants
//!
//! - A `write_line` call issues the payload (and its terminator, when the
//!   mode requires one) under a single lock acquisition.
//! - Replacing the writer never loses the newline policy; only the
//!   destination changes.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values from the underlying
//! writer unchanged. Callers that want fire-and-forget semantics discard
//! the result.
//!
//! # Examples
//!
//! ```
//! use levlog_sink::{CaptureBuffer, OutputSink};
//!
//! let buffer = CaptureBuffer::new();
//! let sink = buffer.sink();
//! sink.write_line(b"ready").unwrap();
//!
//! assert_eq!(buffer.to_string_lossy(), "ready\n");
//! ```
//!
//! # See also
//!
//! - The `levlog` crate for the level-gated loggers that drive these sinks.

mod capture;
mod line_mode;
mod sink;

pub use capture::CaptureBuffer;
pub use line_mode::LineMode;
pub use sink::OutputSink;
