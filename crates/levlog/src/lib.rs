#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levlog` is a level-gated logging facade. Six severity levels form a
//! total order (`Debug < Trace < Info < Warning < Error < Disabled`); a
//! single threshold cell decides, on every call, whether a message is
//! emitted or silently dropped. Each level has a pre-built singleton
//! logger in the [`Registry`], and the package-level functions and macros
//! route through the process-wide instance.
//!
//! # Design
//!
//! A [`LevelLogger`] is an immutable binding of one [`Level`] to an
//! [`OutputSink`] and a pluggable [`Formatter`]. The gate
//! (`level >= threshold`) is evaluated fresh on every call and a
//! suppressed call does no formatting work. `fatal` variants terminate the
//! process with status 1 only after an enabled emission; gated off, they
//! return like any other suppressed call. Rendered lines carry the level
//! prefix (`"ERROR: "`, ...), an optional timestamp, and the call site of
//! the invoking code.
//!
//! Building a private [`Registry`] yields a fully isolated facility with
//! its own threshold, which is how tests avoid racing on the global cell.
//!
//! # Invariants
//!
//! - The emitted/suppressed decision is never cached between calls.
//! - A gated-off `fatal` call must not terminate the process.
//! - Sink I/O failures never surface to logging callers.
//!
//! # Examples
//!
//! ```
//! use levlog::{CaptureBuffer, Level, Registry};
//!
//! let buffer = CaptureBuffer::new();
//! let registry = Registry::with_sink(&buffer.sink());
//! registry.set_level(Level::Info);
//!
//! levlog::printf_to!(registry.logger(Level::Error), "disk full");
//! levlog::printf_to!(registry.logger(Level::Debug), "trace point");
//!
//! let output = buffer.to_string_lossy();
//! assert!(output.starts_with("ERROR: "));
//! assert!(output.contains("disk full"));
//! assert!(!output.contains("trace point"));
//! ```
//!
//! # See also
//!
//! - `levlog-sink` for the byte destinations loggers write to.
//! - The `json` feature for the structured logger and drop-in JSON
//!   formatter; the `tracing` feature for routing `tracing` events
//!   through the same gate.

mod format;
mod level;
mod logger;
mod macros;
mod record;
mod registry;
mod threshold;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use format::{Formatter, TextFormat};
pub use level::Level;
pub use logger::{LevelLogger, Log};
pub use record::{Record, SourceLocation};
pub use registry::Registry;
pub use threshold::Threshold;

#[cfg(feature = "json")]
pub use json::{Fields, JsonFormat, JsonLogger, StructuredLog};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LevlogLayer, init_tracing, init_tracing_with_filter};

pub use levlog_sink::{CaptureBuffer, LineMode, OutputSink};

use std::fmt::Display;

/// Replaces the process-wide threshold.
///
/// Affects every logger bound to [`Registry::global`]; isolated
/// registries keep their own cell. Calls already past their gate check
/// are unaffected; visibility for concurrent callers is eventual.
pub fn set_level(level: Level) {
    Registry::global().set_level(level);
}

/// Reads the process-wide threshold.
#[must_use]
pub fn current_level() -> Level {
    Registry::global().current_level()
}

/// The process-wide singleton logger for `level`.
#[must_use]
pub fn logger(level: Level) -> &'static LevelLogger {
    Registry::global().logger(level)
}

/// Logs `message` at [`Level::Debug`] through the global registry.
#[track_caller]
pub fn debug<T: Display>(message: T) {
    Registry::global().logger(Level::Debug).println(&[&message]);
}

/// Logs `message` at [`Level::Trace`] through the global registry.
#[track_caller]
pub fn trace<T: Display>(message: T) {
    Registry::global().logger(Level::Trace).println(&[&message]);
}

/// Logs `message` at [`Level::Info`] through the global registry.
#[track_caller]
pub fn info<T: Display>(message: T) {
    Registry::global().logger(Level::Info).println(&[&message]);
}

/// Logs `message` at [`Level::Warning`] through the global registry.
#[track_caller]
pub fn warning<T: Display>(message: T) {
    Registry::global().logger(Level::Warning).println(&[&message]);
}

/// Logs `message` at [`Level::Error`] through the global registry.
#[track_caller]
pub fn error<T: Display>(message: T) {
    Registry::global().logger(Level::Error).println(&[&message]);
}

/// Logs `message` through the error-level singleton, then exits the
/// process with status 1.
///
/// Error-level output doubles as the fatal sink. When the threshold gates
/// error output off, the call returns without terminating the process.
#[track_caller]
pub fn fatal<T: Display>(message: T) {
    Registry::global().logger(Level::Error).fatal(&[&message]);
}
