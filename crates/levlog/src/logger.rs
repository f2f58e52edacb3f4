//! crates/levlog/src/logger.rs
//! The level-bound logger and the common logging capability.

use std::fmt::{self, Display, Write as _};
use std::io::Write;
use std::process;
use std::sync::{Arc, Mutex, PoisonError};

use levlog_sink::OutputSink;

use crate::format::{Formatter, TextFormat};
use crate::level::Level;
use crate::record::{Record, SourceLocation};
use crate::threshold::Threshold;

/// Joins display values into one message with the given separator.
///
/// Callers gate before invoking this so a suppressed message never pays
/// for formatting.
pub(crate) fn join_values(values: &[&dyn Display], separator: &str) -> String {
    let mut message = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            message.push_str(separator);
        }
        // Writing into a String only fails if a Display impl reports an
        // error; logging is fire-and-forget, so that is swallowed here.
        let _ = write!(message, "{value}");
    }
    message
}

/// The common logging capability.
///
/// Variadic argument lists are expressed as `&[&dyn Display]` slices;
/// `printf`-style calls take [`fmt::Arguments`] assembled by
/// `format_args!`. Every operation first checks
/// [`is_enabled`](Self::is_enabled) and is a no-op when the level is gated
/// off, including the `fatal` variants, which only terminate the process
/// after an enabled emission.
///
/// Calls made through `dyn Log` carry no call-site location; use the
/// concrete types' `*_at` methods to pass one explicitly when attribution
/// matters through a trait object.
pub trait Log {
    /// Whether this logger's level currently passes the shared threshold.
    fn is_enabled(&self) -> bool;
    /// Concatenates the values with no separator and emits the line.
    fn print(&self, values: &[&dyn Display]);
    /// Joins the values with single spaces and emits the line.
    fn println(&self, values: &[&dyn Display]);
    /// Emits a message assembled with standard format-string semantics.
    fn printf(&self, args: fmt::Arguments<'_>);
    /// Like [`print`](Self::print), then exits the process with status 1.
    /// A gated-off call returns without terminating.
    fn fatal(&self, values: &[&dyn Display]);
    /// Like [`printf`](Self::printf), then exits the process with status 1.
    /// A gated-off call returns without terminating.
    fn fatalf(&self, args: fmt::Arguments<'_>);
    /// Replaces the writer of this logger's sink. Other loggers are
    /// unaffected unless they share the same sink clone.
    fn set_output(&self, writer: Box<dyn Write + Send>);
}

/// A logger bound to one fixed [`Level`].
///
/// Six singletons live in the [`Registry`](crate::Registry); ad-hoc
/// instances can be built with [`new`](Self::new) against any threshold
/// cell and sink, which is what isolation-minded tests do.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use levlog::{CaptureBuffer, Level, LevelLogger, TextFormat, Threshold};
///
/// let buffer = CaptureBuffer::new();
/// let threshold = Arc::new(Threshold::new(Level::Info));
/// let logger = LevelLogger::new(Level::Error, threshold, buffer.sink(), TextFormat::plain());
///
/// logger.printf(format_args!("disk {}", "full"));
/// assert_eq!(buffer.to_string_lossy(), "ERROR: disk full\n");
/// ```
pub struct LevelLogger {
    level: Level,
    threshold: Arc<Threshold>,
    sink: OutputSink,
    format: Mutex<Box<dyn Formatter>>,
}

impl LevelLogger {
    /// Binds `level` to a threshold cell, a sink, and a text format.
    #[must_use]
    pub fn new(
        level: Level,
        threshold: Arc<Threshold>,
        sink: OutputSink,
        format: TextFormat,
    ) -> Self {
        Self::with_formatter(level, threshold, sink, Box::new(format))
    }

    /// Binds `level` with an arbitrary [`Formatter`] installed.
    #[must_use]
    pub fn with_formatter(
        level: Level,
        threshold: Arc<Threshold>,
        sink: OutputSink,
        formatter: Box<dyn Formatter>,
    ) -> Self {
        Self {
            level,
            threshold,
            sink,
            format: Mutex::new(formatter),
        }
    }

    /// The level this logger is bound to.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Evaluates the gate against the shared threshold.
    ///
    /// Checked afresh on every call; the result is never cached because
    /// the threshold may change between calls.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.level >= self.threshold.get()
    }

    /// Concatenates the values with no separator and emits the line,
    /// attributed to the caller.
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        self.print_at(SourceLocation::caller(), values);
    }

    /// [`print`](Self::print) with an explicit call site.
    pub fn print_at(&self, location: SourceLocation, values: &[&dyn Display]) {
        if !self.is_enabled() {
            return;
        }
        let message = join_values(values, "");
        self.emit(Some(location), format_args!("{message}"));
    }

    /// Joins the values with single spaces and emits the line, attributed
    /// to the caller.
    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) {
        self.println_at(SourceLocation::caller(), values);
    }

    /// [`println`](Self::println) with an explicit call site.
    pub fn println_at(&self, location: SourceLocation, values: &[&dyn Display]) {
        if !self.is_enabled() {
            return;
        }
        let message = join_values(values, " ");
        self.emit(Some(location), format_args!("{message}"));
    }

    /// Emits a format-string message attributed to the caller.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.printf_at(SourceLocation::caller(), args);
    }

    /// [`printf`](Self::printf) with an explicit call site.
    pub fn printf_at(&self, location: SourceLocation, args: fmt::Arguments<'_>) {
        if !self.is_enabled() {
            return;
        }
        self.emit(Some(location), args);
    }

    /// Emits like [`print`](Self::print), then terminates the process with
    /// status 1. When the gate is off the call returns without exiting.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) {
        self.fatal_at(SourceLocation::caller(), values);
    }

    /// [`fatal`](Self::fatal) with an explicit call site.
    pub fn fatal_at(&self, location: SourceLocation, values: &[&dyn Display]) {
        if !self.is_enabled() {
            return;
        }
        let message = join_values(values, "");
        self.emit(Some(location), format_args!("{message}"));
        process::exit(1);
    }

    /// Emits like [`printf`](Self::printf), then terminates the process
    /// with status 1. When the gate is off the call returns without
    /// exiting.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatalf_at(SourceLocation::caller(), args);
    }

    /// [`fatalf`](Self::fatalf) with an explicit call site.
    pub fn fatalf_at(&self, location: SourceLocation, args: fmt::Arguments<'_>) {
        if !self.is_enabled() {
            return;
        }
        self.emit(Some(location), args);
        process::exit(1);
    }

    /// Replaces the writer of this logger's sink.
    pub fn set_output(&self, writer: Box<dyn Write + Send>) {
        self.sink.replace(writer);
    }

    /// Installs a different rendering strategy for this logger.
    ///
    /// The JSON formatter from the `json` feature is a drop-in here.
    pub fn set_format(&self, formatter: Box<dyn Formatter>) {
        let mut guard = self.format.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = formatter;
    }

    /// Renders and writes unconditionally; callers gate first.
    pub(crate) fn emit(&self, location: Option<SourceLocation>, message: fmt::Arguments<'_>) {
        let record = Record::new(self.level, location, message);
        let mut rendered = Vec::with_capacity(128);
        {
            let format = self.format.lock().unwrap_or_else(PoisonError::into_inner);
            if format.render(&record, &mut rendered).is_err() {
                return;
            }
        }
        // Sink failures are not surfaced; logging is fire-and-forget.
        let _ = self.sink.write_line(&rendered);
    }
}

impl Log for LevelLogger {
    fn is_enabled(&self) -> bool {
        Self::is_enabled(self)
    }

    fn print(&self, values: &[&dyn Display]) {
        if !Self::is_enabled(self) {
            return;
        }
        let message = join_values(values, "");
        self.emit(None, format_args!("{message}"));
    }

    fn println(&self, values: &[&dyn Display]) {
        if !Self::is_enabled(self) {
            return;
        }
        let message = join_values(values, " ");
        self.emit(None, format_args!("{message}"));
    }

    fn printf(&self, args: fmt::Arguments<'_>) {
        if !Self::is_enabled(self) {
            return;
        }
        self.emit(None, args);
    }

    fn fatal(&self, values: &[&dyn Display]) {
        if !Self::is_enabled(self) {
            return;
        }
        let message = join_values(values, "");
        self.emit(None, format_args!("{message}"));
        process::exit(1);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        if !Self::is_enabled(self) {
            return;
        }
        self.emit(None, args);
        process::exit(1);
    }

    fn set_output(&self, writer: Box<dyn Write + Send>) {
        Self::set_output(self, writer);
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("level", &self.level)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levlog_sink::CaptureBuffer;

    fn logger_with_capture(level: Level, threshold: Level) -> (LevelLogger, CaptureBuffer) {
        let buffer = CaptureBuffer::new();
        let logger = LevelLogger::new(
            level,
            Arc::new(Threshold::new(threshold)),
            buffer.sink(),
            TextFormat::plain(),
        );
        (logger, buffer)
    }

    #[test]
    fn print_concatenates_without_separator() {
        let (logger, buffer) = logger_with_capture(Level::Info, Level::Info);
        logger.print(&[&"a", &"b"]);
        assert_eq!(buffer.to_string_lossy(), "INFO: ab\n");
    }

    #[test]
    fn println_joins_with_spaces() {
        let (logger, buffer) = logger_with_capture(Level::Info, Level::Info);
        logger.println(&[&"a", &"b"]);
        assert_eq!(buffer.to_string_lossy(), "INFO: a b\n");
    }

    #[test]
    fn printf_uses_format_semantics() {
        let (logger, buffer) = logger_with_capture(Level::Info, Level::Info);
        logger.printf(format_args!("Hello {}!", "World"));
        assert_eq!(buffer.to_string_lossy(), "INFO: Hello World!\n");
    }

    #[test]
    fn suppressed_calls_write_nothing() {
        let (logger, buffer) = logger_with_capture(Level::Debug, Level::Info);
        logger.print(&[&"invisible"]);
        logger.println(&[&"invisible"]);
        logger.printf(format_args!("invisible"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn gate_is_reevaluated_per_call() {
        let buffer = CaptureBuffer::new();
        let threshold = Arc::new(Threshold::new(Level::Disabled));
        let logger = LevelLogger::new(
            Level::Info,
            Arc::clone(&threshold),
            buffer.sink(),
            TextFormat::plain(),
        );

        logger.printf(format_args!("first"));
        assert!(buffer.is_empty());

        threshold.set(Level::Debug);
        logger.printf(format_args!("second"));
        assert_eq!(buffer.to_string_lossy(), "INFO: second\n");
    }

    #[test]
    fn set_output_replaces_only_this_logger() {
        let (logger, original) = logger_with_capture(Level::Warning, Level::Debug);
        let (other, other_buffer) = logger_with_capture(Level::Error, Level::Debug);

        let replacement = CaptureBuffer::new();
        logger.set_output(Box::new(replacement.clone()));

        logger.printf(format_args!("rerouted"));
        other.printf(format_args!("stays put"));

        assert!(original.is_empty());
        assert_eq!(replacement.to_string_lossy(), "WARNING: rerouted\n");
        assert_eq!(other_buffer.to_string_lossy(), "ERROR: stays put\n");
    }

    #[test]
    fn trait_object_calls_omit_location() {
        let buffer = CaptureBuffer::new();
        let logger = LevelLogger::new(
            Level::Error,
            Arc::new(Threshold::new(Level::Debug)),
            buffer.sink(),
            TextFormat {
                timestamp: false,
                location: true,
            },
        );

        let dynamic: &dyn Log = &logger;
        dynamic.printf(format_args!("no call site"));
        assert_eq!(buffer.to_string_lossy(), "ERROR: no call site\n");
    }

    #[test]
    fn explicit_location_is_rendered() {
        let buffer = CaptureBuffer::new();
        let logger = LevelLogger::new(
            Level::Error,
            Arc::new(Threshold::new(Level::Debug)),
            buffer.sink(),
            TextFormat {
                timestamp: false,
                location: true,
            },
        );

        logger.printf_at(
            SourceLocation::new("services/worker.rs", 77),
            format_args!("boom"),
        );
        assert_eq!(buffer.to_string_lossy(), "ERROR: worker.rs:77: boom\n");
    }

    #[test]
    fn join_values_handles_empty_and_single() {
        assert_eq!(join_values(&[], " "), "");
        assert_eq!(join_values(&[&42], " "), "42");
        assert_eq!(join_values(&[&1, &2, &3], " "), "1 2 3");
        assert_eq!(join_values(&[&1, &2, &3], ""), "123");
    }
}
