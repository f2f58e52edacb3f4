//! crates/levlog/src/json.rs
//! The structured logger and the drop-in JSON formatter.
//!
//! Gating is exactly the shared [`Level`] comparison used by the plain
//! loggers; the lowercase severity word in the rendered object is
//! cosmetic. Structured context travels through [`StructuredLog`], which
//! the plain-text loggers deliberately do not implement.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::process;
use std::sync::{Arc, Mutex, PoisonError};

use levlog_sink::OutputSink;
use serde_json::{Map, Value};

use crate::format::{Formatter, current_timestamp};
use crate::level::Level;
use crate::logger::{Log, join_values};
use crate::record::{Record, SourceLocation};
use crate::registry::Registry;
use crate::threshold::Threshold;

/// Structured key/value context carried by a [`JsonLogger`].
pub type Fields = Map<String, Value>;

/// The capability of carrying structured context, split out of [`Log`] so
/// plain-text loggers never pretend to accept fields they would drop.
pub trait StructuredLog: Log {
    /// Returns a handle whose emissions carry `fields` merged over any
    /// context already present. The handle shares this logger's sink,
    /// threshold, and formatter.
    #[must_use]
    fn with_fields(&self, fields: Fields) -> Self
    where
        Self: Sized;

    /// Replaces the rendering strategy shared by this logger and the
    /// handles derived from it.
    fn set_formatter(&self, formatter: Box<dyn Formatter>);
}

/// Renders a record as one JSON object per line: `level`, `time`,
/// optional `file`, `msg`, and any attached fields.
///
/// A drop-in [`Formatter`], also installable into a plain
/// [`LevelLogger`](crate::LevelLogger) via
/// [`set_format`](crate::LevelLogger::set_format).
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormat;

impl Formatter for JsonFormat {
    fn render(&self, record: &Record<'_>, out: &mut dyn io::Write) -> io::Result<()> {
        let mut object = Map::new();
        object.insert(
            "level".to_string(),
            Value::String(record.level().name().to_string()),
        );
        object.insert("time".to_string(), Value::String(current_timestamp()));
        if let Some(location) = record.location() {
            object.insert("file".to_string(), Value::String(location.to_string()));
        }
        object.insert(
            "msg".to_string(),
            Value::String(record.message().to_string()),
        );
        if let Some(fields) = record.fields() {
            for (key, value) in fields {
                object.insert(key.clone(), value.clone());
            }
        }
        serde_json::to_writer(&mut *out, &Value::Object(object))?;
        Ok(())
    }
}

/// A level-bound logger emitting structured JSON lines.
///
/// The analog of the plain [`LevelLogger`](crate::LevelLogger) for
/// machine-readable output: same gate, same sink capability, default
/// destination standard error. Exactly one structured adapter exists in
/// this crate.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use levlog::{CaptureBuffer, Fields, JsonLogger, Level, StructuredLog, Threshold};
///
/// let buffer = CaptureBuffer::new();
/// let logger = JsonLogger::with_threshold(Level::Error, Arc::new(Threshold::new(Level::Info)));
/// logger.set_output(Box::new(buffer.clone()));
///
/// let mut fields = Fields::new();
/// fields.insert("device".into(), "sda1".into());
/// logger.with_fields(fields).printf(format_args!("disk full"));
///
/// let line: serde_json::Value = serde_json::from_str(buffer.to_string_lossy().trim()).unwrap();
/// assert_eq!(line["level"], "error");
/// assert_eq!(line["msg"], "disk full");
/// assert_eq!(line["device"], "sda1");
/// ```
pub struct JsonLogger {
    level: Level,
    threshold: Arc<Threshold>,
    sink: OutputSink,
    formatter: Arc<Mutex<Box<dyn Formatter>>>,
    fields: Fields,
}

impl JsonLogger {
    /// A structured logger for `level`, gated by the process-wide
    /// threshold and writing to standard error.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::with_threshold(level, Registry::global().threshold())
    }

    /// A structured logger gated by an explicit threshold cell, for
    /// isolated facilities and tests.
    #[must_use]
    pub fn with_threshold(level: Level, threshold: Arc<Threshold>) -> Self {
        Self {
            level,
            threshold,
            sink: OutputSink::stderr(),
            formatter: Arc::new(Mutex::new(Box::new(JsonFormat))),
            fields: Fields::new(),
        }
    }

    /// The level this logger is bound to.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Evaluates the gate against the shared threshold, afresh per call.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.level >= self.threshold.get()
    }

    /// See [`Log::print`]; attributed to the caller.
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

    /// See [`Log::println`]; attributed to the caller.
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

    /// See [`Log::printf`]; attributed to the caller.
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

    /// See [`Log::fatal`]; attributed to the caller. A gated-off call
    /// returns without terminating.
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

    /// See [`Log::fatalf`]; attributed to the caller. A gated-off call
    /// returns without terminating.
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

    /// Replaces the writer of this logger's sink; handles derived through
    /// [`with_fields`](Self::with_fields) share it.
    pub fn set_output(&self, writer: Box<dyn Write + Send>) {
        self.sink.replace(writer);
    }

    fn emit(&self, location: Option<SourceLocation>, message: fmt::Arguments<'_>) {
        let record = Record::new(self.level, location, message);
        let record = if self.fields.is_empty() {
            record
        } else {
            record.with_fields(&self.fields)
        };
        let mut rendered = Vec::with_capacity(160);
        {
            let formatter = self
                .formatter
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if formatter.render(&record, &mut rendered).is_err() {
                return;
            }
        }
        let _ = self.sink.write_line(&rendered);
    }
}

impl Log for JsonLogger {
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

impl StructuredLog for JsonLogger {
    fn with_fields(&self, fields: Fields) -> Self {
        let mut merged = self.fields.clone();
        for (key, value) in fields {
            merged.insert(key, value);
        }
        Self {
            level: self.level,
            threshold: Arc::clone(&self.threshold),
            sink: self.sink.clone(),
            formatter: Arc::clone(&self.formatter),
            fields: merged,
        }
    }

    fn set_formatter(&self, formatter: Box<dyn Formatter>) {
        let mut guard = self
            .formatter
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = formatter;
    }
}

impl fmt::Debug for JsonLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLogger")
            .field("level", &self.level)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
