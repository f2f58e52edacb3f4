//! crates/levlog/src/record.rs
//! The unit of data handed to a formatter.

use std::fmt;
use std::panic::Location;

use crate::level::Level;

/// A call site captured for line attribution.
///
/// The plain logging entry points capture this through `#[track_caller]`;
/// the logging macros pass `file!()`/`line!()` explicitly so the reported
/// location is always the invocation site, never facade plumbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from an explicit file and line.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Captures the location of the calling code.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    /// The full file path as captured.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The 1-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The file name without its leading directories, as rendered in log
    /// lines.
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_file(), self.line)
    }
}

/// One message on its way to a sink.
///
/// Borrowed by [`Formatter::render`](crate::Formatter::render); carries the
/// level, the optional call site, and the assembled message. With the
/// `json` feature it can also borrow the structured fields attached by the
/// JSON logger.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    level: Level,
    location: Option<SourceLocation>,
    message: fmt::Arguments<'a>,
    #[cfg(feature = "json")]
    fields: Option<&'a crate::json::Fields>,
}

impl<'a> Record<'a> {
    /// Assembles a record.
    #[must_use]
    pub fn new(
        level: Level,
        location: Option<SourceLocation>,
        message: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            level,
            location,
            message,
            #[cfg(feature = "json")]
            fields: None,
        }
    }

    /// The severity this record was emitted at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The call site, when one was captured.
    #[must_use]
    pub const fn location(&self) -> Option<SourceLocation> {
        self.location
    }

    /// The assembled message.
    #[must_use]
    pub const fn message(&self) -> fmt::Arguments<'a> {
        self.message
    }

    /// Attaches borrowed structured fields.
    #[cfg(feature = "json")]
    #[must_use]
    pub const fn with_fields(mut self, fields: &'a crate::json::Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    /// The structured fields, when the emitting logger carried any.
    #[cfg(feature = "json")]
    #[must_use]
    pub const fn fields(&self) -> Option<&'a crate::json::Fields> {
        self.fields
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("location", &self.location)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
