//! crates/levlog/src/format.rs
//! Rendering a [`Record`] into bytes.

use std::io;
use std::time::SystemTime;

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

use crate::record::Record;

/// Timestamp layout shared by the text and JSON formatters (UTC).
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]");

/// Renders the current wall-clock time, falling back to the epoch string
/// when formatting fails.
pub(crate) fn current_timestamp() -> String {
    OffsetDateTime::from(SystemTime::now())
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| "1970/01/01 00:00:00".to_string())
}

/// Converts a level, message, and optional context into rendered bytes.
///
/// The default is [`TextFormat`]; the `json` feature ships `JsonFormat` as
/// a drop-in alternative that a logger accepts through its
/// `set_format`/`set_formatter` surface. Implementations must not append a
/// line terminator; the sink owns the newline policy.
pub trait Formatter: Send {
    /// Writes the rendered form of `record` into `out`.
    fn render(&self, record: &Record<'_>, out: &mut dyn io::Write) -> io::Result<()>;
}

/// The plain-text line format: `PREFIX [timestamp ][file:line: ]message`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextFormat {
    /// Render the wall-clock timestamp after the prefix.
    pub timestamp: bool,
    /// Render the call site as `file:line:` when the record carries one.
    pub location: bool,
}

impl TextFormat {
    /// Prefix and message only; handy for deterministic test assertions.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            timestamp: false,
            location: false,
        }
    }
}

impl Default for TextFormat {
    /// Timestamp and location both enabled.
    fn default() -> Self {
        Self {
            timestamp: true,
            location: true,
        }
    }
}

impl Formatter for TextFormat {
    fn render(&self, record: &Record<'_>, out: &mut dyn io::Write) -> io::Result<()> {
        out.write_all(record.level().prefix().as_bytes())?;
        if self.timestamp {
            write!(out, "{} ", current_timestamp())?;
        }
        if self.location {
            if let Some(location) = record.location() {
                write!(out, "{location}: ")?;
            }
        }
        write!(out, "{}", record.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::record::SourceLocation;

    fn render(
        format: TextFormat,
        level: Level,
        location: Option<SourceLocation>,
        message: &str,
    ) -> String {
        let mut buffer = Vec::new();
        format
            .render(
                &Record::new(level, location, format_args!("{message}")),
                &mut buffer,
            )
            .expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8")
    }

    #[test]
    fn plain_is_prefix_and_message() {
        assert_eq!(
            render(TextFormat::plain(), Level::Info, None, "ready"),
            "INFO: ready"
        );
    }

    #[test]
    fn location_renders_short_file_and_line() {
        let format = TextFormat {
            timestamp: false,
            location: true,
        };
        assert_eq!(
            render(
                format,
                Level::Error,
                Some(SourceLocation::new("src/deep/caller.rs", 41)),
                "disk full"
            ),
            "ERROR: caller.rs:41: disk full"
        );
    }

    #[test]
    fn location_flag_without_capture_renders_nothing_extra() {
        let format = TextFormat {
            timestamp: false,
            location: true,
        };
        assert_eq!(
            render(format, Level::Error, None, "disk full"),
            "ERROR: disk full"
        );
    }

    #[test]
    fn timestamp_has_the_documented_shape() {
        let rendered = current_timestamp();
        // e.g. "2026/08/05 14:03:59"
        assert_eq!(rendered.len(), 19);
        assert_eq!(&rendered[4..5], "/");
        assert_eq!(&rendered[7..8], "/");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[13..14], ":");
        assert_eq!(&rendered[16..17], ":");
    }

    #[test]
    fn default_enables_timestamp_and_location() {
        let format = TextFormat::default();
        assert!(format.timestamp);
        assert!(format.location);
    }
}
