//! crates/levlog-sink/src/line_mode.rs
//! Newline policy applied by [`OutputSink::write_line`](crate::OutputSink::write_line).

/// Controls whether a sink guarantees a trailing newline on each payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator when the payload does not already end
    /// with one. This is the default and matches line-oriented log output.
    WithNewline,
    /// Write the payload exactly as rendered.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether this mode appends a trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use levlog_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// `true` selects [`LineMode::WithNewline`], `false` selects
    /// [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appends_newline() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn bool_conversion_round_trips() {
        assert_eq!(LineMode::from(true), LineMode::WithNewline);
        assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    }
}
