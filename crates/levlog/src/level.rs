//! crates/levlog/src/level.rs
//! Severity levels and their ordering.

use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered by admission.
///
/// A logger bound to level `L` emits only while `L >= ` the configured
/// threshold, so `Debug` is admitted last and [`Level::Disabled`] acts as
/// the suppress-everything sentinel when installed as the threshold.
///
/// The [`Display`](fmt::Display) rendering is the canonical line prefix
/// (`"DEBUG: "`, `"INFO: "`, ...), which downstream log scrapers match on.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Detailed diagnostics, admitted only when everything is.
    Debug,
    /// Code-flow tracing.
    Trace,
    /// Routine operational messages. The default threshold.
    Info,
    /// Something surprising that did not stop the operation.
    Warning,
    /// A failed operation.
    Error,
    /// Sentinel above every real severity; as a threshold it suppresses
    /// all loggers.
    Disabled,
}

impl Level {
    /// Every level in ascending admission order.
    pub const ALL: [Self; 6] = [
        Self::Debug,
        Self::Trace,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Disabled,
    ];

    /// The canonical line prefix for this level.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG: ",
            Self::Trace => "TRACE: ",
            Self::Info => "INFO: ",
            Self::Warning => "WARNING: ",
            Self::Error => "ERROR: ",
            Self::Disabled => "DISABLED: ",
        }
    }

    /// The lowercase severity word, as used by structured formatters.
    ///
    /// Cosmetic only: gating always compares [`Level`] values directly.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Disabled => "disabled",
        }
    }

    /// The underlying ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Converts an ordinal back into a level.
    ///
    /// Values outside the defined range yield `None` rather than a panic;
    /// this is the integer boundary of the otherwise closed enumeration.
    #[must_use]
    pub const fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Debug),
            1 => Some(Self::Trace),
            2 => Some(Self::Info),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Disabled),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Level {
    type Err = String;

    /// Parses a lowercase (or any-case) severity word.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "disabled" => Ok(Self::Disabled),
            _ => Err(format!("unknown log level: {token}")),
        }
    }
}
