//! crates/levlog/src/threshold.rs
//! The shared severity threshold every gate check consults.

use std::sync::{PoisonError, RwLock};

use crate::level::Level;

/// A synchronized cell holding the current admission threshold.
///
/// Every logging call reads the cell afresh, so a
/// [`set`](Self::set) from any thread is observed by subsequent calls on
/// every logger sharing the cell. Calls already past their gate check are
/// not revisited; visibility is eventual, not ordered.
///
/// The registry owns one cell per instance; the process-wide registry's
/// cell is what the package-level [`set_level`](crate::set_level) mutates.
#[derive(Debug)]
pub struct Threshold(RwLock<Level>);

impl Threshold {
    /// Creates a cell with the given starting threshold.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self(RwLock::new(level))
    }

    /// Reads the current threshold.
    #[must_use]
    pub fn get(&self) -> Level {
        // The cell only ever holds a Copy value, so a poisoned lock still
        // carries a usable threshold.
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the threshold for all loggers sharing this cell.
    pub fn set(&self, level: Level) {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *guard = level;
    }
}

impl Default for Threshold {
    /// The default threshold is [`Level::Info`].
    fn default() -> Self {
        Self::new(Level::Info)
    }
}
