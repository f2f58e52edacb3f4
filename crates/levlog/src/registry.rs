//! crates/levlog/src/registry.rs
//! The per-level singleton loggers and their shared threshold.

use std::sync::{Arc, LazyLock};

use levlog_sink::OutputSink;

use crate::format::TextFormat;
use crate::level::Level;
use crate::logger::LevelLogger;
use crate::threshold::Threshold;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// One pre-built [`LevelLogger`] per level, bound to a shared
/// [`Threshold`].
///
/// [`Registry::global`] is the process-wide instance the package-level
/// functions and macros route through. Building a `Registry` of your own
/// yields a fully isolated facility with its own threshold cell, so
/// parallel tests never race on global state.
///
/// Per-level defaults: debug, trace, and error render the call site;
/// info and warning do not; all six render timestamps; the `Disabled`
/// logger writes to the discard sink; and the error logger doubles as the
/// sink for the package-level fatal functions.
#[derive(Debug)]
pub struct Registry {
    debug: LevelLogger,
    trace: LevelLogger,
    info: LevelLogger,
    warning: LevelLogger,
    error: LevelLogger,
    disabled: LevelLogger,
    threshold: Arc<Threshold>,
}

impl Registry {
    /// The process-wide registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// An isolated registry writing to standard output, with its own
    /// threshold cell defaulting to [`Level::Info`].
    ///
    /// Each logger owns a separate sink, so
    /// [`set_output`](LevelLogger::set_output) on one never reroutes
    /// another.
    #[must_use]
    pub fn new() -> Self {
        Self::build(Arc::new(Threshold::default()), |_| OutputSink::stdout())
    }

    /// An isolated registry whose loggers all share clones of `sink`.
    ///
    /// Intended for tests that want every emission in one capture buffer;
    /// because the sink is shared, replacing its writer through any of the
    /// loggers affects all of them. The `Disabled` logger still writes to
    /// the discard sink.
    #[must_use]
    pub fn with_sink(sink: &OutputSink) -> Self {
        Self::build(Arc::new(Threshold::default()), |_| sink.clone())
    }

    fn build(threshold: Arc<Threshold>, sink_for: impl Fn(Level) -> OutputSink) -> Self {
        let logger = |level: Level, location: bool, sink: OutputSink| {
            LevelLogger::new(
                level,
                Arc::clone(&threshold),
                sink,
                TextFormat {
                    timestamp: true,
                    location,
                },
            )
        };
        Self {
            debug: logger(Level::Debug, true, sink_for(Level::Debug)),
            trace: logger(Level::Trace, true, sink_for(Level::Trace)),
            info: logger(Level::Info, false, sink_for(Level::Info)),
            warning: logger(Level::Warning, false, sink_for(Level::Warning)),
            error: logger(Level::Error, true, sink_for(Level::Error)),
            disabled: logger(Level::Disabled, true, OutputSink::discard()),
            threshold,
        }
    }

    /// The singleton bound to `level`.
    ///
    /// Every level maps to a live logger; the enumeration is closed, so
    /// there is no unknown-level case to degrade on.
    #[must_use]
    pub fn logger(&self, level: Level) -> &LevelLogger {
        match level {
            Level::Debug => &self.debug,
            Level::Trace => &self.trace,
            Level::Info => &self.info,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
            Level::Disabled => &self.disabled,
        }
    }

    /// Replaces this registry's threshold.
    pub fn set_level(&self, level: Level) {
        self.threshold.set(level);
    }

    /// Reads this registry's threshold.
    #[must_use]
    pub fn current_level(&self) -> Level {
        self.threshold.get()
    }

    /// A handle to the threshold cell, for binding ad-hoc loggers to this
    /// registry's gate.
    #[must_use]
    pub fn threshold(&self) -> Arc<Threshold> {
        Arc::clone(&self.threshold)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
