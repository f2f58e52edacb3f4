//! crates/levlog/src/tracing_bridge.rs
//! Bridge between the tracing crate and the level gate.
//!
//! This module provides a tracing-subscriber layer that routes tracing
//! events through the facade's level loggers. Standard tracing macros
//! (`trace!`, `debug!`, `info!`, `warn!`, `error!`) then obey the same
//! threshold as direct facade calls, and their output lands in the same
//! sinks.
//!
//! # Usage
//!
//! ```rust,ignore
//! use levlog::{Level, init_tracing};
//!
//! init_tracing();
//! levlog::set_level(Level::Debug);
//!
//! // Standard tracing macros now flow through the facade's gate.
//! tracing::info!("transfer started");
//! tracing::debug!("negotiated window of {} bytes", 4096);
//! ```

use std::sync::Arc;

use tracing::{Level as TracingLevel, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::level::Level;
use crate::record::SourceLocation;
use crate::registry::Registry;

/// A tracing layer that forwards events into the facade's loggers.
///
/// Events target the process-wide [`Registry`] by default;
/// [`with_registry`](Self::with_registry) binds an isolated one instead,
/// which is what tests do.
#[derive(Default)]
pub struct LevlogLayer {
    registry: Option<Arc<Registry>>,
}

impl LevlogLayer {
    /// A layer routing into the process-wide registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { registry: None }
    }

    /// A layer routing into `registry` instead of the global one.
    #[must_use]
    pub const fn with_registry(registry: Arc<Registry>) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    fn registry(&self) -> &Registry {
        self.registry.as_deref().unwrap_or_else(|| Registry::global())
    }

    /// Maps a tracing level onto the facade's severity scale.
    const fn map_level(level: &TracingLevel) -> Level {
        match *level {
            TracingLevel::ERROR => Level::Error,
            TracingLevel::WARN => Level::Warning,
            TracingLevel::INFO => Level::Info,
            TracingLevel::DEBUG => Level::Debug,
            TracingLevel::TRACE => Level::Trace,
        }
    }
}

impl<S> Layer<S> for LevlogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let logger = self.registry().logger(Self::map_level(metadata.level()));
        if !logger.is_enabled() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let location = metadata
            .file()
            .zip(metadata.line())
            .map(|(file, line)| SourceLocation::new(file, line));
        logger.emit(location, format_args!("{message}"));
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs the bridge as the global tracing subscriber.
///
/// Standard tracing macros then flow through the facade's gate. Panics if
/// a global subscriber is already set, like any `init`-style installer.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(LevlogLayer::new()).init();
}

/// Installs the bridge together with an additional tracing filter layer.
///
/// Combines the facade's threshold with standard tracing filtering for
/// finer control over what reaches the loggers.
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LevlogLayer::new())
        .init();
}
