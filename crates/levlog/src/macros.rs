//! crates/levlog/src/macros.rs
//! Convenience macros over the global registry and ad-hoc loggers.
//!
//! The per-level macros route through
//! [`Registry::global`](crate::Registry::global) with standard
//! format-string semantics. Every macro passes `file!()`/`line!()`
//! explicitly, so the rendered call site is the invocation site.

/// Logs a formatted message at [`Level::Debug`](crate::Level::Debug).
///
/// # Example
/// ```ignore
/// levlog::debug!("cache miss for {key}");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::Registry::global()
            .logger($crate::Level::Debug)
            .printf_at(
                $crate::SourceLocation::new(::std::file!(), ::std::line!()),
                ::std::format_args!($($arg)*),
            )
    };
}

/// Logs a formatted message at [`Level::Trace`](crate::Level::Trace).
///
/// # Example
/// ```ignore
/// levlog::trace!("entering reconcile loop");
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::Registry::global()
            .logger($crate::Level::Trace)
            .printf_at(
                $crate::SourceLocation::new(::std::file!(), ::std::line!()),
                ::std::format_args!($($arg)*),
            )
    };
}

/// Logs a formatted message at [`Level::Info`](crate::Level::Info).
///
/// # Example
/// ```ignore
/// levlog::info!("listening on {addr}");
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::Registry::global()
            .logger($crate::Level::Info)
            .printf_at(
                $crate::SourceLocation::new(::std::file!(), ::std::line!()),
                ::std::format_args!($($arg)*),
            )
    };
}

/// Logs a formatted message at [`Level::Warning`](crate::Level::Warning).
///
/// # Example
/// ```ignore
/// levlog::warning!("retrying after {err}");
/// ```
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::Registry::global()
            .logger($crate::Level::Warning)
            .printf_at(
                $crate::SourceLocation::new(::std::file!(), ::std::line!()),
                ::std::format_args!($($arg)*),
            )
    };
}

/// Logs a formatted message at [`Level::Error`](crate::Level::Error).
///
/// # Example
/// ```ignore
/// levlog::error!("write failed: {err}");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::Registry::global()
            .logger($crate::Level::Error)
            .printf_at(
                $crate::SourceLocation::new(::std::file!(), ::std::line!()),
                ::std::format_args!($($arg)*),
            )
    };
}

/// Logs a formatted message through the error-level singleton, then exits
/// the process with status 1. When error-level output is gated off, the
/// call returns without terminating.
///
/// # Example
/// ```ignore
/// levlog::fatal!("unrecoverable: {err}");
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::Registry::global()
            .logger($crate::Level::Error)
            .fatalf_at(
                $crate::SourceLocation::new(::std::file!(), ::std::line!()),
                ::std::format_args!($($arg)*),
            )
    };
}

/// Concatenates the given values with no separator and emits them through
/// `$logger`, attributing the line to the invocation site.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use levlog::{CaptureBuffer, Level, LevelLogger, TextFormat, Threshold};
///
/// let buffer = CaptureBuffer::new();
/// let logger = LevelLogger::new(
///     Level::Info,
///     Arc::new(Threshold::new(Level::Info)),
///     buffer.sink(),
///     TextFormat::plain(),
/// );
///
/// levlog::print_to!(logger, "a", "b");
/// assert_eq!(buffer.to_string_lossy(), "INFO: ab\n");
/// ```
#[macro_export]
macro_rules! print_to {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.print_at(
            $crate::SourceLocation::new(::std::file!(), ::std::line!()),
            &[$(&$value as &dyn ::std::fmt::Display),+],
        )
    };
}

/// Joins the given values with single spaces and emits them through
/// `$logger`, attributing the line to the invocation site.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use levlog::{CaptureBuffer, Level, LevelLogger, TextFormat, Threshold};
///
/// let buffer = CaptureBuffer::new();
/// let logger = LevelLogger::new(
///     Level::Info,
///     Arc::new(Threshold::new(Level::Info)),
///     buffer.sink(),
///     TextFormat::plain(),
/// );
///
/// levlog::println_to!(logger, "a", "b");
/// assert_eq!(buffer.to_string_lossy(), "INFO: a b\n");
/// ```
#[macro_export]
macro_rules! println_to {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.println_at(
            $crate::SourceLocation::new(::std::file!(), ::std::line!()),
            &[$(&$value as &dyn ::std::fmt::Display),+],
        )
    };
}

/// Emits a format-string message through `$logger`, attributing the line
/// to the invocation site.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use levlog::{CaptureBuffer, Level, LevelLogger, TextFormat, Threshold};
///
/// let buffer = CaptureBuffer::new();
/// let logger = LevelLogger::new(
///     Level::Warning,
///     Arc::new(Threshold::new(Level::Info)),
///     buffer.sink(),
///     TextFormat::plain(),
/// );
///
/// levlog::printf_to!(logger, "slow response from {}", "upstream");
/// assert_eq!(buffer.to_string_lossy(), "WARNING: slow response from upstream\n");
/// ```
#[macro_export]
macro_rules! printf_to {
    ($logger:expr, $($arg:tt)*) => {
        $logger.printf_at(
            $crate::SourceLocation::new(::std::file!(), ::std::line!()),
            ::std::format_args!($($arg)*),
        )
    };
}
