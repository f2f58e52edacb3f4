//! Integration tests for the level gate.
//!
//! These exercise every (logger level, threshold) pair and verify the
//! emit/no-emit decision is exactly `level >= threshold`, evaluated fresh
//! on each call.

use std::sync::Arc;

use levlog::{CaptureBuffer, Level, LevelLogger, Registry, TextFormat, Threshold};

fn capture_logger(level: Level, threshold: Level) -> (LevelLogger, CaptureBuffer) {
    let buffer = CaptureBuffer::new();
    let logger = LevelLogger::new(
        level,
        Arc::new(Threshold::new(threshold)),
        buffer.sink(),
        TextFormat::plain(),
    );
    (logger, buffer)
}

// ============================================================================
// The 6x6 matrix
// ============================================================================

/// Verifies emit/no-emit for all 36 combinations against capture sinks.
#[test]
fn gate_matrix_is_monotonic() {
    for threshold in Level::ALL {
        for level in Level::ALL {
            let (logger, buffer) = capture_logger(level, threshold);
            logger.printf(format_args!("probe"));

            assert_eq!(
                !buffer.is_empty(),
                level >= threshold,
                "level {level:?} against threshold {threshold:?}"
            );
        }
    }
}

/// Verifies the registry singletons follow the same matrix through their
/// `is_enabled` gate.
#[test]
fn registry_singletons_follow_the_matrix() {
    for threshold in Level::ALL {
        let registry = Registry::new();
        registry.set_level(threshold);
        for level in Level::ALL {
            assert_eq!(
                registry.logger(level).is_enabled(),
                level >= threshold,
                "level {level:?} against threshold {threshold:?}"
            );
        }
    }
}

// ============================================================================
// Threshold edges
// ============================================================================

/// Verifies a `Disabled` threshold suppresses every real-severity logger.
#[test]
fn disabled_threshold_silences_everything() {
    let buffer = CaptureBuffer::new();
    let registry = Registry::with_sink(&buffer.sink());
    registry.set_level(Level::Disabled);

    for level in Level::ALL {
        levlog::printf_to!(registry.logger(level), "nothing at {:?}", level);
    }

    assert!(buffer.is_empty());
}

/// Verifies a `Debug` threshold admits every real-severity logger.
#[test]
fn debug_threshold_admits_everything() {
    let buffer = CaptureBuffer::new();
    let registry = Registry::with_sink(&buffer.sink());
    registry.set_level(Level::Debug);

    for level in [
        Level::Debug,
        Level::Trace,
        Level::Info,
        Level::Warning,
        Level::Error,
    ] {
        levlog::printf_to!(registry.logger(level), "emitted at {:?}", level);
    }

    let output = buffer.to_string_lossy();
    assert_eq!(output.lines().count(), 5);
}

/// Verifies the decision tracks threshold changes between calls.
#[test]
fn gate_follows_threshold_changes() {
    let buffer = CaptureBuffer::new();
    let registry = Registry::with_sink(&buffer.sink());

    registry.set_level(Level::Error);
    levlog::printf_to!(registry.logger(Level::Info), "first");
    assert!(buffer.is_empty());

    registry.set_level(Level::Info);
    levlog::printf_to!(registry.logger(Level::Info), "second");
    assert!(buffer.to_string_lossy().contains("second"));

    registry.set_level(Level::Disabled);
    levlog::printf_to!(registry.logger(Level::Info), "third");
    assert!(!buffer.to_string_lossy().contains("third"));
}

/// Verifies isolated registries gate independently of one another.
#[test]
fn isolated_registries_do_not_share_a_gate() {
    let first_buffer = CaptureBuffer::new();
    let first = Registry::with_sink(&first_buffer.sink());
    let second_buffer = CaptureBuffer::new();
    let second = Registry::with_sink(&second_buffer.sink());

    first.set_level(Level::Disabled);
    second.set_level(Level::Debug);

    levlog::printf_to!(first.logger(Level::Error), "gated");
    levlog::printf_to!(second.logger(Level::Error), "emitted");

    assert!(first_buffer.is_empty());
    assert!(second_buffer.to_string_lossy().contains("emitted"));
}
