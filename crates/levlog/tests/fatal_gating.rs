//! Integration tests for the fatal variants.
//!
//! A gated-off fatal call must behave like any other suppressed call: no
//! output and, crucially, no process exit. The enabled path is verified in
//! a child process so the exit does not take the test run with it.

use std::env;
use std::process::Command;
use std::sync::Arc;

use levlog::{CaptureBuffer, Level, LevelLogger, OutputSink, TextFormat, Threshold};

const CHILD_ENV: &str = "LEVLOG_FATAL_CHILD";

fn gated_logger(level: Level, threshold: Level) -> (LevelLogger, CaptureBuffer) {
    let buffer = CaptureBuffer::new();
    let logger = LevelLogger::new(
        level,
        Arc::new(Threshold::new(threshold)),
        buffer.sink(),
        TextFormat::plain(),
    );
    (logger, buffer)
}

/// A suppressed `fatal` produces no output and does not terminate; this
/// test process surviving the call is the assertion.
#[test]
fn gated_fatal_does_not_exit() {
    let (logger, buffer) = gated_logger(Level::Error, Level::Disabled);

    logger.fatal(&[&"must not exit"]);
    logger.fatalf(format_args!("must not exit either"));

    assert!(buffer.is_empty());
}

/// A suppressed debug-level `fatal` with an Info threshold also returns.
#[test]
fn gated_debug_fatal_does_not_exit() {
    let (logger, buffer) = gated_logger(Level::Debug, Level::Info);
    logger.fatalf(format_args!("quietly ignored"));
    assert!(buffer.is_empty());
}

/// An enabled `fatal` terminates the process with status 1, after
/// emitting. Verified by re-running this test in a child process.
#[test]
fn enabled_fatal_exits_with_status_one() {
    if env::var_os(CHILD_ENV).is_some() {
        let logger = LevelLogger::new(
            Level::Error,
            Arc::new(Threshold::new(Level::Debug)),
            OutputSink::discard(),
            TextFormat::plain(),
        );
        logger.fatalf(format_args!("terminating"));
        unreachable!("an enabled fatal call must not return");
    }

    let exe = env::current_exe().expect("test binary path");
    let status = Command::new(exe)
        .args(["enabled_fatal_exits_with_status_one", "--exact", "--nocapture"])
        .env(CHILD_ENV, "1")
        .status()
        .expect("child test process runs");

    assert_eq!(status.code(), Some(1));
}

/// The emission preceding an enabled `fatal` reaches the sink before the
/// exit; verified through the child's captured stdout.
#[test]
fn enabled_fatal_emits_before_exiting() {
    if env::var_os(CHILD_ENV).is_some() {
        // Covered by enabled_fatal_exits_with_status_one's child run.
        return;
    }

    let exe = env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["fatal_child_emits", "--exact", "--nocapture", "--ignored"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("child test process runs");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ERROR: last words"), "stdout was: {stdout}");
}

/// Child-only body for `enabled_fatal_emits_before_exiting`; writes its
/// final line to stdout and exits.
#[test]
#[ignore = "only meaningful as a child process"]
fn fatal_child_emits() {
    if env::var_os(CHILD_ENV).is_none() {
        return;
    }

    let logger = LevelLogger::new(
        Level::Error,
        Arc::new(Threshold::new(Level::Debug)),
        OutputSink::stdout(),
        TextFormat::plain(),
    );
    logger.fatal(&[&"last words"]);
    unreachable!("an enabled fatal call must not return");
}
