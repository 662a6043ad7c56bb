//! Integration tests for the logging system
//!
//! These tests verify the logger host end to end: installing a custom
//! logger, capturing entries from the log functions and from lighting
//! validation failures, and resetting back to the default.
//!
//! Run with: cargo test --test logging_integration_tests

use bright_engine_lighting::bright::lighting::{DirectionalLight, LightRig, LightRigDesc};
use bright_engine_lighting::bright::log::{self, LogEntry, LogSeverity, Logger};
use bright_engine_lighting::glam::Vec3;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                entries: entries.clone(),
            },
            entries,
        )
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGER HOST TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    log::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    log::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());
    log::log(LogSeverity::Error, "test::module", "Test error message".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 3);

    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].source, "test::module");
    assert_eq!(captured[0].message, "Test info message");

    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[1].message, "Test warning message");

    assert_eq!(captured[2].severity, LogSeverity::Error);
    assert_eq!(captured[2].message, "Test error message");

    drop(captured);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    log::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);

    let entry = &captured[0];
    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.source, "test::error");
    assert_eq!(entry.message, "Critical error occurred");
    assert_eq!(entry.file, Some("test_file.rs"));
    assert_eq!(entry.line, Some(42));

    drop(captured);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    log::log(LogSeverity::Info, "test", "Message 1".to_string());
    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
    }

    log::reset_logger();

    // Goes to the default logger, not the capture buffer.
    log::log(LogSeverity::Info, "test", "Message 2".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
}

#[test]
#[serial]
fn test_integration_logging_macros() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    bright_engine_lighting::engine_trace!("test::macros", "trace {}", 1);
    bright_engine_lighting::engine_debug!("test::macros", "debug {}", 2);
    bright_engine_lighting::engine_info!("test::macros", "info {}", 3);
    bright_engine_lighting::engine_warn!("test::macros", "warn {}", 4);
    bright_engine_lighting::engine_error!("test::macros", "error {}", 5);

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 5);

    assert_eq!(captured[0].severity, LogSeverity::Trace);
    assert_eq!(captured[0].message, "trace 1");
    assert_eq!(captured[1].severity, LogSeverity::Debug);
    assert_eq!(captured[2].severity, LogSeverity::Info);
    assert_eq!(captured[3].severity, LogSeverity::Warn);

    // Only the error macro carries file and line.
    assert_eq!(captured[4].severity, LogSeverity::Error);
    assert_eq!(captured[4].message, "error 5");
    assert!(captured[3].file.is_none());
    assert!(captured[4].file.is_some());
    assert!(captured[4].line.is_some());

    drop(captured);
    log::reset_logger();
}

// ============================================================================
// LIGHTING VALIDATION LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_rig_validation_failure_logged() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    let desc = LightRigDesc {
        lights: vec![
            ("sun".to_string(), DirectionalLight::new(Vec3::Y, Vec3::ONE)),
            ("sun".to_string(), DirectionalLight::new(Vec3::X, Vec3::ONE)),
        ],
    };
    let result = LightRig::from_desc(desc);
    assert!(result.is_err());

    // The rejection is logged at ERROR severity with source location.
    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].source, "bright::lighting");
    assert!(captured[0].message.contains("Duplicate light name 'sun'"));
    assert!(captured[0].file.is_some());
    assert!(captured[0].line.is_some());

    drop(captured);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_rig_creation_logged_at_debug() {
    let (capture, entries) = CaptureLogger::new();
    log::set_logger(capture);

    let desc = LightRigDesc {
        lights: vec![("sun".to_string(), DirectionalLight::new(Vec3::Y, Vec3::ONE))],
    };
    LightRig::from_desc(desc).unwrap();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Debug);
    assert!(captured[0].message.contains("1 light(s)"));

    drop(captured);
    log::reset_logger();
}
