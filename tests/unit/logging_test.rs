//! Tests for the diagnostic logger
//!
//! Loggers here write into an in-memory sink so filtering, formatting and
//! ordering can be asserted line by line.

use preflight::logging::{self, ColorScheme, Logger, LoggerConfig, Severity};
use preflight::Error;

use crate::common::{Capture, capture_logger};

const ESC: char = '\x1b';

// =============================================================================
// Threshold Filtering
// =============================================================================

#[test]
fn emits_iff_severity_meets_threshold() {
    for threshold in Severity::ALL {
        for severity in Severity::ALL {
            let (logger, capture) = capture_logger(threshold, false);
            logger.emit(severity, "probe");
            let visible = !capture.contents().is_empty();
            assert_eq!(
                visible,
                severity >= threshold,
                "threshold {threshold}, severity {severity}"
            );
        }
    }
}

#[test]
fn warn_threshold_shows_only_error() {
    let (logger, capture) = capture_logger(Severity::Warn, false);
    logger.debug("noisy detail");
    logger.error("real problem");
    assert_eq!(capture.lines(), vec!["[ERROR  ] real problem"]);
}

#[test]
fn suppressed_messages_leave_no_trace() {
    let (logger, capture) = capture_logger(Severity::Error, true);
    logger.debug("a");
    logger.info("b");
    logger.warn("c");
    assert_eq!(capture.contents(), "");
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn plain_output_has_fixed_width_labels() {
    let (logger, capture) = capture_logger(Severity::Debug, false);
    logger.debug("one");
    logger.info("two");
    logger.warn("three");
    logger.error("four");
    assert_eq!(
        capture.lines(),
        vec![
            "[DEBUG  ] one",
            "[INFO   ] two",
            "[WARN   ] three",
            "[ERROR  ] four",
        ]
    );
}

#[test]
fn plain_output_never_contains_escape_sequences() {
    let (logger, capture) = capture_logger(Severity::Debug, false);
    for severity in Severity::ALL {
        logger.emit(severity, "message");
    }
    assert!(!capture.contents().contains(ESC));
}

#[test]
fn colored_output_wraps_every_label() {
    let scheme = ColorScheme::ansi();
    for severity in Severity::ALL {
        let (logger, capture) = capture_logger(Severity::Debug, true);
        logger.emit(severity, "message");

        let style = scheme.get(severity);
        let expected = scheme.render(severity, "message");
        assert_eq!(capture.lines(), vec![expected.clone()]);
        assert!(expected.starts_with(&style.label.start_code()));
        assert!(expected.contains(ESC));
    }
}

#[test]
fn message_text_is_written_verbatim() {
    let (logger, capture) = capture_logger(Severity::Info, false);
    logger.info("50% done {braces} and\ttabs");
    assert_eq!(capture.lines(), vec!["[INFO   ] 50% done {braces} and\ttabs"]);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn lines_appear_in_call_order() {
    let (logger, capture) = capture_logger(Severity::Info, false);
    for i in 0..20 {
        logger.warn(&format!("line {i}"));
    }
    let expected: Vec<String> = (0..20).map(|i| format!("[WARN   ] line {i}")).collect();
    assert_eq!(capture.lines(), expected);
}

// =============================================================================
// Level Specs
// =============================================================================

#[test]
fn unrecognized_spec_behaves_like_no_spec() {
    let bogus = LoggerConfig::from_spec(Some("bogus"), false);
    let absent = LoggerConfig::from_spec(None, false);
    assert_eq!(bogus.threshold, absent.threshold);
    assert_eq!(bogus.threshold, Severity::Warn);
}

#[test]
fn spec_names_are_case_insensitive() {
    assert_eq!(LoggerConfig::from_spec(Some("DeBuG"), false).threshold, Severity::Debug);
    assert_eq!(LoggerConfig::from_spec(Some("INFO"), false).threshold, Severity::Info);
}

// =============================================================================
// Process-wide Logger
// =============================================================================

// The only test in this binary that touches the process-wide logger.
#[test]
fn global_logger_installs_once() {
    logging::emit(Severity::Error, "before install");

    let capture = Capture::default();
    let first = Logger::with_target(
        LoggerConfig::new(Severity::Info, false),
        env_logger::Target::Pipe(Box::new(capture.clone())),
    );
    let installed = logging::install(first).unwrap();
    assert_eq!(installed.config().threshold, Severity::Info);

    let (second, second_capture) = capture_logger(Severity::Debug, false);
    assert!(matches!(logging::install(second), Err(Error::AlreadyInitialized)));
    assert!(matches!(
        logging::initialize(Some("debug"), false),
        Err(Error::AlreadyInitialized)
    ));

    logging::emit(Severity::Warn, "after install");
    log::info!("from the log facade");
    log::debug!("below threshold");

    assert_eq!(
        capture.lines(),
        vec!["[WARN   ] after install", "[INFO   ] from the log facade"]
    );
    assert_eq!(second_capture.contents(), "");
    assert!(std::ptr::eq(logging::global().unwrap(), installed));
}
