#![allow(clippy::unwrap_used, clippy::expect_used)]

use tracklint_core::errors::{ExError, ExErrorKind};
use tracklint_core::logging_facility::test_capture::init_test_capture;
use tracklint_core::{log_op_end, log_op_error, log_op_start};
use tracklint_core::{LintEngine, LintPolicy, MemoryRepo};
use tracklint_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use tracklint_core_types::RunId;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ExError::new(ExErrorKind::ExternalService).with_message("git died");
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field("err.code"), Some("ERR_EXTERNAL_SERVICE"));
}

#[test]
fn test_engine_logs_each_check_boundary() {
    let capture = init_test_capture();
    let repo = MemoryRepo::new()
        .with_file("Ci/Lint.sh", 0o100644, "echo\n")
        .with_file("ci/ok.sh", 0o100755, "#!/bin/sh\n");

    LintEngine::new(LintPolicy::default())
        .unwrap()
        .run(&repo, &RunId::new())
        .unwrap();

    for op in [
        "check_all_filenames",
        "check_source_filenames",
        "check_all_file_permissions",
        "check_shebang_file_permissions",
    ] {
        capture.assert_event_exists(op, EVENT_START);
        capture.assert_event_exists(op, EVENT_END);
    }

    let source_end = capture
        .events_for_op("check_source_filenames")
        .into_iter()
        .rev()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert!(source_end.field("violations").is_some());
}
