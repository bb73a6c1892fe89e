#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::tanaka;
use u25match_core::errors::{ExErrorKind, ProfileError};
use u25match_core::logging_facility::test_capture::init_test_capture;
use u25match_core::{log_op_end, log_op_error, log_op_start};
use u25match_core::{MockProfileService, ProfileEditor};
use u25match_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, uid = "u1");

    let event = capture.find(op_name, EVENT_START).expect("start event");
    assert_eq!(event.field("uid"), Some("u1"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ProfileError::ProfileNotFound {
        uid: "u1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let event = capture.find(op_name, EVENT_END_ERROR).expect("error event");
    assert_eq!(event.field("err.code"), Some("ERR_PROFILE_NOT_FOUND"));
    assert_eq!(event.level, tracing::Level::ERROR);
}

// ---------------------------------------------------------------------------
// Save pipeline events
// ---------------------------------------------------------------------------

fn save_events_for(capture: &u25match_core::logging_facility::TestCapture, uid: &str) -> Vec<String> {
    capture
        .events_for_op("save_profile")
        .into_iter()
        .filter(|e| e.field("uid") == Some(uid))
        .filter_map(|e| e.event)
        .collect()
}

#[test]
fn test_successful_save_logs_start_and_end() {
    let capture = init_test_capture();
    let uid = "log-save-ok";
    let service = MockProfileService::new().with_profile(uid, tanaka());
    let mut editor = ProfileEditor::new(tanaka());
    editor.set_age(26);

    editor.save(uid, &service).unwrap();

    assert_eq!(save_events_for(&capture, uid), vec![EVENT_START, EVENT_END]);
    let start = capture
        .events_for_op("save_profile")
        .into_iter()
        .find(|e| e.field("uid") == Some(uid))
        .unwrap();
    assert_eq!(start.field("service_mode"), Some("mock"));
    assert!(start.field("changed_fields").unwrap().contains("age"));
}

#[test]
fn test_failed_save_logs_error_code() {
    let capture = init_test_capture();
    let uid = "log-save-fail";
    let service = MockProfileService::new().with_profile(uid, tanaka());
    service.fail_next_update(ExErrorKind::Persistence).unwrap();
    let mut editor = ProfileEditor::new(tanaka());
    editor.set_bio("new");

    assert!(editor.save(uid, &service).is_err());

    assert_eq!(
        save_events_for(&capture, uid),
        vec![EVENT_START, EVENT_END_ERROR]
    );
    let error = capture
        .events_for_op("save_profile")
        .into_iter()
        .find(|e| e.field("uid") == Some(uid) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .unwrap();
    assert_eq!(error.field("err.code"), Some("ERR_PERSISTENCE"));
}

#[test]
fn test_no_change_save_logs_nothing() {
    let capture = init_test_capture();
    let uid = "log-save-noop";
    let service = MockProfileService::new().with_profile(uid, tanaka());
    let mut editor = ProfileEditor::new(tanaka());

    editor.save(uid, &service).unwrap();

    assert!(save_events_for(&capture, uid).is_empty());
}
