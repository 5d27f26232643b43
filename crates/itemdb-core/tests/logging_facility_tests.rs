#![allow(clippy::unwrap_used, clippy::expect_used)]

use itemdb_core::errors::{ExError, ExErrorKind, ItemDbError};
use itemdb_core::logging_facility::test_capture::init_test_capture;
use itemdb_core::{log_op_end, log_op_error, log_op_start};
use itemdb_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert!(start_events > 0, "Should have captured a start event");
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(
        events[0].fields.get(FIELD_DURATION_MS),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_storage_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ItemDbError::Storage {
        op: "item_create".to_string(),
        message: "database is locked".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(
        events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_PERSISTENCE".to_string())
    );
    assert_eq!(
        events[0].fields.get(FIELD_ERR_KIND),
        Some(&"Persistence".to_string())
    );
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_ex_unique_4";

    let err = ExError::new(ExErrorKind::Io).with_message("read-only file system");
    log_op_error!(op_name, err, duration_ms = 1, item_id = 5_i64);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields.get(FIELD_ERR_CODE), Some(&"ERR_IO".to_string()));
    assert_eq!(events[0].fields.get(FIELD_ERR_KIND), Some(&"Io".to_string()));
    assert_eq!(events[0].item_id(), Some(5));
}

#[test]
fn test_single_start_and_end_per_operation() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_5";

    log_op_start!(op_name, item_id = 1_i64);
    log_op_end!(op_name, duration_ms = 3);

    let events = capture.events_for_op(op_name);
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .count();

    assert_eq!(starts, 1);
    assert_eq!(ends, 1);
    assert_eq!(events[0].item_id(), Some(1));
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_6";

    log_op_start!(op_name, item_id = 9_i64, name = "Pen");

    let start_event = capture
        .events_for_op(op_name)
        .into_iter()
        .next()
        .expect("Should have start event");

    assert_eq!(start_event.fields.get("item_id"), Some(&"9".to_string()));
    assert_eq!(start_event.fields.get("name"), Some(&"Pen".to_string()));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_assert_event_exists_fails_for_unknown_op() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}
