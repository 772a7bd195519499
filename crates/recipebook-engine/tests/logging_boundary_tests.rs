//! Boundary logging tests
//!
//! Engine commands own lifecycle logging: each emits `start` then `end` or
//! `end_error`, inside a span carrying the command's request id.

use recipebook_core::logging_facility::init_test_capture;
use recipebook_engine::{apply_engine_command, EngineCommand};
use recipebook_store::RecipeStore;

#[test]
fn test_register_emits_start_and_end() {
    let capture = init_test_capture();
    let store = RecipeStore::open_in_memory().unwrap();

    apply_engine_command(
        EngineCommand::RegisterIdentity {
            name: "Fati".to_string(),
        },
        &store,
    )
    .unwrap();

    capture.assert_event_exists("identity_register", "start");
    capture.assert_event_exists("identity_register", "end");
}

#[test]
fn test_failed_add_emits_end_error_with_code() {
    let capture = init_test_capture();
    let store = RecipeStore::open_in_memory().unwrap();

    let err = apply_engine_command(
        EngineCommand::AddRecipe {
            title: "Tea".to_string(),
            note: "Steep".to_string(),
            image: None,
        },
        &store,
    )
    .unwrap_err();
    let request_id = err.request_id().unwrap().to_string();

    // Other tests share the capture; pick this command's events by request id
    let events: Vec<_> = capture
        .events_for_op("recipe_add")
        .into_iter()
        .filter(|e| e.request_id() == Some(request_id.as_str()))
        .collect();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some("start"));
    assert_eq!(events[1].event.as_deref(), Some("end_error"));
    assert_eq!(events[1].err_code(), Some("ERR_IDENTITY_MISSING"));
}

#[test]
fn test_store_debug_events_share_command_request_id() {
    let capture = init_test_capture();
    let store = RecipeStore::open_in_memory().unwrap();
    store.create_identity("Fati").unwrap();

    apply_engine_command(
        EngineCommand::AddRecipe {
            title: "Bread".to_string(),
            note: "Knead".to_string(),
            image: Some(vec![1, 2, 3, 4]),
        },
        &store,
    )
    .unwrap();

    let end = capture
        .events_for_op("recipe_add")
        .into_iter()
        .rfind(|e| e.event.as_deref() == Some("end"))
        .expect("recipe_add end event");
    let request_id = end.request_id().expect("request id on span").to_string();

    let store_events = capture.count_events(|e| {
        e.fields.get("message").map(String::as_str) == Some("recipe row inserted")
            && e.request_id() == Some(request_id.as_str())
    });
    assert_eq!(store_events, 1);
}
