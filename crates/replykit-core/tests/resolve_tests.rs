// Rust guideline compliant 2026-10-12

//! Unit tests for argument resolution.
//!
//! These tests validate the classification rules for runtime argument lists
//! and the errors raised for malformed calls.

use replykit_core::{resolve, ArgumentError, Entry, EntryKind, Resolution, ResponseNode};
use serde_json::json;

fn single(kind: EntryKind, args: &[serde_json::Value]) -> Entry {
    match resolve(kind, args).expect("resolvable arguments") {
        Resolution::Single(entry) => entry,
        other => panic!("expected a single entry, got {other:?}"),
    }
}

#[test]
fn test_zero_arguments() {
    assert_eq!(
        resolve(EntryKind::Error, &[]),
        Err(ArgumentError::Empty {
            kind: EntryKind::Error
        })
    );
    assert_eq!(resolve(EntryKind::Info, &[]), Ok(Resolution::Empty));
}

#[test]
fn test_single_string_is_description() {
    let entry = single(EntryKind::Error, &[json!("an error")]);
    assert_eq!(entry, Entry::new().description("an error"));
}

#[test]
fn test_single_integer_is_status() {
    let entry = single(EntryKind::Error, &[json!(404)]);
    assert_eq!(entry, Entry::new().status(404));
}

#[test]
fn test_single_options_record_reads_fields_by_name() {
    let entry = single(
        EntryKind::Error,
        &[json!({
            "status": 422,
            "code": "VALIDATION",
            "description": "name is required",
            "metadata": { "field": "name" },
            "ignored": true
        })],
    );
    assert_eq!(
        entry,
        Entry::new()
            .status(422)
            .code("VALIDATION")
            .description("name is required")
            .metadata(json!({ "field": "name" }))
    );
}

#[test]
fn test_options_record_null_fields_are_absent() {
    let entry = single(
        EntryKind::Info,
        &[json!({ "status": null, "code": null, "description": "note" })],
    );
    assert_eq!(entry, Entry::new().description("note"));
}

#[test]
fn test_options_record_wrong_field_type() {
    let err = resolve(EntryKind::Error, &[json!({ "code": 12 })]).expect_err("bad field");
    assert_eq!(
        err,
        ArgumentError::InvalidField {
            kind: EntryKind::Error,
            position: 0,
            field: "code",
            value: "12".to_string(),
        }
    );

    let err = resolve(EntryKind::Error, &[json!({ "status": "400" })]).expect_err("bad status");
    assert!(matches!(
        err,
        ArgumentError::InvalidField { field: "status", .. }
    ));
}

#[test]
fn test_single_array_is_batch() {
    let resolution = resolve(
        EntryKind::Error,
        &[json!(["first", { "code": "C2", "description": "second" }, ["third"]])],
    )
    .expect("batch");
    assert_eq!(
        resolution,
        Resolution::Batch(vec![
            Entry::new().description("first"),
            Entry::new().code("C2").description("second"),
            Entry::new().description("third"),
        ])
    );
}

#[test]
fn test_two_strings_are_code_then_description() {
    let entry = single(EntryKind::Error, &[json!(400), json!("C1"), json!("d1")]);
    assert_eq!(entry, Entry::new().status(400).code("C1").description("d1"));

    let entry = single(EntryKind::Info, &[json!("INFO_01"), json!("an informative description")]);
    assert_eq!(
        entry,
        Entry::new()
            .code("INFO_01")
            .description("an informative description")
    );
}

#[test]
fn test_one_string_with_status_is_description() {
    let entry = single(EntryKind::Error, &[json!(400), json!("an error")]);
    assert_eq!(entry, Entry::new().status(400).description("an error"));
}

#[test]
fn test_integer_position_does_not_matter() {
    let entry = single(EntryKind::Error, &[json!("C1"), json!("d1"), json!(418)]);
    assert_eq!(entry, Entry::new().status(418).code("C1").description("d1"));
}

#[test]
fn test_third_string_is_rejected() {
    let err = resolve(
        EntryKind::Error,
        &[json!("desc"), json!("code"), json!("extra")],
    )
    .expect_err("three strings");
    assert_eq!(
        err,
        ArgumentError::ExtraString {
            kind: EntryKind::Error,
            position: 2,
            value: "extra".to_string(),
        }
    );
    assert_eq!(err.position(), Some(2));
    assert!(err.to_string().contains("extra"));
}

#[test]
fn test_first_object_is_metadata() {
    let entry = single(
        EntryKind::Info,
        &[json!("an info description"), json!({ "app": "myApp" })],
    );
    assert_eq!(
        entry,
        Entry::new()
            .description("an info description")
            .metadata(json!({ "app": "myApp" }))
    );
}

#[test]
fn test_all_objects_is_batch() {
    let resolution = resolve(
        EntryKind::Error,
        &[
            json!({ "status": 400, "description": "a" }),
            json!({ "status": 401, "description": "b" }),
        ],
    )
    .expect("batch");
    assert_eq!(
        resolution,
        Resolution::Batch(vec![
            Entry::new().status(400).description("a"),
            Entry::new().status(401).description("b"),
        ])
    );
}

#[test]
fn test_second_object_in_mixed_list_is_rejected() {
    let err = resolve(
        EntryKind::Error,
        &[json!("desc"), json!({ "a": 1 }), json!({ "b": 2 })],
    )
    .expect_err("mixed objects");
    assert!(matches!(
        err,
        ArgumentError::ExtraRecord { position: 2, .. }
    ));
}

#[test]
fn test_unsupported_arguments() {
    for bad in [json!(null), json!(true), json!(1.5)] {
        let err = resolve(EntryKind::Error, &[bad.clone()]).expect_err("unsupported");
        assert!(
            matches!(err, ArgumentError::Unsupported { position: 0, .. }),
            "expected unsupported for {bad}, got {err:?}"
        );
    }

    let err = resolve(EntryKind::Error, &[json!("desc"), json!(["nested"])])
        .expect_err("array among several arguments");
    assert!(matches!(
        err,
        ArgumentError::Unsupported { position: 1, .. }
    ));
}

#[test]
fn test_out_of_range_status() {
    let err = resolve(EntryKind::Error, &[json!(42), json!("x")]).expect_err("status");
    assert!(matches!(
        err,
        ArgumentError::InvalidStatus { position: 0, .. }
    ));
    let err = resolve(EntryKind::Error, &[json!(-1)]).expect_err("negative status");
    assert!(matches!(err, ArgumentError::InvalidStatus { .. }));
}

#[test]
fn test_try_error_applies_rules_and_defaults() {
    let mut response = ResponseNode::new();
    let registered = response
        .try_error(&[json!(400), json!("C1"), json!("d1")])
        .expect("valid")
        .expect("single entry");
    assert_eq!(registered.code(), Some("C1"));

    response
        .try_error(&[json!(401), json!("C1"), json!("d2")])
        .expect("valid");
    response.try_error(&[json!("no status")]).expect("valid");

    assert_eq!(response.errors().len(), 2);
    assert_eq!(response.errors()[1].status(), Some(500));
    assert_eq!(response.status_code(), 500);
}

#[test]
fn test_try_error_batch_returns_none() {
    let mut response = ResponseNode::new();
    let registered = response
        .try_error(&[json!(["a", "b", "a"])])
        .expect("valid");
    assert!(registered.is_none());
    assert_eq!(response.errors().len(), 2);
}

#[test]
fn test_try_error_registers_nothing_on_failure() {
    let mut response = ResponseNode::new();
    let result = response.try_error(&[json!("a"), json!("b"), json!("c")]);
    assert!(result.is_err());
    assert!(response.is_empty());
}

#[test]
fn test_try_information_zero_arguments_is_noop() {
    let mut response = ResponseNode::new();
    let registered = response.try_information(&[]).expect("valid");
    assert!(registered.is_none());
    assert!(!response.has_info());
}

#[test]
fn test_try_information_uses_same_rules() {
    let mut response = ResponseNode::new();
    response
        .try_information(&[json!(202), json!("QUEUED"), json!("processing later")])
        .expect("valid");
    let info = &response.info()[0];
    assert_eq!(info.status(), Some(202));
    assert_eq!(info.code(), Some("QUEUED"));
    assert_eq!(response.status_code(), 200);
}

#[test]
fn test_try_information_nesting_through_handle() {
    let mut response = ResponseNode::new();
    if let Some(parent) = response
        .try_information(&[json!("parent note")])
        .expect("valid")
    {
        parent
            .try_information(&[json!("child note")])
            .expect("valid");
    }
    assert_eq!(response.info()[0].info()[0].description(), Some("child note"));
}
