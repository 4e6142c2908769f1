//! Event envelope vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use feeds_core::events::FeedsEvent;
use feeds_core::FeedsError;

mod vector_loader;
use vector_loader::load;

fn moderation_action(event: &FeedsEvent) -> Option<String> {
    match event {
        FeedsEvent::ActivityAdded(e) => e
            .activity
            .moderation
            .as_ref()
            .map(|m| m.action.to_string()),
        _ => None,
    }
}

#[test]
fn event_vectors() {
    let files = [
        "feed_updated.json",
        "unknown_type.json",
        "not_object.json",
        "missing_type.json",
        "type_not_string.json",
        "invalid_json.json",
        "missing_fid.json",
        "nested_type_mismatch.json",
        "nested_missing_field.json",
        "moderation_bounce_flag.json",
        "moderation_future_action.json",
        "extra_fields_ignored.json",
        "custom_metadata.json",
        "connection_ok.json",
        "connection_error.json",
        "enum_null.json",
        "nested_array_struct.json",
        "nested_array_user.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.frame.bytes();
        let res = FeedsEvent::decode(&raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            if let Some(field) = err.field {
                match e {
                    FeedsError::PayloadDecode { field: got, .. } => {
                        assert_eq!(got, field, "vector={}", v.description)
                    }
                    other => panic!("vector={}: unexpected error {other}", v.description),
                }
            }
            continue;
        }

        let event = res.unwrap_or_else(|e| panic!("vector={}: {e}", v.description));
        let ex = v.expect.expect("missing expect block");

        assert_eq!(event.event_type(), ex["type"].as_str().unwrap(), "vector={}", v.description);
        if let Some(fid) = ex.get("fid") {
            assert_eq!(event.fid(), fid.as_str(), "vector={}", v.description);
        }
        if let Some(action) = ex.get("moderation_action") {
            assert_eq!(moderation_action(&event).as_deref(), action.as_str(), "vector={}", v.description);
        }

        match ex.get("encode_error") {
            Some(code) => {
                let e = event.encode().expect_err("expected encode error");
                assert_eq!(e.code().as_str(), code.as_str().unwrap(), "vector={}", v.description);
            }
            None => {
                let out = event.to_value().expect("expected encodable event");
                assert_eq!(out["type"], ex["type"], "vector={}", v.description);
                assert_eq!(FeedsEvent::from_value(out).unwrap(), event, "vector={}", v.description);
            }
        }
    }
}

#[test]
fn unknown_type_carries_the_raw_string() {
    let v = load("unknown_type.json");
    let err = FeedsEvent::decode(&v.frame.bytes()).unwrap_err();
    assert_eq!(err, FeedsError::UnknownEventType("totally.unknown.event".into()));
}
