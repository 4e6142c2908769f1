//! Event union: dispatch table coverage, round trips, envelope projection.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use serde_json::json;

use feeds_core::events::{self, FeedsEvent};
use feeds_core::model::{FollowStatus, ModerationAction};
use feeds_core::{FeedsError, JsonValue};

use fixtures::{minimal_event, FID, TS};

#[test]
fn every_registered_type_round_trips() {
    for ty in events::registered_event_types() {
        let input = minimal_event(ty);
        let event =
            FeedsEvent::from_value(input.clone()).unwrap_or_else(|e| panic!("{ty}: {e}"));
        assert_eq!(event.event_type(), *ty);

        let out = event.to_value().unwrap();
        assert_eq!(out, input, "{ty}");

        let text = event.encode().unwrap();
        assert_eq!(FeedsEvent::decode_str(&text).unwrap(), event, "{ty}");
    }
}

#[test]
fn discriminators_are_unique() {
    let all = events::registered_event_types();
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
    for ty in all {
        assert!(events::is_registered(ty), "{ty}");
        assert_eq!(events::canonical_event_type(ty), Some(*ty));
    }
    assert!(!events::is_registered("feed.updated "));
    assert!(!events::is_registered("Feed.Updated"));
}

#[test]
fn feed_updated_scenario() {
    let frame = minimal_event("feed.updated");
    let event = FeedsEvent::from_value(frame).unwrap();

    match &event {
        FeedsEvent::FeedUpdated(e) => {
            assert_eq!(e.fid, "user:42");
            assert_eq!(e.feed.feed, "user:42");
            assert!(e.custom.is_empty());
        }
        other => panic!("unexpected variant {}", other.event_type()),
    }

    let out = event.to_value().unwrap();
    assert_eq!(out["type"], json!("feed.updated"));
}

#[test]
fn unknown_event_type_is_a_hard_error() {
    let err = FeedsEvent::decode_str(r#"{"type":"totally.unknown.event"}"#).unwrap_err();
    assert_eq!(err, FeedsError::UnknownEventType("totally.unknown.event".into()));
    assert_eq!(err.code().as_str(), "UNKNOWN_EVENT_TYPE");
}

#[test]
fn both_follow_spellings_stay_distinct() {
    let legacy = FeedsEvent::from_value(minimal_event("follow.updated")).unwrap();
    let current = FeedsEvent::from_value(minimal_event("feeds.follow.updated")).unwrap();

    assert!(matches!(legacy, FeedsEvent::FollowUpdated(_)));
    assert!(matches!(current, FeedsEvent::FeedsFollowUpdated(_)));
    assert_ne!(legacy, current);

    assert_eq!(legacy.to_value().unwrap()["type"], json!("follow.updated"));
    assert_eq!(current.to_value().unwrap()["type"], json!("feeds.follow.updated"));
}

#[test]
fn both_bookmark_spellings_stay_distinct() {
    let legacy = FeedsEvent::from_value(minimal_event("bookmark.added")).unwrap();
    let current = FeedsEvent::from_value(minimal_event("feeds.bookmark.added")).unwrap();

    assert_eq!(legacy.event_type(), "bookmark.added");
    assert_eq!(current.event_type(), "feeds.bookmark.added");
    // Bookmarks are user-scoped.
    assert_eq!(legacy.fid(), None);
    assert_eq!(legacy.user().map(|u| u.id.as_str()), Some("user-42"));
}

#[test]
fn envelope_projection() {
    let added = FeedsEvent::from_value(minimal_event("feeds.activity.added")).unwrap();
    let env = added.envelope();
    assert_eq!(env.fid(), Some(FID));
    assert_eq!(env.created_at().to_rfc3339(), "2024-01-01T00:00:00+00:00");
    assert!(env.custom().is_some());
    assert_eq!(env.connection_id(), None);
    assert!(!added.is_transport());

    let ok = FeedsEvent::from_value(minimal_event("connection.ok")).unwrap();
    assert_eq!(ok.envelope().connection_id(), Some("conn-1"));
    assert_eq!(ok.fid(), None);
    assert!(ok.is_transport());

    let health = FeedsEvent::from_value(minimal_event("health.check")).unwrap();
    assert!(health.is_transport());
}

#[test]
fn custom_metadata_is_generic_json() {
    let mut frame = minimal_event("feed.deleted");
    frame["custom"] = json!({ "tier": "gold", "limits": { "posts": 10, "ratio": 0.25 } });

    let event = FeedsEvent::from_value(frame.clone()).unwrap();
    let custom = event.custom().unwrap();
    assert_eq!(custom["tier"], JsonValue::from("gold"));
    assert_eq!(custom["limits"].get("posts"), Some(&JsonValue::Integer(10)));
    assert_eq!(custom["limits"].get("ratio"), Some(&JsonValue::Float(0.25)));

    assert_eq!(event.to_value().unwrap(), frame);
}

#[test]
fn unknown_enum_values_decode_but_do_not_encode() {
    let mut frame = minimal_event("feeds.activity.added");
    frame["activity"]["moderation"] = json!({ "action": "future_action_xyz", "original_text": "hi" });
    frame["activity"]["visibility"] = json!("friends_of_friends");

    let event = FeedsEvent::from_value(frame).unwrap();
    let FeedsEvent::ActivityAdded(e) = &event else {
        panic!("unexpected variant {}", event.event_type());
    };
    assert_eq!(e.activity.moderation.as_ref().unwrap().action, ModerationAction::Unknown);

    let err = event.encode().unwrap_err();
    assert!(matches!(err, FeedsError::InvalidEnumState(_)), "{err}");
}

#[test]
fn known_enum_value_in_nested_payload() {
    let mut frame = minimal_event("feeds.follow.created");
    frame["follow"]["status"] = json!("pending");

    let event = FeedsEvent::from_value(frame.clone()).unwrap();
    let FeedsEvent::FeedsFollowCreated(e) = &event else {
        panic!("unexpected variant {}", event.event_type());
    };
    assert_eq!(e.follow.status, FollowStatus::Pending);
    assert_eq!(event.to_value().unwrap(), frame);
}

#[test]
fn encoded_type_follows_the_variant() {
    let FeedsEvent::FollowUpdated(payload) =
        FeedsEvent::from_value(minimal_event("follow.updated")).unwrap()
    else {
        panic!("expected follow.updated");
    };

    let rewrapped = FeedsEvent::FeedsFollowUpdated(payload);
    let out = rewrapped.to_value().unwrap();
    assert_eq!(out["type"], json!("feeds.follow.updated"));
    assert_eq!(out, minimal_event("feeds.follow.updated"));
}

#[test]
fn peek_reads_only_the_discriminator() {
    let raw = serde_json::to_vec(&minimal_event("feed.updated")).unwrap();
    assert_eq!(events::peek_event_type(&raw).unwrap(), "feed.updated");

    let err = events::peek_event_type(br#"{"type": 1}"#).unwrap_err();
    assert_eq!(err.code().as_str(), "MALFORMED_ENVELOPE");
    let err = events::peek_event_type(b"[]").unwrap_err();
    assert_eq!(err.code().as_str(), "MALFORMED_ENVELOPE");
}

#[test]
fn peek_agrees_with_decode_on_non_objects() {
    let non_objects: [&[u8]; 3] = [
        br#"["feed.updated"]"#,
        br#"[{"type":"feed.updated"}]"#,
        br#""feed.updated""#,
    ];
    for raw in non_objects {
        let peeked = events::peek_event_type(raw).unwrap_err();
        let decoded = FeedsEvent::decode(raw).unwrap_err();
        assert_eq!(peeked.code().as_str(), "MALFORMED_ENVELOPE");
        assert_eq!(decoded.code(), peeked.code());
    }

    let err = events::peek_event_type(br#"{"type":"feed.updated"} trailing"#).unwrap_err();
    assert_eq!(err.code().as_str(), "MALFORMED_ENVELOPE");
}

#[test]
fn nested_records_must_be_objects() {
    let mut frame = minimal_event("feed.created");
    frame["members"] = json!([["user-42", "member", "member", TS, TS]]);

    match FeedsEvent::from_value(frame).unwrap_err() {
        FeedsError::PayloadDecode { event_type, field, reason } => {
            assert_eq!(event_type, "feed.created");
            assert_eq!(field, "members[0]");
            assert!(reason.contains("invalid type: sequence"), "{reason}");
        }
        other => panic!("unexpected error {other}"),
    }

    let mut frame = minimal_event("connection.error");
    frame["error"] = json!([40, "token expired", 401, "0.01ms", "", []]);
    let err = FeedsEvent::from_value(frame).unwrap_err();
    assert_eq!(err.code().as_str(), "PAYLOAD_DECODE");
}

#[test]
fn payload_error_names_variant_and_field() {
    let mut frame = minimal_event("poll.vote_casted");
    frame["poll_vote"]["created_at"] = json!("yesterday");

    match FeedsEvent::from_value(frame).unwrap_err() {
        FeedsError::PayloadDecode { event_type, field, .. } => {
            assert_eq!(event_type, "poll.vote_casted");
            assert_eq!(field, "poll_vote.created_at");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn decoding_is_safe_across_threads() {
    let frames: Vec<Vec<u8>> = events::registered_event_types()
        .iter()
        .map(|ty| serde_json::to_vec(&minimal_event(ty)).unwrap())
        .collect();

    std::thread::scope(|s| {
        for chunk in frames.chunks(8) {
            s.spawn(move || {
                for raw in chunk {
                    let event = FeedsEvent::decode(raw).unwrap();
                    assert!(events::is_registered(event.event_type()));
                }
            });
        }
    });
}

#[test]
fn typed_fields_reencode_in_canonical_form() {
    let mut frame = minimal_event("feeds.activity.added");
    frame["created_at"] = json!("2024-01-01T02:00:00+02:00");
    frame["activity"]["score"] = json!(2);
    frame["custom"] = json!({ "n": 2, "at": "2024-01-01T02:00:00+02:00" });

    let out = FeedsEvent::from_value(frame).unwrap().to_value().unwrap();
    assert_eq!(out["created_at"], json!(TS));
    assert_eq!(out["activity"]["score"], json!(2.0));
    // Free-form data is carried verbatim.
    assert_eq!(out["custom"], json!({ "n": 2, "at": "2024-01-01T02:00:00+02:00" }));

    // Canonical input is a fixed point.
    assert_eq!(FeedsEvent::from_value(out.clone()).unwrap().to_value().unwrap(), out);
}
