//! Outbound connect request.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pretty_assertions::assert_eq;

use feeds_core::protocol::connect::ConnectRequest;

#[test]
fn encode_decode_round_trip() {
    let req = ConnectRequest::new("tok", "user-42").with_products(["feeds"]);
    let raw = req.encode().unwrap();
    assert_eq!(raw, r#"{"token":"tok","user_details":{"id":"user-42"},"products":["feeds"]}"#);
    assert_eq!(ConnectRequest::decode(&raw).unwrap(), req);
}

#[test]
fn empty_credentials_are_rejected() {
    let err = ConnectRequest::new("", "user-42").encode().unwrap_err();
    assert_eq!(err.code().as_str(), "MALFORMED_ENVELOPE");
    let err = ConnectRequest::new("tok", "").encode().unwrap_err();
    assert_eq!(err.code().as_str(), "MALFORMED_ENVELOPE");
}

#[test]
fn records_must_be_objects() {
    for raw in [
        r#"["tok", {"id": "user-42"}, null]"#,
        r#"{"token": "tok", "user_details": ["user-42"]}"#,
        r#"{"token": "tok", "user_details": {"id": "user-42"}} {}"#,
    ] {
        let err = ConnectRequest::decode(raw).unwrap_err();
        assert_eq!(err.code().as_str(), "MALFORMED_ENVELOPE", "{raw}");
    }
}
