//! Realtime event envelope: `type`-discriminated decoding and encoding.
//!
//! Decoding is table driven:
//! 1. parse the frame and read the top-level `type` string
//!    (`MalformedEnvelope` if the frame is not an object or has no string `type`);
//! 2. look the string up in the `DECODERS` table, built once from the `feeds_events!`
//!    list below;
//! 3. decode the whole object as that variant's payload
//!    (`PayloadDecode` naming the field path on mismatch). Nested records
//!    only decode from JSON objects, never from arrays of field values.
//!
//! An unregistered `type` is a hard `UnknownEventType` error: unlike enum
//! fields there is no payload shape to fall back to. Whether that is fatal is
//! the caller's decision.
//!
//! Encoding writes the payload fields and sets `type` to the variant's fixed
//! literal, so `encode(decode(x))` reproduces `x` for every frame already in
//! canonical form (see [`crate::model`] for the normalised fields).
//!
//! Adding an event type is one line in `feeds_events!`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FeedsError, Result};
use crate::model::{Timestamp, UserResponse};
use crate::protocol::enums::INVALID_ENUM_STATE_MARKER;
use crate::protocol::strict::ObjectsOnly;
use crate::value::CustomData;

pub mod activity;
pub mod bookmark;
pub mod comment;
pub mod connection;
mod envelope;
pub mod feed;
pub mod follow;
pub mod poll;

pub use activity::{ActivityEvent, ActivityReactionEvent};
pub use bookmark::BookmarkEvent;
pub use comment::{CommentEvent, CommentReactionEvent};
pub use connection::{ConnectedEvent, ConnectionErrorEvent, HealthCheckEvent, UserUpdatedEvent};
pub use envelope::EventEnvelope;
pub use feed::{
    FeedCreatedEvent, FeedDeletedEvent, FeedMemberEvent, FeedMemberRemovedEvent, FeedUpdatedEvent,
    NotificationFeedUpdatedEvent,
};
pub use follow::FollowEvent;
pub use poll::{PollEvent, PollVoteEvent};

/// Discriminator field name.
pub const TYPE_FIELD: &str = "type";

type DecodeFn = fn(Value) -> Result<FeedsEvent>;

macro_rules! feeds_events {
    ( $( $(#[$meta:meta])* $wire:literal => $variant:ident($payload:ty), )+ ) => {
        /// One decoded server event.
        #[derive(Debug, Clone, PartialEq)]
        pub enum FeedsEvent {
            $( $(#[$meta])* #[doc = concat!("`", $wire, "`")] $variant($payload), )+
        }

        impl FeedsEvent {
            /// The discriminator this variant encodes under.
            pub fn event_type(&self) -> &'static str {
                match self {
                    $( FeedsEvent::$variant(_) => $wire, )+
                }
            }

            /// Shared envelope fields, without matching on the variant.
            pub fn envelope(&self) -> &dyn EventEnvelope {
                match self {
                    $( FeedsEvent::$variant(e) => e as &dyn EventEnvelope, )+
                }
            }

            fn payload_value(&self) -> serde_json::Result<Value> {
                match self {
                    $( FeedsEvent::$variant(e) => serde_json::to_value(e), )+
                }
            }
        }

        /// Every registered discriminator, in declaration order.
        pub const EVENT_TYPES: &[&str] = &[ $( $wire, )+ ];

        /// Discriminator -> payload decoder. Read-only once built.
        static DECODERS: Lazy<HashMap<&'static str, DecodeFn>> = Lazy::new(|| {
            let mut table: HashMap<&'static str, DecodeFn> = HashMap::with_capacity(EVENT_TYPES.len());
            $(
                table.insert($wire, |value: Value| {
                    decode_payload::<$payload>($wire, value).map(FeedsEvent::$variant)
                });
            )+
            table
        });
    };
}

feeds_events! {
    "feeds.activity.added" => ActivityAdded(ActivityEvent),
    "feeds.activity.updated" => ActivityUpdated(ActivityEvent),
    "feeds.activity.deleted" => ActivityDeleted(ActivityEvent),
    "feeds.activity.removed_from_feed" => ActivityRemovedFromFeed(ActivityEvent),
    "feeds.activity.reaction.added" => ActivityReactionAdded(ActivityReactionEvent),
    "feeds.activity.reaction.deleted" => ActivityReactionDeleted(ActivityReactionEvent),

    "feeds.comment.added" => CommentAdded(CommentEvent),
    "feeds.comment.updated" => CommentUpdated(CommentEvent),
    "feeds.comment.deleted" => CommentDeleted(CommentEvent),
    "feeds.comment.reaction.added" => CommentReactionAdded(CommentReactionEvent),
    "feeds.comment.reaction.deleted" => CommentReactionDeleted(CommentReactionEvent),

    "feed.created" => FeedCreated(FeedCreatedEvent),
    "feed.updated" => FeedUpdated(FeedUpdatedEvent),
    "feed.deleted" => FeedDeleted(FeedDeletedEvent),
    "feeds.feed_member.added" => FeedMemberAdded(FeedMemberEvent),
    "feeds.feed_member.updated" => FeedMemberUpdated(FeedMemberEvent),
    "feeds.feed_member.removed" => FeedMemberRemoved(FeedMemberRemovedEvent),
    "feeds.notification_feed.updated" => NotificationFeedUpdated(NotificationFeedUpdatedEvent),

    // Both bookmark spellings are live; they stay distinct variants so each
    // re-encodes under the name it arrived with.
    "bookmark.added" => BookmarkAdded(BookmarkEvent),
    "bookmark.updated" => BookmarkUpdated(BookmarkEvent),
    "bookmark.deleted" => BookmarkDeleted(BookmarkEvent),
    "feeds.bookmark.added" => FeedsBookmarkAdded(BookmarkEvent),
    "feeds.bookmark.updated" => FeedsBookmarkUpdated(BookmarkEvent),
    "feeds.bookmark.deleted" => FeedsBookmarkDeleted(BookmarkEvent),

    // Same for follows.
    "follow.added" => FollowAdded(FollowEvent),
    "follow.updated" => FollowUpdated(FollowEvent),
    "follow.removed" => FollowRemoved(FollowEvent),
    "feeds.follow.created" => FeedsFollowCreated(FollowEvent),
    "feeds.follow.updated" => FeedsFollowUpdated(FollowEvent),
    "feeds.follow.deleted" => FeedsFollowDeleted(FollowEvent),

    "poll.vote_casted" => PollVoteCasted(PollVoteEvent),
    "poll.vote_changed" => PollVoteChanged(PollVoteEvent),
    "poll.vote_removed" => PollVoteRemoved(PollVoteEvent),
    "poll.closed" => PollClosed(PollEvent),
    "poll.updated" => PollUpdated(PollEvent),
    "poll.deleted" => PollDeleted(PollEvent),

    "user.updated" => UserUpdated(UserUpdatedEvent),

    "connection.ok" => ConnectionOk(ConnectedEvent),
    "health.check" => HealthCheck(HealthCheckEvent),
    "connection.error" => ConnectionError(ConnectionErrorEvent),
}

impl FeedsEvent {
    /// Decode one frame (UTF-8 JSON bytes).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| FeedsError::MalformedEnvelope(format!("invalid json: {e}")))?;
        Self::from_value(value)
    }

    pub fn decode_str(s: &str) -> Result<Self> {
        Self::decode(s.as_bytes())
    }

    /// Decode an already parsed frame.
    pub fn from_value(value: Value) -> Result<Self> {
        let event_type = envelope_type(&value)?;
        let decode = match DECODERS.get(event_type) {
            Some(f) => *f,
            None => return Err(FeedsError::UnknownEventType(event_type.to_owned())),
        };
        decode(value)
    }

    /// Encode to a JSON object with `type` set to [`Self::event_type`].
    ///
    /// Fails with `InvalidEnumState` if a payload enum holds `Unknown`.
    pub fn to_value(&self) -> Result<Value> {
        let mut value = self.payload_value().map_err(encode_error)?;
        let obj = value.as_object_mut().ok_or_else(|| {
            FeedsError::Internal(format!("{} payload is not an object", self.event_type()))
        })?;
        obj.insert(
            TYPE_FIELD.to_owned(),
            Value::String(self.event_type().to_owned()),
        );
        Ok(value)
    }

    /// Encode to a JSON text frame.
    pub fn encode(&self) -> Result<String> {
        let value = self.to_value()?;
        serde_json::to_string(&value).map_err(|e| FeedsError::Encode(e.to_string()))
    }

    /// `connection.ok`, `health.check`, `connection.error`.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FeedsEvent::ConnectionOk(_) | FeedsEvent::HealthCheck(_) | FeedsEvent::ConnectionError(_)
        )
    }

    pub fn created_at(&self) -> Timestamp {
        self.envelope().created_at()
    }

    pub fn fid(&self) -> Option<&str> {
        self.envelope().fid()
    }

    pub fn custom(&self) -> Option<&CustomData> {
        self.envelope().custom()
    }

    pub fn user(&self) -> Option<&UserResponse> {
        self.envelope().user()
    }
}

/// Every registered discriminator.
pub fn registered_event_types() -> &'static [&'static str] {
    EVENT_TYPES
}

pub fn is_registered(event_type: &str) -> bool {
    DECODERS.contains_key(event_type)
}

/// The table's own `'static` copy of `event_type`, if registered.
pub fn canonical_event_type(event_type: &str) -> Option<&'static str> {
    DECODERS.get_key_value(event_type).map(|(k, _)| *k)
}

/// Read the discriminator without decoding the payload.
pub fn peek_event_type(bytes: &[u8]) -> Result<String> {
    #[derive(Deserialize)]
    struct Head {
        #[serde(rename = "type")]
        event_type: Value,
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let head = Head::deserialize(ObjectsOnly(&mut de))
        .and_then(|head| de.end().map(|()| head))
        .map_err(|e| FeedsError::MalformedEnvelope(format!("invalid envelope: {e}")))?;
    match head.event_type {
        Value::String(s) => Ok(s),
        other => Err(FeedsError::MalformedEnvelope(format!(
            "`type` must be a string, got {}",
            json_kind(&other)
        ))),
    }
}

fn envelope_type(value: &Value) -> Result<&str> {
    let obj = value.as_object().ok_or_else(|| {
        FeedsError::MalformedEnvelope(format!("expected a JSON object, got {}", json_kind(value)))
    })?;
    match obj.get(TYPE_FIELD) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(FeedsError::MalformedEnvelope(format!(
            "`type` must be a string, got {}",
            json_kind(other)
        ))),
        None => Err(FeedsError::MalformedEnvelope("missing `type`".into())),
    }
}

fn decode_payload<T: DeserializeOwned>(event_type: &'static str, value: Value) -> Result<T> {
    serde_path_to_error::deserialize(ObjectsOnly(value)).map_err(|e| {
        let reason = e.inner().to_string();
        let field = field_path(&e.path().to_string(), &reason);
        tracing::debug!(event_type, %field, %reason, "event payload rejected");
        FeedsError::PayloadDecode {
            event_type: event_type.to_owned(),
            field,
            reason,
        }
    })
}

/// serde reports a missing field at the enclosing struct's path; append the
/// field name so the path points at the field itself.
fn field_path(path: &str, reason: &str) -> String {
    let missing = reason
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next());
    match (path, missing) {
        (".", Some(name)) => name.to_owned(),
        (p, Some(name)) => format!("{p}.{name}"),
        (p, None) => p.to_owned(),
    }
}

fn encode_error(e: serde_json::Error) -> FeedsError {
    let msg = e.to_string();
    match msg.strip_prefix(INVALID_ENUM_STATE_MARKER) {
        Some(name) => FeedsError::InvalidEnumState(name.to_owned()),
        None => FeedsError::Encode(msg),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
