//! Payload records nested inside realtime events.
//!
//! These mirror the backend's response schema only as far as the event
//! decoder needs it. Unknown fields are ignored on decode; optional fields
//! that are absent stay absent on encode.
//!
//! Typed fields re-encode in canonical form:
//! - timestamps are converted to UTC and written with a `Z` suffix
//!   (`2024-01-01T02:00:00+02:00` becomes `2024-01-01T00:00:00Z`);
//! - `f64` fields such as `score` are written as floats (`2` becomes `2.0`).
//!
//! A record already in that form re-encodes to the same JSON. Free-form
//! `custom` data is carried as [`crate::JsonValue`] and is never normalised.

use chrono::{DateTime, Utc};

pub mod activity;
pub mod api_error;
pub mod bookmark;
pub mod comment;
pub mod feed;
pub mod follow;
pub mod moderation;
pub mod poll;
pub mod user;

/// RFC 3339 timestamp as sent by the backend.
pub type Timestamp = DateTime<Utc>;

pub use activity::{ActivityLocation, ActivityResponse, ActivityVisibility, FeedsReactionResponse};
pub use api_error::ApiError;
pub use bookmark::{BookmarkFolderResponse, BookmarkResponse};
pub use comment::CommentResponse;
pub use feed::{
    FeedMemberResponse, FeedMemberStatus, FeedResponse, FeedVisibility, NotificationStatusResponse,
};
pub use follow::{FollowResponse, FollowStatus, PushPreference};
pub use moderation::{ModerationAction, ModerationV2Response};
pub use poll::{PollOptionResponseData, PollResponseData, PollVoteResponseData, VotingVisibility};
pub use user::{OwnUserResponse, PushLevel, PushPreferences, UserResponse};
