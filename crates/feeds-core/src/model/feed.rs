use serde::{Deserialize, Serialize};

use super::user::UserResponse;
use super::Timestamp;
use crate::value::CustomData;

crate::wire_enum! {
    /// Who may read a feed.
    pub enum FeedVisibility {
        Public = "public",
        Visible = "visible",
        Followers = "followers",
        Members = "members",
        Private = "private",
    }
}

crate::wire_enum! {
    pub enum FeedMemberStatus {
        Member = "member",
        Pending = "pending",
        Rejected = "rejected",
    }
}

/// A feed (`group_id:id`, exposed as `feed`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub id: String,
    pub group_id: String,
    /// Fully qualified feed id.
    pub feed: String,
    pub name: String,
    pub description: String,
    pub created_by: UserResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<FeedVisibility>,
    pub follower_count: i64,
    pub following_count: i64,
    pub member_count: i64,
    pub pin_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedMemberResponse {
    pub user: UserResponse,
    pub role: String,
    pub status: FeedMemberStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_accepted_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_rejected_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Unread/unseen counters of a notification feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationStatusResponse {
    pub unread: i64,
    pub unseen: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_read_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_activities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen_activities: Option<Vec<String>>,
}
