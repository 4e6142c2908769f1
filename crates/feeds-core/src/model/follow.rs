use serde::{Deserialize, Serialize};

use super::feed::FeedResponse;
use super::Timestamp;
use crate::value::CustomData;

crate::wire_enum! {
    pub enum FollowStatus {
        Accepted = "accepted",
        /// Waiting for the target feed owner to approve.
        Pending = "pending",
        Rejected = "rejected",
    }
}

crate::wire_enum! {
    /// Whether the follower is notified about new activities.
    pub enum PushPreference {
        All = "all",
        None = "none",
    }
}

/// A follow relationship between two feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowResponse {
    pub source_feed: FeedResponse,
    pub target_feed: FeedResponse,
    pub status: FollowStatus,
    pub push_preference: PushPreference,
    pub follower_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_accepted_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_rejected_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
