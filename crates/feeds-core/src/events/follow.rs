use serde::{Deserialize, Serialize};

use super::envelope::impl_feed_envelope;
use crate::model::{FollowResponse, Timestamp, UserResponse};
use crate::value::CustomData;

/// `follow.{added,updated,removed}` and `feeds.follow.{created,updated,deleted}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowEvent {
    pub created_at: Timestamp,
    /// Source feed of the follow.
    pub fid: String,
    pub follow: FollowResponse,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

impl_feed_envelope!(FollowEvent);
