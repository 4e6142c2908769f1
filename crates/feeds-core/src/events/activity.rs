use serde::{Deserialize, Serialize};

use super::envelope::impl_feed_envelope;
use crate::model::{ActivityResponse, FeedsReactionResponse, Timestamp, UserResponse};
use crate::value::CustomData;

/// `feeds.activity.{added,updated,deleted,removed_from_feed}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub activity: ActivityResponse,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `feeds.activity.reaction.{added,deleted}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityReactionEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub activity: ActivityResponse,
    pub reaction: FeedsReactionResponse,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

impl_feed_envelope!(ActivityEvent, ActivityReactionEvent);
