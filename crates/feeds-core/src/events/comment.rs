use serde::{Deserialize, Serialize};

use super::envelope::impl_feed_envelope;
use crate::model::{
    ActivityResponse, CommentResponse, FeedsReactionResponse, Timestamp, UserResponse,
};
use crate::value::CustomData;

/// `feeds.comment.{added,updated,deleted}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub comment: CommentResponse,
    /// The commented activity; not sent on every deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityResponse>,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `feeds.comment.reaction.{added,deleted}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReactionEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub activity: ActivityResponse,
    pub comment: CommentResponse,
    pub reaction: FeedsReactionResponse,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

impl_feed_envelope!(CommentEvent, CommentReactionEvent);
