use serde::{Deserialize, Serialize};

use super::moderation::ModerationV2Response;
use super::user::UserResponse;
use super::Timestamp;
use crate::value::CustomData;

/// A comment on an activity (or a reply when `parent_id` is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub object_id: String,
    pub object_type: String,
    pub user: UserResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub reply_count: i64,
    pub reaction_count: i64,
    pub upvote_count: i64,
    pub downvote_count: i64,
    pub score: i64,
    pub confidence_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation: Option<ModerationV2Response>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}
