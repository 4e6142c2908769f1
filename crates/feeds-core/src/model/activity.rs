use serde::{Deserialize, Serialize};

use super::moderation::ModerationV2Response;
use super::poll::PollResponseData;
use super::user::UserResponse;
use super::Timestamp;
use crate::value::CustomData;

crate::wire_enum! {
    pub enum ActivityVisibility {
        Public = "public",
        Private = "private",
        /// Visible to users holding `visibility_tag`.
        Tag = "tag",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityLocation {
    pub lat: f64,
    pub lng: f64,
}

/// An activity as fanned out to feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub id: String,
    /// Application-defined verb ("post", "share", ...).
    #[serde(rename = "type")]
    pub activity_type: String,
    pub user: UserResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Fids the activity was added to.
    pub feeds: Vec<String>,
    pub visibility: ActivityVisibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_tag: Option<String>,
    pub reaction_count: i64,
    pub comment_count: i64,
    pub bookmark_count: i64,
    pub share_count: i64,
    pub popularity: i64,
    pub score: f64,
    pub filter_tags: Vec<String>,
    pub interest_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ActivityLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<PollResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation: Option<ModerationV2Response>,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_data: Option<CustomData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
}

/// Reaction on an activity or on a comment (`comment_id` set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedsReactionResponse {
    pub activity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    #[serde(rename = "type")]
    pub reaction_type: String,
    pub user: UserResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
