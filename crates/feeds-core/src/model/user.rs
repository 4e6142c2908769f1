use serde::{Deserialize, Serialize};

use super::Timestamp;
use crate::value::CustomData;

crate::wire_enum! {
    /// Push notification level for one product.
    pub enum PushLevel {
        All = "all",
        Mentions = "mentions",
        DirectMentions = "direct_mentions",
        AllMentions = "all_mentions",
        None = "none",
        Default = "default",
    }
}

/// Public user profile as embedded in activities, comments, feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub role: String,
    pub banned: bool,
    pub online: bool,
    pub custom: CustomData,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_level: Option<PushLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeds_level: Option<PushLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_level: Option<PushLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_until: Option<Timestamp>,
}

/// The connected user, as returned by `connection.ok`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnUserResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub role: String,
    pub language: String,
    pub banned: bool,
    pub online: bool,
    pub custom: CustomData,
    pub total_unread_count: i64,
    pub unread_channels: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_preferences: Option<PushPreferences>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
