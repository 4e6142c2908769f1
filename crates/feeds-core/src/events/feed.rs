use serde::{Deserialize, Serialize};

use super::envelope::impl_feed_envelope;
use crate::model::{
    FeedMemberResponse, FeedResponse, NotificationStatusResponse, Timestamp, UserResponse,
};
use crate::value::CustomData;

/// `feed.created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedCreatedEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub feed: FeedResponse,
    pub members: Vec<FeedMemberResponse>,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `feed.updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedUpdatedEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub feed: FeedResponse,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `feed.deleted`. Only the fid survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedDeletedEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `feeds.feed_member.{added,updated}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedMemberEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub member: FeedMemberResponse,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `feeds.feed_member.removed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedMemberRemovedEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub member_id: String,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `feeds.notification_feed.updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationFeedUpdatedEvent {
    pub created_at: Timestamp,
    pub fid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_status: Option<NotificationStatusResponse>,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

impl_feed_envelope!(
    FeedCreatedEvent,
    FeedUpdatedEvent,
    FeedDeletedEvent,
    FeedMemberEvent,
    FeedMemberRemovedEvent,
    NotificationFeedUpdatedEvent,
);
