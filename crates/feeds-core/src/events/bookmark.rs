use serde::{Deserialize, Serialize};

use super::EventEnvelope;
use crate::model::{BookmarkResponse, Timestamp, UserResponse};
use crate::value::CustomData;

/// `bookmark.*` and `feeds.bookmark.*`. Bookmarks are per-user, not per-feed,
/// so there is no `fid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkEvent {
    pub created_at: Timestamp,
    pub bookmark: BookmarkResponse,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

impl EventEnvelope for BookmarkEvent {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn received_at(&self) -> Option<Timestamp> {
        self.received_at
    }

    fn custom(&self) -> Option<&CustomData> {
        Some(&self.custom)
    }

    fn user(&self) -> Option<&UserResponse> {
        self.user.as_ref().or(Some(&self.bookmark.user))
    }
}
