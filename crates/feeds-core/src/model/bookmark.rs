use serde::{Deserialize, Serialize};

use super::activity::ActivityResponse;
use super::user::UserResponse;
use super::Timestamp;
use crate::value::CustomData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkFolderResponse {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkResponse {
    pub activity: ActivityResponse,
    pub user: UserResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<BookmarkFolderResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
