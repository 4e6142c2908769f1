use serde::{Deserialize, Serialize};

use super::envelope::impl_feed_envelope;
use crate::model::{PollResponseData, PollVoteResponseData, Timestamp, UserResponse};
use crate::value::CustomData;

/// `poll.vote_{casted,changed,removed}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollVoteEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub poll: PollResponseData,
    pub poll_vote: PollVoteResponseData,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `poll.{closed,updated,deleted}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollEvent {
    pub created_at: Timestamp,
    pub fid: String,
    pub poll: PollResponseData,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

impl_feed_envelope!(PollVoteEvent, PollEvent);
