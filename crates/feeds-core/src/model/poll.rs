use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::user::UserResponse;
use super::Timestamp;
use crate::value::CustomData;

crate::wire_enum! {
    pub enum VotingVisibility {
        Public = "public",
        Anonymous = "anonymous",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOptionResponseData {
    pub id: String,
    pub text: String,
    pub custom: CustomData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResponseData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub voting_visibility: VotingVisibility,
    pub enforce_unique_vote: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_votes_allowed: Option<i64>,
    pub allow_user_suggested_options: bool,
    pub allow_answers: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    pub vote_count: i64,
    pub answers_count: i64,
    pub options: Vec<PollOptionResponseData>,
    /// Option id -> votes.
    pub vote_counts_by_option: BTreeMap<String, i64>,
    pub created_by_id: String,
    pub custom: CustomData,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A single vote, or a free-text answer when `is_answer` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollVoteResponseData {
    pub id: String,
    pub poll_id: String,
    pub option_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_answer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
