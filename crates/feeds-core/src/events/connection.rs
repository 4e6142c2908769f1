//! Transport-level events and `user.updated`.

use serde::{Deserialize, Serialize};

use super::EventEnvelope;
use crate::model::{ApiError, OwnUserResponse, Timestamp, UserResponse};
use crate::value::CustomData;

/// `connection.ok`: handshake accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedEvent {
    pub connection_id: String,
    pub created_at: Timestamp,
    pub me: OwnUserResponse,
}

/// `health.check`: server keep-alive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckEvent {
    pub connection_id: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub me: Option<OwnUserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

/// `connection.error`: handshake or connection rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionErrorEvent {
    pub connection_id: String,
    pub created_at: Timestamp,
    pub error: ApiError,
}

/// `user.updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdatedEvent {
    pub created_at: Timestamp,
    pub user: UserResponse,
    pub custom: CustomData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<Timestamp>,
}

impl EventEnvelope for ConnectedEvent {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn connection_id(&self) -> Option<&str> {
        Some(&self.connection_id)
    }
}

impl EventEnvelope for HealthCheckEvent {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn received_at(&self) -> Option<Timestamp> {
        self.received_at
    }

    fn connection_id(&self) -> Option<&str> {
        Some(&self.connection_id)
    }
}

impl EventEnvelope for ConnectionErrorEvent {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn connection_id(&self) -> Option<&str> {
        Some(&self.connection_id)
    }
}

impl EventEnvelope for UserUpdatedEvent {
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
        Some(&self.user)
    }
}
