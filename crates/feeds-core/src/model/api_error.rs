use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error body carried by `connection.error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    /// HTTP-equivalent status; capitalised on the wire.
    #[serde(rename = "StatusCode")]
    pub status_code: i64,
    pub duration: String,
    pub more_info: String,
    pub details: Vec<i64>,
    /// The server will not accept a reconnect with the same credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unrecoverable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_fields: Option<BTreeMap<String, String>>,
}

impl ApiError {
    pub fn is_unrecoverable(&self) -> bool {
        self.unrecoverable.unwrap_or(false)
    }
}
