//! Outbound handshake message.
//!
//! The first text frame a client sends after the socket opens. It has no
//! `type` field; the server answers with `connection.ok` or
//! `connection.error`.

use serde::{Deserialize, Serialize};

use super::strict::ObjectsOnly;
use crate::error::{FeedsError, Result};
use crate::value::CustomData;

/// Auth token + user details + optional product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub token: String,
    pub user_details: ConnectUserDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectUserDetails {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invisible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomData>,
}

impl ConnectRequest {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_details: ConnectUserDetails {
                id: user_id.into(),
                name: None,
                image: None,
                language: None,
                invisible: None,
                custom: None,
            },
            products: None,
        }
    }

    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = Some(products.into_iter().map(Into::into).collect());
        self
    }

    /// Encode to the JSON text frame. Rejects an empty token or user id.
    pub fn encode(&self) -> Result<String> {
        if self.token.is_empty() {
            return Err(FeedsError::MalformedEnvelope(
                "connect request requires a token".into(),
            ));
        }
        if self.user_details.id.is_empty() {
            return Err(FeedsError::MalformedEnvelope(
                "connect request requires user_details.id".into(),
            ));
        }
        serde_json::to_string(self).map_err(|e| FeedsError::Encode(format!("connect request: {e}")))
    }

    pub fn decode(raw: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(raw);
        Self::deserialize(ObjectsOnly(&mut de))
            .and_then(|req| de.end().map(|()| req))
            .map_err(|e| FeedsError::MalformedEnvelope(format!("invalid connect request: {e}")))
    }
}
