use serde::Deserialize;
use feeds_core::error::{FeedsError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub connection: ConnectionSection,

    #[serde(default)]
    pub events: EventsSection,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            connection: ConnectionSection::default(),
            events: EventsSection::default(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FeedsError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.connection.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionSection {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_ping_interval_ms")]
    pub ping_interval_ms: u64,

    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,

    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,

    /// Sent in the connect request when the caller did not set its own.
    #[serde(default)]
    pub products: Option<Vec<String>>,
}

impl Default for ConnectionSection {
    fn default() -> Self {
        Self {
            url: default_url(),
            ping_interval_ms: default_ping_interval_ms(),
            idle_timeout_ms: default_idle_timeout_ms(),
            max_frame_bytes: default_max_frame_bytes(),
            products: None,
        }
    }
}

impl ConnectionSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.url.starts_with("ws://") || self.url.starts_with("wss://")) {
            return Err(FeedsError::Config(
                "connection.url must start with ws:// or wss://".into(),
            ));
        }
        if !(5000..=120000).contains(&self.ping_interval_ms) {
            return Err(FeedsError::Config(
                "connection.ping_interval_ms must be between 5000 and 120000".into(),
            ));
        }
        if !(10000..=600000).contains(&self.idle_timeout_ms) {
            return Err(FeedsError::Config(
                "connection.idle_timeout_ms must be between 10000 and 600000".into(),
            ));
        }
        if self.idle_timeout_ms <= self.ping_interval_ms {
            return Err(FeedsError::Config(
                "connection.idle_timeout_ms must be greater than ping_interval_ms".into(),
            ));
        }
        if !(1024..=16 * 1024 * 1024).contains(&self.max_frame_bytes) {
            return Err(FeedsError::Config(
                "connection.max_frame_bytes must be between 1024 and 16777216".into(),
            ));
        }
        if let Some(products) = &self.products {
            if products.is_empty() || products.iter().any(|p| p.trim().is_empty()) {
                return Err(FeedsError::Config(
                    "connection.products must list at least one non-empty name".into(),
                ));
            }
        }
        Ok(())
    }
}

fn default_url() -> String {
    "wss://feeds.example.com/connect".into()
}
fn default_ping_interval_ms() -> u64 {
    25000
}
fn default_idle_timeout_ms() -> u64 {
    60000
}
fn default_max_frame_bytes() -> usize {
    1024 * 1024
}

/// What the session does with a frame it cannot turn into an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorAction {
    /// Log at warn, count, keep reading.
    #[default]
    Skip,
    /// End the session with the error.
    Close,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsSection {
    /// Applied to `UNKNOWN_EVENT_TYPE`.
    #[serde(default)]
    pub on_unknown_event: ErrorAction,

    /// Applied to every other decode failure.
    #[serde(default)]
    pub on_decode_error: ErrorAction,
}

impl EventsSection {
    /// Policy for a decode error.
    pub fn action_for(&self, err: &FeedsError) -> ErrorAction {
        match err {
            FeedsError::UnknownEventType(_) => self.on_unknown_event,
            _ => self.on_decode_error,
        }
    }
}
