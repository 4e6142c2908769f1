//! Shared error type across the feeds crates.

use thiserror::Error;

/// Stable error codes (logged, and matched by test vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Frame is not a JSON object or has no string `type`.
    MalformedEnvelope,
    /// `type` has no registered decoder.
    UnknownEventType,
    /// Registered event with a missing or mistyped field.
    PayloadDecode,
    /// Attempt to encode the `Unknown` sentinel of a wire enum.
    InvalidEnumState,
    /// Frame exceeds the configured size limit.
    FrameTooLarge,
    /// Serialization failure other than an enum sentinel.
    Encode,
    /// Invalid configuration.
    BadConfig,
    /// An application event handler failed.
    HandlerFailed,
    /// The peer or the local policy closed the connection.
    ConnectionClosed,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedEnvelope => "MALFORMED_ENVELOPE",
            ErrorCode::UnknownEventType => "UNKNOWN_EVENT_TYPE",
            ErrorCode::PayloadDecode => "PAYLOAD_DECODE",
            ErrorCode::InvalidEnumState => "INVALID_ENUM_STATE",
            ErrorCode::FrameTooLarge => "FRAME_TOO_LARGE",
            ErrorCode::Encode => "ENCODE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::HandlerFailed => "HANDLER_FAILED",
            ErrorCode::ConnectionClosed => "CONNECTION_CLOSED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FeedsError>;

/// Unified error type used by core and realtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedsError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    #[error("unknown event type: {0}")]
    UnknownEventType(String),
    #[error("invalid `{event_type}` payload at `{field}`: {reason}")]
    PayloadDecode {
        event_type: String,
        field: String,
        reason: String,
    },
    #[error("cannot encode the unknown state of {0}")]
    InvalidEnumState(String),
    #[error("frame too large: {len} bytes (max {max})")]
    FrameTooLarge { len: usize, max: usize },
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("bad config: {0}")]
    Config(String),
    #[error("handler `{handler}` failed: {reason}")]
    Handler { handler: String, reason: String },
    #[error("connection closed: {0}")]
    ConnectionClosed(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl FeedsError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            FeedsError::MalformedEnvelope(_) => ErrorCode::MalformedEnvelope,
            FeedsError::UnknownEventType(_) => ErrorCode::UnknownEventType,
            FeedsError::PayloadDecode { .. } => ErrorCode::PayloadDecode,
            FeedsError::InvalidEnumState(_) => ErrorCode::InvalidEnumState,
            FeedsError::FrameTooLarge { .. } => ErrorCode::FrameTooLarge,
            FeedsError::Encode(_) => ErrorCode::Encode,
            FeedsError::Config(_) => ErrorCode::BadConfig,
            FeedsError::Handler { .. } => ErrorCode::HandlerFailed,
            FeedsError::ConnectionClosed(_) => ErrorCode::ConnectionClosed,
            FeedsError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// True for errors raised while turning a frame into an event.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            FeedsError::MalformedEnvelope(_)
                | FeedsError::UnknownEventType(_)
                | FeedsError::PayloadDecode { .. }
                | FeedsError::FrameTooLarge { .. }
        )
    }
}
