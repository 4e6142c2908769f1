//! Decode-once codec for the transport layer.
//!
//! - Text and Binary frames => `FeedsEvent` (binary payloads are UTF-8 JSON)
//! - Ping/Pong/Close are surfaced for lifecycle management
//! - Size limit is checked before any parsing

use bytes::Bytes;
use feeds_core::{
    error::{FeedsError, Result},
    protocol::connect::ConnectRequest,
    FeedsEvent,
};

/// One WebSocket message, independent of the socket library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Binary(Bytes),
    Ping(Vec<u8>),
    Pong(Vec<u8>),
    Close,
}

impl Frame {
    pub fn text(s: impl Into<String>) -> Self {
        Frame::Text(s.into())
    }

    /// Payload length, cheap to compute before decode.
    pub fn len(&self) -> usize {
        match self {
            Frame::Text(s) => s.len(),
            Frame::Binary(b) => b.len(),
            Frame::Ping(v) | Frame::Pong(v) => v.len(),
            Frame::Close => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub enum Inbound {
    Event { event: Box<FeedsEvent>, bytes_len: usize },
    Ping(Vec<u8>),
    Pong(Vec<u8>),
    Close,
}

pub fn decode(frame: Frame, max_frame_bytes: usize) -> Result<Inbound> {
    let bytes_len = frame.len();
    match frame {
        Frame::Text(s) => {
            check_len(bytes_len, max_frame_bytes)?;
            let event = FeedsEvent::decode_str(&s)?;
            Ok(Inbound::Event { event: Box::new(event), bytes_len })
        }
        Frame::Binary(b) => {
            check_len(bytes_len, max_frame_bytes)?;
            let event = FeedsEvent::decode(&b)?;
            Ok(Inbound::Event { event: Box::new(event), bytes_len })
        }
        Frame::Ping(v) => Ok(Inbound::Ping(v)),
        Frame::Pong(v) => Ok(Inbound::Pong(v)),
        Frame::Close => Ok(Inbound::Close),
    }
}

/// First outbound frame of a session.
pub fn connect_frame(req: &ConnectRequest) -> Result<Frame> {
    Ok(Frame::Text(req.encode()?))
}

fn check_len(len: usize, max: usize) -> Result<()> {
    if len > max {
        return Err(FeedsError::FrameTooLarge { len, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    const HEALTH: &str = r#"{"type":"health.check","connection_id":"c1","created_at":"2024-01-01T00:00:00Z"}"#;

    #[test]
    fn text_and_binary_decode_to_the_same_event() {
        let Inbound::Event { event: a, .. } = decode(Frame::text(HEALTH), 1024).unwrap() else {
            panic!("expected event");
        };
        let Inbound::Event { event: b, bytes_len } =
            decode(Frame::Binary(Bytes::from_static(HEALTH.as_bytes())), 1024).unwrap()
        else {
            panic!("expected event");
        };
        assert_eq!(a, b);
        assert_eq!(bytes_len, HEALTH.len());
    }

    #[test]
    fn oversized_frame_is_rejected_before_parsing() {
        let err = decode(Frame::text("x".repeat(2048)), 1024).unwrap_err();
        assert_eq!(err, FeedsError::FrameTooLarge { len: 2048, max: 1024 });
    }

    #[test]
    fn invalid_utf8_binary_is_malformed() {
        let err = decode(Frame::Binary(Bytes::from_static(&[0xff, 0xfe])), 1024).unwrap_err();
        assert_eq!(err.code().as_str(), "MALFORMED_ENVELOPE");
    }

    #[test]
    fn connect_frame_carries_the_request() {
        let req = ConnectRequest::new("tok", "u1");
        let Frame::Text(s) = connect_frame(&req).unwrap() else {
            panic!("expected text frame");
        };
        assert_eq!(ConnectRequest::decode(&s).unwrap(), req);
    }
}
