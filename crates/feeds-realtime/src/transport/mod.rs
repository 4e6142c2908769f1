//! Transport layer (frames).
//!
//! Transport-agnostic frame type plus the codec that decodes each inbound
//! frame once, before it reaches the dispatcher.

pub mod codec;
