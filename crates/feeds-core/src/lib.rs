//! feeds core: transport-agnostic realtime event protocol.
//!
//! This crate turns inbound WebSocket frames of the feeds backend into typed
//! [`events::FeedsEvent`] values and back. It carries no transport or runtime
//! dependencies so the same decoder serves the realtime client, tooling and
//! tests.
//!
//! # Layers
//! - [`value`]: schema-less JSON subtree used by every `custom` field.
//! - [`protocol::enums`]: forward-compatible enums (unknown wire values decode
//!   to an `Unknown` sentinel instead of failing).
//! - [`model`]: payload records nested inside events.
//! - [`events`]: the `type`-discriminated event union and its dispatch table.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed frames
//! surface as [`FeedsError`] so a hostile or newer server cannot crash the
//! client.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod events;
pub mod model;
pub mod protocol;
pub mod value;

/// Shared result type.
pub use error::{ErrorCode, FeedsError, Result};
pub use events::{EventEnvelope, FeedsEvent};
pub use protocol::enums::WireEnum;
pub use value::{CustomData, JsonValue};

#[doc(hidden)]
pub use serde as __serde;
