//! Wire-level building blocks shared by inbound and outbound messages.
//!
//! - `enums`: forward-compatible enum decoding (unknown values never fail).
//! - `connect`: the outbound handshake sent right after the socket opens.
//! - `strict`: struct decoding restricted to JSON objects.
//!
//! Inbound event frames are handled by [`crate::events`].

pub mod connect;
pub mod enums;
pub(crate) mod strict;
