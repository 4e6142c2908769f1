//! Top-level facade crate for the feeds realtime client.
//!
//! Re-exports the protocol core and the realtime layer so users can depend on a single crate.

pub mod core {
    pub use feeds_core::*;
}

pub mod realtime {
    pub use feeds_realtime::*;
}

pub use feeds_core::{FeedsError, FeedsEvent, JsonValue, Result};
