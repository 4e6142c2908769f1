//! feeds realtime client layer.
//!
//! This crate consumes frames from an already established feeds WebSocket
//! connection and turns them into application callbacks. It wires the strict
//! config, frame codec, event dispatcher and session loop together; the
//! socket itself stays with the caller (frames arrive over `tokio` channels).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod dispatch;
pub mod session;
pub mod transport;

pub use config::{ClientConfig, ErrorAction};
pub use dispatch::{DispatchOutcome, Dispatcher, EventHandler};
pub use session::{Session, SessionStats};
pub use transport::codec::{Frame, Inbound};
