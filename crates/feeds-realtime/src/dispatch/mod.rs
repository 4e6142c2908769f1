//! Dispatcher module exports.
//!
//! Re-exports the dispatcher and handler trait so applications can register
//! callbacks without reaching into submodules.

pub mod dispatcher;

pub use dispatcher::{DispatchOutcome, Dispatcher, EventHandler, LogHandler, ANY_EVENT};
