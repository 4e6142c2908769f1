//! Common envelope fields, projected from every event payload.

use crate::model::{Timestamp, UserResponse};
use crate::value::CustomData;

/// Fields shared by (most) events, readable without matching on the variant.
///
/// Obtained through [`FeedsEvent::envelope`](super::FeedsEvent::envelope).
/// Fields a payload does not carry report `None`.
pub trait EventEnvelope {
    fn created_at(&self) -> Timestamp;

    /// Set by the client SDK of the sender, when present.
    fn received_at(&self) -> Option<Timestamp> {
        None
    }

    /// Feed the event belongs to.
    fn fid(&self) -> Option<&str> {
        None
    }

    fn custom(&self) -> Option<&CustomData> {
        None
    }

    /// User that triggered the event.
    fn user(&self) -> Option<&UserResponse> {
        None
    }

    /// Transport events only.
    fn connection_id(&self) -> Option<&str> {
        None
    }
}

/// Envelope impl for feed-scoped payloads
/// (`created_at`, `received_at`, `fid`, `custom`, optional `user`).
macro_rules! impl_feed_envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::events::EventEnvelope for $ty {
                fn created_at(&self) -> $crate::model::Timestamp {
                    self.created_at
                }
                fn received_at(&self) -> Option<$crate::model::Timestamp> {
                    self.received_at
                }
                fn fid(&self) -> Option<&str> {
                    Some(&self.fid)
                }
                fn custom(&self) -> Option<&$crate::value::CustomData> {
                    Some(&self.custom)
                }
                fn user(&self) -> Option<&$crate::model::UserResponse> {
                    self.user.as_ref()
                }
            }
        )+
    };
}

pub(crate) use impl_feed_envelope;
