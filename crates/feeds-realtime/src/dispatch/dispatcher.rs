use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use feeds_core::error::{FeedsError, Result};
use feeds_core::events::{self, FeedsEvent};

/// Subscription key that receives every event.
pub const ANY_EVENT: &str = "*";

/// Application callback for decoded events.
#[async_trait]
pub trait EventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle(&self, event: &FeedsEvent) -> Result<()>;
}

/// Result of dispatching one event.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    pub handled: usize,
    pub failures: Vec<FeedsError>,
}

/// Registry of handlers keyed by event discriminator.
#[derive(Default)]
pub struct Dispatcher {
    handlers: DashMap<&'static str, Vec<Arc<dyn EventHandler>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    /// Register `handler` for `event_type` (or [`ANY_EVENT`]).
    ///
    /// Unregistered discriminators are rejected with `BAD_CONFIG`.
    pub fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) -> Result<()> {
        let key = if event_type == ANY_EVENT {
            ANY_EVENT
        } else {
            events::canonical_event_type(event_type).ok_or_else(|| {
                FeedsError::Config(format!(
                    "handler `{}` subscribed to unknown event type: {event_type}",
                    handler.name()
                ))
            })?
        };
        self.handlers.entry(key).or_default().push(handler);
        Ok(())
    }

    pub fn subscribe_all(&self, handler: Arc<dyn EventHandler>) {
        self.handlers.entry(ANY_EVENT).or_default().push(handler);
    }

    pub fn subscribed_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.handlers.iter().map(|e| *e.key()).collect();
        types.sort_unstable();
        types
    }

    /// Run every matching handler in registration order, specific before
    /// [`ANY_EVENT`]. Failures are collected, not propagated.
    pub async fn dispatch(&self, event: &FeedsEvent) -> DispatchOutcome {
        let event_type = event.event_type();
        let mut targets = self.handlers_for(event_type);
        targets.extend(self.handlers_for(ANY_EVENT));

        let mut outcome = DispatchOutcome::default();
        for handler in targets {
            match handler.handle(event).await {
                Ok(()) => outcome.handled += 1,
                Err(e) => {
                    tracing::warn!(
                        handler = handler.name(),
                        event_type,
                        error = %e,
                        "event handler failed"
                    );
                    outcome.failures.push(FeedsError::Handler {
                        handler: handler.name().to_owned(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        outcome
    }

    // Returns owned handlers: no shard guard may live across an await.
    fn handlers_for(&self, key: &str) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .get(key)
            .map(|h| h.value().clone())
            .unwrap_or_default()
    }
}

/// Logs every event it receives at info.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHandler;

#[async_trait]
impl EventHandler for LogHandler {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn handle(&self, event: &FeedsEvent) -> Result<()> {
        tracing::info!(
            event_type = event.event_type(),
            fid = event.fid().unwrap_or("-"),
            created_at = %event.created_at(),
            "event"
        );
        Ok(())
    }
}
