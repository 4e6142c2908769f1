//! Client session loop.
//!
//! Responsibilities:
//! - Send the connect request as the first outbound frame
//! - Lifecycle: ping interval + idle timeout
//! - Decode-once, then dispatch to application handlers
//! - Apply the configured skip/close policy to frames that do not decode
//!
//! The socket belongs to the caller: inbound frames arrive on an `mpsc`
//! receiver and outbound frames leave on an `mpsc` sender.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tracing::Instrument;

use feeds_core::error::{FeedsError, Result};
use feeds_core::protocol::connect::ConnectRequest;
use feeds_core::FeedsEvent;

use crate::config::{ClientConfig, ErrorAction};
use crate::dispatch::Dispatcher;
use crate::transport::codec::{connect_frame, decode, Frame, Inbound};

/// Counters for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub events: u64,
    /// Payload bytes of the frames counted in `events`.
    pub event_bytes: u64,
    pub skipped_unknown: u64,
    pub skipped_malformed: u64,
    pub handler_failures: u64,
    /// Set by `connection.ok`.
    pub connection_id: Option<String>,
}

pub struct Session {
    cfg: Arc<ClientConfig>,
    dispatcher: Arc<Dispatcher>,
    stats: SessionStats,
}

impl Session {
    pub fn new(cfg: Arc<ClientConfig>, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            cfg,
            dispatcher,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Drive the session until the input ends, the peer closes, or a
    /// policy, idle timeout, or unrecoverable `connection.error` ends it.
    ///
    /// Returns `Ok(())` when the input channel ends or a Close frame
    /// arrives. Stats stay readable through [`Session::stats`] either way.
    pub async fn run(
        &mut self,
        connect: ConnectRequest,
        inbound: mpsc::Receiver<Frame>,
        outbound: mpsc::Sender<Frame>,
    ) -> Result<()> {
        let span = tracing::info_span!("session", user_id = %connect.user_details.id);
        self.run_inner(connect, inbound, outbound)
            .instrument(span)
            .await
    }

    async fn run_inner(
        &mut self,
        mut connect: ConnectRequest,
        mut inbound: mpsc::Receiver<Frame>,
        outbound: mpsc::Sender<Frame>,
    ) -> Result<()> {
        let cfg = Arc::clone(&self.cfg);
        let conn = &cfg.connection;

        if connect.products.is_none() {
            connect.products = conn.products.clone();
        }
        send(&outbound, connect_frame(&connect)?).await?;
        tracing::info!(url = %conn.url, "connect request sent");

        let ping_every = Duration::from_millis(conn.ping_interval_ms);
        let idle_timeout = Duration::from_millis(conn.idle_timeout_ms);

        let mut ping_tick = tokio::time::interval_at(Instant::now() + ping_every, ping_every);
        ping_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        let mut last_activity = Instant::now();

        loop {
            tokio::select! {
                incoming = inbound.recv() => {
                    let Some(frame) = incoming else {
                        tracing::info!(stats = ?self.stats, "input ended");
                        return Ok(());
                    };
                    last_activity = Instant::now();
                    self.stats.frames += 1;

                    match decode(frame, conn.max_frame_bytes) {
                        Ok(Inbound::Event { event, bytes_len }) => {
                            tracing::debug!(
                                event_type = event.event_type(),
                                bytes_len,
                                frames = self.stats.frames,
                                "frame decoded"
                            );
                            self.stats.event_bytes += bytes_len as u64;
                            self.on_event(*event).await?;
                        }
                        Ok(Inbound::Ping(payload)) => {
                            send(&outbound, Frame::Pong(payload)).await?;
                        }
                        Ok(Inbound::Pong(_)) => {}
                        Ok(Inbound::Close) => {
                            tracing::info!(stats = ?self.stats, "peer closed");
                            return Ok(());
                        }
                        Err(e) => self.on_decode_error(e)?,
                    }
                }

                _ = ping_tick.tick() => {
                    send(&outbound, Frame::Ping(Vec::new())).await?;
                }

                _ = tokio::time::sleep_until(last_activity + idle_timeout) => {
                    tracing::warn!(idle_ms = conn.idle_timeout_ms, "idle timeout");
                    let _ = outbound.send(Frame::Close).await;
                    return Err(FeedsError::ConnectionClosed("idle timeout".into()));
                }
            }
        }
    }

    async fn on_event(&mut self, event: FeedsEvent) -> Result<()> {
        self.stats.events += 1;

        match &event {
            FeedsEvent::ConnectionOk(ok) => {
                tracing::info!(connection_id = %ok.connection_id, "connected");
                self.stats.connection_id = Some(ok.connection_id.clone());
            }
            FeedsEvent::HealthCheck(_) => tracing::trace!("health check"),
            _ => {}
        }

        let outcome = self.dispatcher.dispatch(&event).await;
        self.stats.handler_failures += outcome.failures.len() as u64;

        if let FeedsEvent::ConnectionError(e) = &event {
            tracing::warn!(
                code = e.error.code,
                status = e.error.status_code,
                message = %e.error.message,
                "connection error"
            );
            if e.error.is_unrecoverable() {
                return Err(FeedsError::ConnectionClosed(format!(
                    "unrecoverable connection error {}: {}",
                    e.error.code, e.error.message
                )));
            }
        }
        Ok(())
    }

    fn on_decode_error(&mut self, err: FeedsError) -> Result<()> {
        match self.cfg.events.action_for(&err) {
            ErrorAction::Skip => {
                tracing::warn!(code = err.code().as_str(), error = %err, "frame skipped");
                match err {
                    FeedsError::UnknownEventType(_) => self.stats.skipped_unknown += 1,
                    _ => self.stats.skipped_malformed += 1,
                }
                Ok(())
            }
            ErrorAction::Close => {
                tracing::warn!(code = err.code().as_str(), error = %err, "closing on frame error");
                Err(err)
            }
        }
    }
}

async fn send(outbound: &mpsc::Sender<Frame>, frame: Frame) -> Result<()> {
    outbound
        .send(frame)
        .await
        .map_err(|_| FeedsError::ConnectionClosed("outbound channel closed".into()))
}
