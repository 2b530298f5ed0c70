//! Sync channel: connectivity status and best-effort segment transmission.
//!
//! The channel owns nothing but a sender into the transport loop and the
//! connection status the UI reads. Sending while disconnected is not an
//! error — the stroke was already rendered locally, peers simply never see
//! it. Local drawing is never blocked by network state.

use strokes::{StrokeSegment, encode_segment};
use tokio::sync::mpsc;

/// Transport lifecycle state, mutated only on open/close events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Outbound half of the stroke sync protocol.
#[derive(Debug, Default)]
pub struct SyncChannel {
    outbound: Option<mpsc::UnboundedSender<String>>,
    status: ConnectionStatus,
}

impl SyncChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// The transport started dialing.
    pub fn set_connecting(&mut self) {
        self.status = ConnectionStatus::Connecting;
    }

    /// The transport opened: wire up the outbound sender.
    pub fn attach(&mut self, outbound: mpsc::UnboundedSender<String>) {
        self.outbound = Some(outbound);
        self.status = ConnectionStatus::Connected;
    }

    /// The transport closed or failed. No reconnect is attempted here;
    /// see [`crate::net::run_reconnecting`].
    pub fn detach(&mut self) {
        self.outbound = None;
        self.status = ConnectionStatus::Disconnected;
    }

    /// Serialize and transmit one segment, best effort. Silently a no-op
    /// while disconnected; degrades to detached if the transport loop has
    /// gone away under us.
    pub fn send(&mut self, segment: &StrokeSegment) {
        if !self.is_connected() {
            tracing::debug!("segment dropped: channel disconnected");
            return;
        }
        let Some(outbound) = &self.outbound else {
            return;
        };
        if outbound.send(encode_segment(segment)).is_err() {
            tracing::debug!("transport loop gone; marking channel disconnected");
            self.detach();
        }
    }
}

#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;
