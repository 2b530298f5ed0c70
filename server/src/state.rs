//! Shared relay state.
//!
//! The relay holds no board content: its only state is the set of connected
//! clients, each keyed by a connection-scoped id and reachable through a
//! bounded sender. A restart therefore loses nothing but the live
//! connections; clients reconnect and draw on.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

/// Injected into Axum handlers via the `State` extractor. Clone is required
/// by Axum; the client map is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    clients: Arc<RwLock<HashMap<Uuid, mpsc::Sender<String>>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection to the roster.
    pub async fn register(&self, client_id: Uuid, tx: mpsc::Sender<String>) {
        self.clients.write().await.insert(client_id, tx);
    }

    /// Drop a connection from the roster.
    pub async fn unregister(&self, client_id: Uuid) {
        self.clients.write().await.remove(&client_id);
    }

    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Forward `text` to every client except `exclude` (the sender, which
    /// already rendered the stroke locally). Best-effort: a peer whose
    /// channel is full or closed is skipped, not waited on.
    pub async fn broadcast(&self, text: &str, exclude: Uuid) {
        let clients = self.clients.read().await;
        for (client_id, tx) in clients.iter() {
            if *client_id == exclude {
                continue;
            }
            if tx.try_send(text.to_owned()).is_err() {
                tracing::debug!(%client_id, "peer channel unavailable; skipping");
            }
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
