//! WebSocket transport loop for the sync channel.
//!
//! One session is one connection: dial, attach the outbound sender, then a
//! `select!` loop pumping outgoing text to the socket and inbound text to
//! the controller. When the socket closes, cleanly or not, the channel
//! detaches and the session ends. Baseline behavior makes no reconnect
//! attempt; [`run_reconnecting`] is the explicit opt-in wrapper.

use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::controller::BoardController;

/// Error from the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("websocket connect failed: {0}")]
    Connect(Box<tokio_tungstenite::tungstenite::Error>),
}

/// Controller shared between the UI side and the transport loop.
pub type SharedController = Arc<Mutex<BoardController>>;

const BACKOFF_START_MS: u64 = 1_000;
const BACKOFF_CAP_MS: u64 = 10_000;

fn next_backoff(current_ms: u64) -> u64 {
    (current_ms * 2).min(BACKOFF_CAP_MS)
}

/// Handle for a spawned session. Dropping it (or calling
/// [`ChannelHandle::close`]) tears the transport down.
pub struct ChannelHandle {
    close_tx: Option<oneshot::Sender<()>>,
    task: tokio::task::JoinHandle<()>,
}

impl ChannelHandle {
    /// Tear down the transport. Idempotent.
    pub fn close(&mut self) {
        drop(self.close_tx.take());
    }

    /// Wait for the session task to finish after a close.
    pub async fn wait(self) {
        if let Err(error) = self.task.await {
            tracing::warn!(%error, "sync channel task join failed");
        }
    }
}

/// Spawn a single connect-and-run session against `endpoint`
/// (`ws://<host>:<port>/ws`). When the connection ends, for any reason, the
/// channel reads Disconnected and no retry is made.
#[must_use]
pub fn connect(endpoint: String, controller: SharedController) -> ChannelHandle {
    let (close_tx, close_rx) = oneshot::channel();
    let task = tokio::spawn(async move {
        if let Err(error) = run_session(&endpoint, &controller, close_rx).await {
            tracing::warn!(%error, "sync channel session failed");
        }
    });
    ChannelHandle { close_tx: Some(close_tx), task }
}

/// Opt-in resilience wrapper: run sessions forever, reconnecting with
/// exponential backoff (1s doubling to a 10s cap). Cancel by dropping the
/// future.
pub async fn run_reconnecting(endpoint: &str, controller: SharedController) {
    let mut backoff_ms = BACKOFF_START_MS;
    loop {
        // The sender half lives for the whole session; nothing closes it,
        // so only the socket ends the session.
        let (_close_tx, close_rx) = oneshot::channel();
        if let Err(error) = run_session(endpoint, &controller, close_rx).await {
            tracing::warn!(%error, "sync channel session failed");
        }

        tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
        backoff_ms = next_backoff(backoff_ms);
    }
}

async fn run_session(
    endpoint: &str,
    controller: &SharedController,
    mut close_rx: oneshot::Receiver<()>,
) -> Result<(), NetError> {
    controller.lock().await.channel_mut().set_connecting();

    let (ws, _) = match connect_async(endpoint).await {
        Ok(ok) => ok,
        Err(error) => {
            controller.lock().await.channel_mut().detach();
            return Err(NetError::Connect(Box::new(error)));
        }
    };

    let (mut sink, mut stream) = ws.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<String>();
    controller.lock().await.channel_mut().attach(outbound_tx);
    tracing::info!(endpoint, "sync channel connected");

    loop {
        tokio::select! {
            _ = &mut close_rx => break,
            outgoing = outbound_rx.recv() => {
                let Some(text) = outgoing else { break };
                if sink.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
            inbound = stream.next() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => {
                        controller.lock().await.on_message(text.as_str());
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        tracing::warn!(%error, "sync channel receive error");
                        break;
                    }
                }
            }
        }
    }

    controller.lock().await.channel_mut().detach();
    tracing::info!(endpoint, "sync channel disconnected");
    Ok(())
}

#[cfg(test)]
#[path = "net_test.rs"]
mod tests;
