//! WebSocket handler: the stroke relay loop.
//!
//! On upgrade each connection gets a v4 client id and a bounded channel for
//! segments forwarded from peers, then enters a `select!` loop:
//! - inbound text from the socket is validated and broadcast to peers
//! - forwarded text from peers is written back out to the socket
//!
//! Validation is decode-only: a payload that parses as a stroke segment is
//! forwarded as the ORIGINAL text, never re-encoded. A payload that does
//! not parse is logged and dropped, not forwarded.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::state::AppState;

/// Peer-forward channel depth per connection. A client that stalls past
/// this many queued segments starts missing strokes rather than stalling
/// the relay.
const FORWARD_BUFFER: usize = 256;

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let (client_tx, mut client_rx) = mpsc::channel::<String>(FORWARD_BUFFER);
    state.register(client_id, client_tx).await;
    info!(%client_id, "client connected");

    loop {
        tokio::select! {
            inbound = socket.recv() => {
                let Some(Ok(msg)) = inbound else { break };
                match msg {
                    Message::Text(text) => relay_text(&state, client_id, text.as_str()).await,
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            forwarded = client_rx.recv() => {
                let Some(text) = forwarded else { break };
                if socket.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    state.unregister(client_id).await;
    info!(%client_id, "client disconnected");
}

/// Validate one inbound payload and fan it out to every other client.
async fn relay_text(state: &AppState, client_id: Uuid, text: &str) {
    match strokes::decode_segment(text) {
        Ok(_) => state.broadcast(text, client_id).await,
        Err(error) => {
            warn!(%client_id, %error, "dropping malformed segment");
        }
    }
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
