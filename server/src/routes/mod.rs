//! Router assembly.

pub mod ws;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the relay router: the websocket endpoint plus a liveness probe.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws::handle_ws))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
