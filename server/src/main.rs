//! Whiteboard relay: accepts websocket clients and fans stroke segments
//! out to everyone else. Stateless by design — no history, no persistence.

mod routes;
mod state;

use thiserror::Error;

#[derive(Debug, Error)]
enum ServerError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
    #[error("bind failed: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT").unwrap_or_else(|_| "8080".into()).parse()?;

    let app = routes::app(state::AppState::new());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(%port, "whiteboard relay listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
