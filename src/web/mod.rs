//! HTTP surface: greeting page and health probe.

pub mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::display::MessageSource;
use crate::{AppError, Result};

/// Shared handle to the message source injected into request handlers.
pub type SharedSource = Arc<dyn MessageSource>;

/// Handler for `GET /health` — returns 200 OK with a plain-text body.
///
/// Useful for probing liveness without touching the database.
async fn health() -> &'static str {
    "ok"
}

/// Handler for `GET /` — renders the greeting page.
async fn index(State(source): State<SharedSource>) -> Html<String> {
    let message = source.display_message().await;
    Html(page::render(&message))
}

/// Build the application router over the given message source.
#[must_use]
pub fn router(source: SharedSource) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(source)
}

/// Serve HTTP on `addr` until the token is cancelled.
///
/// # Errors
///
/// Returns `AppError::Config` if the listener fails to bind or the
/// server exits with an error.
pub async fn serve(addr: SocketAddr, source: SharedSource, ct: CancellationToken) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::Config(format!("failed to bind HTTP on {addr}: {err}")))?;

    info!(%addr, "starting HTTP server");

    axum::serve(listener, router(source))
        .with_graceful_shutdown(async move { ct.cancelled().await })
        .await
        .map_err(|err| AppError::Config(format!("HTTP server error: {err}")))?;

    info!("HTTP server shut down");
    Ok(())
}
