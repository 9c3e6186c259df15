//! Scrape server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use promkit_core::error::{MetricsError, Result};
use promkit_core::Registry;

use crate::{app_state::AppState, router};

pub const DEFAULT_PATH: &str = "/metrics";

/// Serve `state` on an already bound listener in a background task.
///
/// Fails up front on an unusable `path`. The task ends only if the server
/// itself fails; a client that disconnects mid-scrape just drops that response.
pub fn spawn(listener: TcpListener, state: AppState, path: &str) -> Result<JoinHandle<Result<()>>> {
    let app = router::build_router(state, path)?;
    Ok(tokio::spawn(async move {
        axum::serve(listener, app).await.map_err(|e| {
            tracing::error!(error = %e, "scrape server failed");
            MetricsError::Internal(format!("server failed: {e}"))
        })
    }))
}

/// Bind `addr` and serve `registry` at `/metrics` from the current tokio
/// runtime. Returns the bound address (useful with port 0) and the task.
pub async fn start_http_server(
    addr: SocketAddr,
    registry: Arc<Registry>,
) -> Result<(SocketAddr, JoinHandle<Result<()>>)> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| MetricsError::Internal(format!("bind {addr} failed: {e}")))?;
    let local = listener
        .local_addr()
        .map_err(|e| MetricsError::Internal(format!("local_addr failed: {e}")))?;
    let state = AppState::new(registry, false)?;
    tracing::info!(%local, path = DEFAULT_PATH, "scrape server listening");
    Ok((local, spawn(listener, state, DEFAULT_PATH)?))
}
