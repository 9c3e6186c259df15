//! promkit-exporter sample binary.
//!
//! Registers `example_requests_total`, serves the default registry, and
//! increments the counter once per `demo.interval_ms`.
//!
//! Usage: `promkit-exporter [config.yaml]`

use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use promkit_core::error::{MetricsError, Result};
use promkit_exporter::{app_state::AppState, config, server};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.code().as_str(), "promkit-exporter stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path)?,
        None => config::ExporterConfig::default(),
    };

    let registry = promkit_core::default_registry();
    let requests = promkit_core::new_counter("example_requests_total", "Total requests", &[])?
        .with_label_values(&[])?;

    let listen = cfg.exporter.listen_addr()?;
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| MetricsError::Internal(format!("bind {listen} failed: {e}")))?;

    let state = AppState::new(registry, cfg.exporter.self_metrics)?;
    let mut server = server::spawn(listener, state, &cfg.exporter.path)?;
    tracing::info!(%listen, path = %cfg.exporter.path, "promkit-exporter starting");

    let mut ticker = tokio::time::interval(Duration::from_millis(cfg.demo.interval_ms));
    loop {
        tokio::select! {
            _ = ticker.tick() => requests.inc_one(),
            res = &mut server => {
                return match res {
                    Ok(r) => r,
                    Err(e) => Err(MetricsError::Internal(format!("server task: {e}"))),
                };
            }
        }
    }
}
