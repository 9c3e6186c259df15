//! Axum router wiring.

use axum::{routing::get, Router};

use promkit_core::error::{MetricsError, Result};

use crate::{app_state::AppState, ops};

pub const HEALTHZ_PATH: &str = "/healthz";

/// Scrape paths are literal: `/` followed by `[A-Za-z0-9_./-]`, never
/// `/healthz`. Route syntax (`:x`, `*rest`, `{x}`) is rejected.
pub fn validate_scrape_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(MetricsError::InvalidConfig(format!(
            "scrape path must start with '/': {path:?}"
        )));
    }
    if let Some(c) = path
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '-')))
    {
        return Err(MetricsError::InvalidConfig(format!(
            "scrape path contains {c:?}: {path:?}"
        )));
    }
    if path == HEALTHZ_PATH {
        return Err(MetricsError::InvalidConfig(format!(
            "scrape path must not be {HEALTHZ_PATH}"
        )));
    }
    Ok(())
}

/// Scrape endpoint at `path` plus `/healthz`.
pub fn build_router(state: AppState, path: &str) -> Result<Router> {
    validate_scrape_path(path)?;
    Ok(Router::new()
        .route(path, get(ops::metrics))
        .route(HEALTHZ_PATH, get(ops::healthz))
        .with_state(state))
}
