//! Shared state handed to the HTTP handlers.

use std::sync::Arc;
use std::time::Instant;

use promkit_core::encoding;
use promkit_core::error::Result;
use promkit_core::Registry;

use crate::obs::ScrapeMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    registry: Arc<Registry>,
    scrape: Option<ScrapeMetrics>,
}

impl AppState {
    /// Build state around `registry`, registering scrape metrics into it when
    /// `self_metrics` is set.
    pub fn new(registry: Arc<Registry>, self_metrics: bool) -> Result<Self> {
        let scrape = if self_metrics {
            Some(ScrapeMetrics::register(&registry)?)
        } else {
            None
        };
        Ok(Self {
            inner: Arc::new(AppStateInner { registry, scrape }),
        })
    }

    /// Fresh collect + encode; nothing is cached between scrapes.
    pub fn render(&self) -> String {
        let start = Instant::now();
        let body = encoding::render(&self.inner.registry);
        let elapsed = start.elapsed();
        tracing::debug!(bytes = body.len(), elapsed_us = elapsed.as_micros() as u64, "scrape rendered");
        if let Some(m) = &self.inner.scrape {
            m.record(elapsed, body.len());
        }
        body
    }
}
