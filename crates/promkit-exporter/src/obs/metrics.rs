//! The exporter's own scrape metrics.
//!
//! Registered into the same registry that is being served, so they show up
//! in the scrape output next to application metrics.

use std::sync::Arc;
use std::time::Duration;

use promkit_core::error::Result;
use promkit_core::{Counter, Gauge, Histogram, Registry};

// 100us, 500us, 1ms, 5ms, 10ms, 50ms, 100ms, 500ms, 1s
const SCRAPE_BUCKETS_SECS: [f64; 9] = [0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0];

pub struct ScrapeMetrics {
    scrapes: Arc<Counter>,
    duration: Arc<Histogram>,
    size: Arc<Gauge>,
}

impl ScrapeMetrics {
    pub fn register(registry: &Registry) -> Result<Self> {
        let scrapes = registry
            .counter_vec("promkit_scrapes_total", "Scrape requests served", &[])?
            .with_label_values(&[])?;
        let duration = registry
            .histogram_vec(
                "promkit_scrape_duration_seconds",
                "Time spent encoding a scrape",
                &[],
                &SCRAPE_BUCKETS_SECS,
            )?
            .with_label_values(&[])?;
        let size = registry
            .gauge_vec("promkit_scrape_size_bytes", "Size of the last scrape body", &[])?
            .with_label_values(&[])?;
        Ok(Self { scrapes, duration, size })
    }

    pub fn record(&self, elapsed: Duration, bytes: usize) {
        self.scrapes.inc_one();
        let _ = self.duration.observe(elapsed.as_secs_f64());
        self.size.set(bytes as f64);
    }
}
