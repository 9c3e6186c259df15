//! Exporter self-observability.

pub mod metrics;

pub use metrics::ScrapeMetrics;
