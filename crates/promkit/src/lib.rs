//! Top-level facade crate for promkit.
//!
//! Re-exports the metrics core and the HTTP exporter so users can depend on a
//! single crate.

pub mod core {
    pub use promkit_core::*;
}

pub mod exporter {
    pub use promkit_exporter::*;
}

pub use promkit_core::{
    default_registry, new_counter, new_gauge, new_histogram, Counter, Gauge, Histogram,
    MetricsError, Registry, Result,
};
pub use promkit_exporter::start_http_server;
