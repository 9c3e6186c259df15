//! Process-wide default registry.
//!
//! Everything here is sugar over an ordinary [`Registry`]; code that wants
//! isolation (tests, embedded use) builds its own and passes it around.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::registry::Registry;
use crate::typed::{CounterVec, GaugeVec, HistogramVec};

static DEFAULT_REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

pub fn default_registry() -> Arc<Registry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// Register a counter family in the default registry.
pub fn new_counter(name: &str, help: &str, label_names: &[&str]) -> Result<CounterVec> {
    DEFAULT_REGISTRY.counter_vec(name, help, label_names)
}

/// Register a gauge family in the default registry.
pub fn new_gauge(name: &str, help: &str, label_names: &[&str]) -> Result<GaugeVec> {
    DEFAULT_REGISTRY.gauge_vec(name, help, label_names)
}

/// Register a histogram family in the default registry.
pub fn new_histogram(
    name: &str,
    help: &str,
    label_names: &[&str],
    buckets: &[f64],
) -> Result<HistogramVec> {
    DEFAULT_REGISTRY.histogram_vec(name, help, label_names, buckets)
}
