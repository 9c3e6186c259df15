//! Metric handles: one named, labeled time series each.
//!
//! Counters and gauges are single atomics; histograms hold one atomic per
//! bucket plus an atomic sum. None of them lock, so mutation never blocks on
//! the owning family or registry.

mod atomic;
pub mod counter;
pub mod gauge;
pub mod histogram;

use std::sync::Arc;

pub use counter::Counter;
pub use gauge::{Gauge, InProgressGuard};
pub use histogram::{Histogram, HistogramSnapshot, HistogramTimer, DEFAULT_BUCKETS};

/// The closed set of metric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Counter,
    Gauge,
    Histogram,
}

impl MetricKind {
    /// Name used on the `# TYPE` line.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
        }
    }
}

/// Shared reference to one time series.
#[derive(Debug, Clone)]
pub enum MetricHandle {
    Counter(Arc<Counter>),
    Gauge(Arc<Gauge>),
    Histogram(Arc<Histogram>),
}

impl MetricHandle {
    /// Zero-valued handle of the given kind. `bounds` is only read for histograms.
    pub(crate) fn new(kind: MetricKind, bounds: &Arc<[f64]>) -> Self {
        match kind {
            MetricKind::Counter => MetricHandle::Counter(Arc::new(Counter::new())),
            MetricKind::Gauge => MetricHandle::Gauge(Arc::new(Gauge::new())),
            MetricKind::Histogram => {
                MetricHandle::Histogram(Arc::new(Histogram::with_bounds(Arc::clone(bounds))))
            }
        }
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            MetricHandle::Counter(_) => MetricKind::Counter,
            MetricHandle::Gauge(_) => MetricKind::Gauge,
            MetricHandle::Histogram(_) => MetricKind::Histogram,
        }
    }

    /// True when both point at the same underlying series.
    pub fn ptr_eq(&self, other: &MetricHandle) -> bool {
        match (self, other) {
            (MetricHandle::Counter(a), MetricHandle::Counter(b)) => Arc::ptr_eq(a, b),
            (MetricHandle::Gauge(a), MetricHandle::Gauge(b)) => Arc::ptr_eq(a, b),
            (MetricHandle::Histogram(a), MetricHandle::Histogram(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
