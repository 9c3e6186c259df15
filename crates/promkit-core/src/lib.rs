//! promkit core: in-process metric state and its text exposition.
//!
//! Application code registers families once, then fetches handles by label
//! values and mutates them from any thread. A scrape walks the [`Registry`]
//! and encodes what it finds. This crate carries no transport or runtime
//! dependencies; the HTTP side lives in `promkit-exporter`.
//!
//! # Guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible
//! operation returns [`MetricsError`] to its caller and leaves other metrics
//! untouched.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod encoding;
pub mod error;
pub mod family;
pub mod global;
pub mod label;
pub mod metric;
pub mod registry;
pub mod typed;

pub use error::{ErrorCode, MetricsError, Result};
pub use family::{Desc, LabelValues, MetricFamily};
pub use global::{default_registry, new_counter, new_gauge, new_histogram};
pub use metric::{
    Counter, Gauge, Histogram, HistogramSnapshot, MetricHandle, MetricKind, DEFAULT_BUCKETS,
};
pub use registry::Registry;
pub use typed::{CounterVec, GaugeVec, HistogramVec, MetricVec};
