use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::error::{MetricsError, Result};

use super::atomic::AtomicF64;

/// Latency buckets in seconds, the usual default for request timing.
pub const DEFAULT_BUCKETS: [f64; 14] = [
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Check bucket bounds and append `+Inf` when missing.
///
/// Bounds must be non-empty, free of NaN and strictly ascending.
pub fn normalize_buckets(bounds: &[f64]) -> Result<Vec<f64>> {
    if bounds.is_empty() {
        return Err(MetricsError::InvalidBuckets("at least one bound is required".into()));
    }
    if bounds.iter().any(|b| b.is_nan()) {
        return Err(MetricsError::InvalidBuckets("bounds must not be NaN".into()));
    }
    if bounds.windows(2).any(|w| w[0] >= w[1]) {
        return Err(MetricsError::InvalidBuckets("bounds must be strictly ascending".into()));
    }
    let mut out = bounds.to_vec();
    if out.last() != Some(&f64::INFINITY) {
        out.push(f64::INFINITY);
    }
    Ok(out)
}

/// Fixed-bucket histogram.
///
/// Each slot counts the observations that landed in that bucket only; the
/// cumulative view is built at snapshot time. The total count is the sum of
/// the slots, so `+Inf` and `_count` always agree within one snapshot.
#[derive(Debug)]
pub struct Histogram {
    bounds: Arc<[f64]>,
    counts: Box<[AtomicU64]>,
    sum: AtomicF64,
}

/// Point-in-time read of a [`Histogram`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    /// `(upper bound, cumulative count)`, ascending; the last bound is `+Inf`.
    pub buckets: Vec<(f64, u64)>,
    pub sum: f64,
    pub count: u64,
}

impl Histogram {
    /// `bounds` must already be normalized (ascending, ending in `+Inf`).
    pub(crate) fn with_bounds(bounds: Arc<[f64]>) -> Self {
        let counts = bounds.iter().map(|_| AtomicU64::new(0)).collect();
        Self {
            bounds,
            counts,
            sum: AtomicF64::new(0.0),
        }
    }

    /// Record one value. Bucket upper bounds are inclusive.
    pub fn observe(&self, value: f64) -> Result<()> {
        if value.is_nan() {
            return Err(MetricsError::InvalidValue(value));
        }
        let idx = self.bounds.partition_point(|b| *b < value);
        if let Some(slot) = self.counts.get(idx).or_else(|| self.counts.last()) {
            slot.fetch_add(1, Ordering::Relaxed);
        }
        self.sum.fetch_add(value);
        Ok(())
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    pub fn snapshot(&self) -> HistogramSnapshot {
        let mut acc = 0u64;
        let buckets = self
            .bounds
            .iter()
            .zip(self.counts.iter())
            .map(|(b, c)| {
                acc += c.load(Ordering::Relaxed);
                (*b, acc)
            })
            .collect();
        HistogramSnapshot {
            buckets,
            sum: self.sum.load(),
            count: acc,
        }
    }

    /// Start timing; the elapsed seconds are observed when the timer drops.
    pub fn start_timer(&self) -> HistogramTimer<'_> {
        HistogramTimer {
            histogram: self,
            start: Instant::now(),
            done: false,
        }
    }
}

/// Guard returned by [`Histogram::start_timer`].
#[must_use = "the elapsed time is observed as soon as the timer is dropped"]
pub struct HistogramTimer<'a> {
    histogram: &'a Histogram,
    start: Instant,
    done: bool,
}

impl HistogramTimer<'_> {
    /// Observe now and return the elapsed seconds.
    pub fn observe_duration(mut self) -> f64 {
        self.record()
    }

    fn record(&mut self) -> f64 {
        self.done = true;
        let secs = self.start.elapsed().as_secs_f64();
        let _ = self.histogram.observe(secs);
        secs
    }
}

impl Drop for HistogramTimer<'_> {
    fn drop(&mut self) {
        if !self.done {
            self.record();
        }
    }
}
