use std::time::{SystemTime, UNIX_EPOCH};

use super::atomic::AtomicF64;

/// Freely settable value.
///
/// The text format renders `+Inf`, `-Inf` and `NaN`, so every `f64` is
/// accepted.
#[derive(Debug, Default)]
pub struct Gauge {
    value: AtomicF64,
}

impl Gauge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, value: f64) {
        self.value.store(value);
    }

    pub fn inc(&self, delta: f64) {
        self.value.fetch_add(delta);
    }

    pub fn dec(&self, delta: f64) {
        self.value.fetch_add(-delta);
    }

    pub fn get(&self) -> f64 {
        self.value.load()
    }

    /// Set to the current unix time in seconds.
    pub fn set_to_current_time(&self) {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        self.set(now);
    }

    /// Increment now and decrement when the returned guard drops.
    pub fn track_inprogress(&self) -> InProgressGuard<'_> {
        self.inc(1.0);
        InProgressGuard { gauge: self }
    }
}

/// Guard returned by [`Gauge::track_inprogress`].
#[must_use = "the gauge is decremented as soon as the guard is dropped"]
pub struct InProgressGuard<'a> {
    gauge: &'a Gauge,
}

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.gauge.dec(1.0);
    }
}
