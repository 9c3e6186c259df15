use crate::error::{MetricsError, Result};

use super::atomic::AtomicF64;

/// Monotonically non-decreasing accumulator.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicF64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount`. Negative, NaN and infinite amounts are rejected and leave
    /// the value untouched.
    pub fn inc(&self, amount: f64) -> Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(MetricsError::InvalidDelta(amount));
        }
        self.value.fetch_add(amount);
        Ok(())
    }

    /// Increment by 1.
    pub fn inc_one(&self) {
        self.value.fetch_add(1.0);
    }

    pub fn get(&self) -> f64 {
        self.value.load()
    }
}
