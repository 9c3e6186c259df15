//! Kind-checked views over a [`MetricFamily`].

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{MetricsError, Result};
use crate::family::MetricFamily;
use crate::metric::{Counter, Gauge, Histogram, MetricHandle, MetricKind};

/// Metric types that can be pulled out of a [`MetricHandle`].
pub trait TypedMetric: Sized {
    const KIND: MetricKind;
    fn from_handle(handle: MetricHandle) -> Option<Arc<Self>>;
}

impl TypedMetric for Counter {
    const KIND: MetricKind = MetricKind::Counter;
    fn from_handle(handle: MetricHandle) -> Option<Arc<Self>> {
        match handle {
            MetricHandle::Counter(c) => Some(c),
            _ => None,
        }
    }
}

impl TypedMetric for Gauge {
    const KIND: MetricKind = MetricKind::Gauge;
    fn from_handle(handle: MetricHandle) -> Option<Arc<Self>> {
        match handle {
            MetricHandle::Gauge(g) => Some(g),
            _ => None,
        }
    }
}

impl TypedMetric for Histogram {
    const KIND: MetricKind = MetricKind::Histogram;
    fn from_handle(handle: MetricHandle) -> Option<Arc<Self>> {
        match handle {
            MetricHandle::Histogram(h) => Some(h),
            _ => None,
        }
    }
}

/// A family whose handles are all `M`.
#[derive(Debug)]
pub struct MetricVec<M> {
    family: Arc<MetricFamily>,
    _kind: PhantomData<fn() -> M>,
}

pub type CounterVec = MetricVec<Counter>;
pub type GaugeVec = MetricVec<Gauge>;
pub type HistogramVec = MetricVec<Histogram>;

impl<M> Clone for MetricVec<M> {
    fn clone(&self) -> Self {
        Self {
            family: Arc::clone(&self.family),
            _kind: PhantomData,
        }
    }
}

impl<M: TypedMetric> MetricVec<M> {
    pub fn new(family: Arc<MetricFamily>) -> Result<Self> {
        if family.kind() != M::KIND {
            return Err(kind_mismatch::<M>(&family));
        }
        Ok(Self {
            family,
            _kind: PhantomData,
        })
    }

    pub fn with_label_values(&self, label_values: &[&str]) -> Result<Arc<M>> {
        let handle = self.family.get_or_create(label_values)?;
        M::from_handle(handle).ok_or_else(|| kind_mismatch::<M>(&self.family))
    }

    pub fn with_labels(&self, labels: &[(&str, &str)]) -> Result<Arc<M>> {
        let handle = self.family.get_or_create_with(labels)?;
        M::from_handle(handle).ok_or_else(|| kind_mismatch::<M>(&self.family))
    }

    pub fn remove(&self, label_values: &[&str]) -> Result<bool> {
        self.family.remove(label_values)
    }

    pub fn family(&self) -> &Arc<MetricFamily> {
        &self.family
    }
}

fn kind_mismatch<M: TypedMetric>(family: &MetricFamily) -> MetricsError {
    MetricsError::KindMismatch {
        name: family.name().to_string(),
        actual: family.kind().as_str(),
        requested: M::KIND.as_str(),
    }
}
