//! Registry of metric families.
//!
//! The name map sits behind a `RwLock` that is only taken for registration,
//! unregistration and the instant a scrape copies the family list. Handle
//! mutation never touches it.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{MetricsError, Result};
use crate::family::{Desc, LabelValues, MetricFamily};
use crate::metric::histogram::DEFAULT_BUCKETS;
use crate::metric::MetricHandle;
use crate::typed::{CounterVec, GaugeVec, HistogramVec, MetricVec};

#[derive(Debug, Default)]
pub struct Registry {
    families: RwLock<BTreeMap<String, Arc<MetricFamily>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family. Re-registering an identical descriptor returns the
    /// existing family; any other clash is a `DuplicateName` error.
    pub fn register(&self, desc: Desc) -> Result<Arc<MetricFamily>> {
        let desc = desc.validated()?;
        let mut families = self.families.write();

        if let Some(existing) = families.get(&desc.name) {
            if existing.desc() == &desc {
                return Ok(Arc::clone(existing));
            }
            tracing::warn!(metric = %desc.name, "metric re-registered with a different descriptor");
            return Err(MetricsError::DuplicateName(desc.name));
        }

        let samples = desc.sample_names();
        for other in families.values() {
            if other.desc().sample_names().iter().any(|s| samples.contains(s)) {
                tracing::warn!(metric = %desc.name, other = %other.name(), "metric sample names collide");
                return Err(MetricsError::DuplicateName(desc.name));
            }
        }

        tracing::debug!(metric = %desc.name, kind = desc.kind.as_str(), "metric registered");
        let family = Arc::new(MetricFamily::new(desc));
        families.insert(family.name().to_string(), Arc::clone(&family));
        Ok(family)
    }

    /// Remove a family; absent names are ignored. Returns whether one was removed.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.families.write().remove(name).is_some();
        if removed {
            tracing::debug!(metric = name, "metric unregistered");
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<Arc<MetricFamily>> {
        self.families.read().get(name).cloned()
    }

    /// Families sorted by name, as of this call.
    pub fn families(&self) -> Vec<Arc<MetricFamily>> {
        self.families.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.families.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.read().is_empty()
    }

    /// Freeze the family list and walk it lazily, listing each family's
    /// handles as it is reached. Every call starts from current state.
    pub fn collect(&self) -> Collect {
        Collect {
            families: self.families().into_iter(),
        }
    }

    pub fn counter_vec(&self, name: &str, help: &str, label_names: &[&str]) -> Result<CounterVec> {
        MetricVec::new(self.register(Desc::counter(name, help, label_names))?)
    }

    pub fn gauge_vec(&self, name: &str, help: &str, label_names: &[&str]) -> Result<GaugeVec> {
        MetricVec::new(self.register(Desc::gauge(name, help, label_names))?)
    }

    pub fn histogram_vec(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
        buckets: &[f64],
    ) -> Result<HistogramVec> {
        MetricVec::new(self.register(Desc::histogram(name, help, label_names, buckets))?)
    }

    /// Histogram with [`DEFAULT_BUCKETS`].
    pub fn default_histogram_vec(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
    ) -> Result<HistogramVec> {
        self.histogram_vec(name, help, label_names, &DEFAULT_BUCKETS)
    }
}

/// Iterator returned by [`Registry::collect`].
pub struct Collect {
    families: std::vec::IntoIter<Arc<MetricFamily>>,
}

impl Iterator for Collect {
    type Item = (Arc<MetricFamily>, Vec<(LabelValues, MetricHandle)>);

    fn next(&mut self) -> Option<Self::Item> {
        let family = self.families.next()?;
        let handles = family.list_handles();
        Some((family, handles))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.families.size_hint()
    }
}
