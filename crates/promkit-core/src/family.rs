//! Metric families: one schema, many label-variant handles.

use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{MetricsError, Result};
use crate::label::{validate_label_names, validate_metric_name};
use crate::metric::histogram::normalize_buckets;
use crate::metric::{MetricHandle, MetricKind};

/// Label values in declared label-name order.
pub type LabelValues = Vec<String>;

/// Family descriptor. Two registrations are compatible only when their
/// descriptors compare equal (after bucket normalization).
#[derive(Debug, Clone, PartialEq)]
pub struct Desc {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub label_names: Vec<String>,
    /// Histogram upper bounds; empty for other kinds.
    pub buckets: Vec<f64>,
}

impl Desc {
    pub fn counter(name: &str, help: &str, label_names: &[&str]) -> Self {
        Self::new(name, help, MetricKind::Counter, label_names, Vec::new())
    }

    pub fn gauge(name: &str, help: &str, label_names: &[&str]) -> Self {
        Self::new(name, help, MetricKind::Gauge, label_names, Vec::new())
    }

    pub fn histogram(name: &str, help: &str, label_names: &[&str], buckets: &[f64]) -> Self {
        Self::new(name, help, MetricKind::Histogram, label_names, buckets.to_vec())
    }

    fn new(
        name: &str,
        help: &str,
        kind: MetricKind,
        label_names: &[&str],
        buckets: Vec<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            help: help.to_string(),
            kind,
            label_names: label_names.iter().map(|s| s.to_string()).collect(),
            buckets,
        }
    }

    /// Validate names and normalize histogram buckets.
    pub(crate) fn validated(mut self) -> Result<Self> {
        validate_metric_name(&self.name)?;
        validate_label_names(&self.label_names, self.kind)?;
        match self.kind {
            MetricKind::Histogram => self.buckets = normalize_buckets(&self.buckets)?,
            _ => self.buckets.clear(),
        }
        Ok(self)
    }

    /// Sample names this family puts on the wire.
    pub fn sample_names(&self) -> Vec<String> {
        match self.kind {
            MetricKind::Histogram => ["_bucket", "_sum", "_count"]
                .iter()
                .map(|s| format!("{}{}", self.name, s))
                .collect(),
            _ => vec![self.name.clone()],
        }
    }
}

/// All label variants of one metric name.
#[derive(Debug)]
pub struct MetricFamily {
    desc: Desc,
    bounds: Arc<[f64]>,
    children: DashMap<LabelValues, MetricHandle>,
}

impl MetricFamily {
    /// `desc` must already be validated.
    pub(crate) fn new(desc: Desc) -> Self {
        let bounds: Arc<[f64]> = desc.buckets.clone().into();
        let children = DashMap::new();
        // Unlabeled series exist from registration on, so they export 0.
        if desc.label_names.is_empty() {
            children.insert(Vec::new(), MetricHandle::new(desc.kind, &bounds));
        }
        Self { desc, bounds, children }
    }

    pub fn desc(&self) -> &Desc {
        &self.desc
    }

    pub fn name(&self) -> &str {
        &self.desc.name
    }

    pub fn help(&self) -> &str {
        &self.desc.help
    }

    pub fn kind(&self) -> MetricKind {
        self.desc.kind
    }

    pub fn label_names(&self) -> &[String] {
        &self.desc.label_names
    }

    /// Return the handle for `label_values`, creating a zero-valued one on
    /// first use. Racing creators all get the first inserted handle.
    pub fn get_or_create(&self, label_values: &[&str]) -> Result<MetricHandle> {
        let key = self.key(label_values)?;
        if let Some(h) = self.children.get(&key) {
            return Ok(h.value().clone());
        }
        let handle = self
            .children
            .entry(key)
            .or_insert_with(|| MetricHandle::new(self.desc.kind, &self.bounds))
            .value()
            .clone();
        Ok(handle)
    }

    /// Like [`get_or_create`](Self::get_or_create) with `(name, value)` pairs
    /// in any order.
    pub fn get_or_create_with(&self, labels: &[(&str, &str)]) -> Result<MetricHandle> {
        let values = self.order_pairs(labels)?;
        self.get_or_create(&values)
    }

    /// Drop the handle for `label_values`; returns whether it existed.
    pub fn remove(&self, label_values: &[&str]) -> Result<bool> {
        let key = self.key(label_values)?;
        Ok(self.children.remove(&key).is_some())
    }

    /// Snapshot of `(label values, handle)` pairs sorted by label values.
    pub fn list_handles(&self) -> Vec<(LabelValues, MetricHandle)> {
        let mut out: Vec<_> = self
            .children
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn key(&self, label_values: &[&str]) -> Result<LabelValues> {
        let expected = self.desc.label_names.len();
        if label_values.len() != expected {
            return Err(MetricsError::LabelCardinality {
                expected,
                got: label_values.len(),
            });
        }
        Ok(label_values.iter().map(|v| v.to_string()).collect())
    }

    fn order_pairs<'a>(&self, labels: &[(&str, &'a str)]) -> Result<Vec<&'a str>> {
        let expected = self.desc.label_names.len();
        if labels.len() != expected {
            return Err(MetricsError::LabelCardinality {
                expected,
                got: labels.len(),
            });
        }
        self.desc
            .label_names
            .iter()
            .map(|name| {
                labels
                    .iter()
                    .find(|(k, _)| k == name)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| MetricsError::InvalidLabelName(name.clone()))
            })
            .collect()
    }
}
