//! Shared error type across promkit crates.

use thiserror::Error;

/// Stable error codes (used in logs and by tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Name already registered with a different descriptor.
    DuplicateName,
    /// Wrong number of label values.
    LabelCardinality,
    /// Counter increment that is negative or non-finite.
    InvalidDelta,
    /// Value not representable for this metric.
    InvalidValue,
    /// Metric name does not match `[a-zA-Z_][a-zA-Z0-9_]*`.
    InvalidName,
    /// Label name is malformed, reserved or repeated.
    InvalidLabelName,
    /// Histogram bucket bounds are unusable.
    InvalidBuckets,
    /// Handle kind differs from the one requested.
    KindMismatch,
    /// Configuration rejected.
    InvalidConfig,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::DuplicateName => "DUPLICATE_NAME",
            ErrorCode::LabelCardinality => "LABEL_CARDINALITY",
            ErrorCode::InvalidDelta => "INVALID_DELTA",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::InvalidLabelName => "INVALID_LABEL_NAME",
            ErrorCode::InvalidBuckets => "INVALID_BUCKETS",
            ErrorCode::KindMismatch => "KIND_MISMATCH",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by the core and the exporter.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("duplicate metric name: {0}")]
    DuplicateName(String),
    #[error("label cardinality mismatch: expected {expected} values, got {got}")]
    LabelCardinality { expected: usize, got: usize },
    #[error("invalid counter delta: {0}")]
    InvalidDelta(f64),
    #[error("invalid value: {0}")]
    InvalidValue(f64),
    #[error("invalid metric name: {0:?}")]
    InvalidName(String),
    #[error("invalid label name: {0:?}")]
    InvalidLabelName(String),
    #[error("invalid buckets: {0}")]
    InvalidBuckets(String),
    #[error("metric {name} is a {actual}, not a {requested}")]
    KindMismatch {
        name: String,
        actual: &'static str,
        requested: &'static str,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MetricsError::DuplicateName(_) => ErrorCode::DuplicateName,
            MetricsError::LabelCardinality { .. } => ErrorCode::LabelCardinality,
            MetricsError::InvalidDelta(_) => ErrorCode::InvalidDelta,
            MetricsError::InvalidValue(_) => ErrorCode::InvalidValue,
            MetricsError::InvalidName(_) => ErrorCode::InvalidName,
            MetricsError::InvalidLabelName(_) => ErrorCode::InvalidLabelName,
            MetricsError::InvalidBuckets(_) => ErrorCode::InvalidBuckets,
            MetricsError::KindMismatch { .. } => ErrorCode::KindMismatch,
            MetricsError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            MetricsError::Internal(_) => ErrorCode::Internal,
        }
    }
}
