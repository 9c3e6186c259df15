//! Metric/label name rules and text escaping.

use crate::error::{MetricsError, Result};
use crate::metric::MetricKind;

/// `[a-zA-Z_][a-zA-Z0-9_]*`
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn validate_metric_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(MetricsError::InvalidName(name.to_string()))
    }
}

/// Label names must be well formed, not reserved (`__*`, and `le` on
/// histograms) and unique within the family.
pub fn validate_label_names(names: &[String], kind: MetricKind) -> Result<()> {
    for (i, name) in names.iter().enumerate() {
        let reserved = name.starts_with("__") || (kind == MetricKind::Histogram && name == "le");
        if !is_valid_name(name) || reserved || names[..i].contains(name) {
            return Err(MetricsError::InvalidLabelName(name.clone()));
        }
    }
    Ok(())
}

/// Escape `\`, `"` and newline in a label value.
pub fn escape_label_value(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape `\` and newline in HELP text.
pub fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}
