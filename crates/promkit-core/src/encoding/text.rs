//! Text exposition format, version 0.0.4.
//!
//! ```text
//! # HELP <name> <escaped help>
//! # TYPE <name> <counter|gauge|histogram>
//! <name>{<label>="<escaped value>",...} <value>
//! ```
//!
//! Families come out sorted by name and series sorted by label values, so
//! unchanged state renders byte-identically.

use std::fmt::{self, Write};

use crate::family::MetricFamily;
use crate::label::{escape_help, escape_label_value};
use crate::metric::MetricHandle;
use crate::registry::Registry;

/// Content type served with [`render`] output.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Encode every family of `registry` into `out` in one pass.
pub fn encode<W: Write>(registry: &Registry, out: &mut W) -> fmt::Result {
    for (family, handles) in registry.collect() {
        encode_family(out, &family, &handles)?;
    }
    Ok(())
}

/// Encode into a fresh `String`.
pub fn render(registry: &Registry) -> String {
    let mut out = String::with_capacity(1024);
    let _ = encode(registry, &mut out);
    out
}

fn encode_family<W: Write>(
    out: &mut W,
    family: &MetricFamily,
    handles: &[(Vec<String>, MetricHandle)],
) -> fmt::Result {
    let name = family.name();
    writeln!(out, "# HELP {} {}", name, escape_help(family.help()))?;
    writeln!(out, "# TYPE {} {}", name, family.kind().as_str())?;

    let label_names = family.label_names();
    for (values, handle) in handles {
        let labels = LabelSet { names: label_names, values };
        match handle {
            MetricHandle::Counter(c) => write_sample(out, name, "", &labels, None, Num(c.get()))?,
            MetricHandle::Gauge(g) => write_sample(out, name, "", &labels, None, Num(g.get()))?,
            MetricHandle::Histogram(h) => {
                let snap = h.snapshot();
                for (bound, cumulative) in &snap.buckets {
                    let le = Num(*bound).to_string();
                    write_sample(out, name, "_bucket", &labels, Some(le.as_str()), cumulative)?;
                }
                write_sample(out, name, "_sum", &labels, None, Num(snap.sum))?;
                write_sample(out, name, "_count", &labels, None, snap.count)?;
            }
        }
    }
    Ok(())
}

struct LabelSet<'a> {
    names: &'a [String],
    values: &'a [String],
}

fn write_sample<W: Write>(
    out: &mut W,
    name: &str,
    suffix: &str,
    labels: &LabelSet<'_>,
    le: Option<&str>,
    value: impl fmt::Display,
) -> fmt::Result {
    write!(out, "{name}{suffix}")?;
    if !labels.names.is_empty() || le.is_some() {
        out.write_char('{')?;
        let mut first = true;
        for (k, v) in labels.names.iter().zip(labels.values) {
            if !first {
                out.write_char(',')?;
            }
            first = false;
            write!(out, "{}=\"{}\"", k, escape_label_value(v))?;
        }
        if let Some(le) = le {
            if !first {
                out.write_char(',')?;
            }
            write!(out, "le=\"{le}\"")?;
        }
        out.write_char('}')?;
    }
    writeln!(out, " {value}")
}

/// Sample value formatting: `+Inf`, `-Inf`, `NaN`, otherwise the shortest
/// round-tripping decimal (`3`, `0.25`).
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")
        } else if v == f64::INFINITY {
            f.write_str("+Inf")
        } else if v == f64::NEG_INFINITY {
            f.write_str("-Inf")
        } else {
            write!(f, "{v}")
        }
    }
}
