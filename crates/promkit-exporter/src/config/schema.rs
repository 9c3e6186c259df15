use std::net::SocketAddr;

use serde::Deserialize;
use promkit_core::error::{MetricsError, Result};

use crate::router::validate_scrape_path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub demo: DemoSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
            demo: DemoSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::InvalidConfig(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.exporter.validate()?;
        self.demo.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_path")]
    pub path: String,

    /// Register the exporter's own scrape metrics in the served registry.
    #[serde(default = "default_self_metrics")]
    pub self_metrics: bool,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            path: default_path(),
            self_metrics: default_self_metrics(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        validate_scrape_path(&self.path)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            MetricsError::InvalidConfig(format!("exporter.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_path() -> String {
    "/metrics".into()
}
fn default_self_metrics() -> bool {
    true
}

/// Sample workload driven by the binary.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl DemoSection {
    pub fn validate(&self) -> Result<()> {
        if !(10..=60000).contains(&self.interval_ms) {
            return Err(MetricsError::InvalidConfig(
                "demo.interval_ms must be between 10 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_interval_ms() -> u64 {
    1000
}
