use crate::models::ThresholdSpec;
use crate::render::DEFAULT_METRIC_NAME;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub check: CheckConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Snapshot JSON written by the collector.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    #[serde(default = "default_metric_name")]
    pub metric_name: String,
    /// Optional `[warn, crit]`; absent means always OK.
    #[serde(default)]
    pub levels: ThresholdSpec,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            metric_name: default_metric_name(),
            levels: ThresholdSpec::Absent,
        }
    }
}

fn default_metric_name() -> String {
    DEFAULT_METRIC_NAME.into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub interval_ms: u64,
    /// Run one cycle and exit instead of looping.
    #[serde(default)]
    pub once: bool,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.source.path.is_empty(), "source.path must be non-empty");
        anyhow::ensure!(
            !self.check.metric_name.is_empty(),
            "check.metric_name must be non-empty"
        );
        if let ThresholdSpec::Levels { warn, crit } = self.check.levels {
            anyhow::ensure!(
                warn.is_finite() && crit.is_finite(),
                "check.levels must be finite numbers, got ({}, {})",
                warn,
                crit
            );
        }
        anyhow::ensure!(
            self.monitoring.interval_ms > 0,
            "monitoring.interval_ms must be > 0, got {}",
            self.monitoring.interval_ms
        );
        Ok(())
    }
}
