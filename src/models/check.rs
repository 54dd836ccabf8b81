// Threshold spec, status and check result models

use serde::{Deserialize, Serialize};

/// Configured (warn, crit) pair. Negative bounds are free-space levels, see `levels::classify_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<(f64, f64)>", into = "Option<(f64, f64)>")]
pub enum ThresholdSpec {
    #[default]
    Absent,
    Levels { warn: f64, crit: f64 },
}

impl ThresholdSpec {
    pub fn levels(warn: f64, crit: f64) -> Self {
        ThresholdSpec::Levels { warn, crit }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ThresholdSpec::Absent)
    }
}

impl From<Option<(f64, f64)>> for ThresholdSpec {
    fn from(value: Option<(f64, f64)>) -> Self {
        match value {
            Some((warn, crit)) => ThresholdSpec::Levels { warn, crit },
            None => ThresholdSpec::Absent,
        }
    }
}

impl From<ThresholdSpec> for Option<(f64, f64)> {
    fn from(value: ThresholdSpec) -> Self {
        match value {
            ThresholdSpec::Levels { warn, crit } => Some((warn, crit)),
            ThresholdSpec::Absent => None,
        }
    }
}

/// Check state; serializes to lowercase JSON (e.g. "crit"). `code()` gives the 0..3 state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warn,
    Crit,
    Unknown,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warn => 1,
            Status::Crit => 2,
            Status::Unknown => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredItem {
    pub name: String,
    pub params: ThresholdSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPoint {
    pub name: String,
    pub value: f64,
    pub warn: Option<f64>,
    pub crit: Option<f64>,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub status: Status,
    pub message: String,
    pub metrics: Vec<MetricPoint>,
}

impl CheckResult {
    /// Result without metrics, used for error outcomes.
    pub fn unknown(message: impl Into<String>) -> Self {
        CheckResult {
            status: Status::Unknown,
            message: message.into(),
            metrics: vec![],
        }
    }
}

/// One evaluated item within a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReport {
    pub item: String,
    pub result: CheckResult,
}

/// Everything one evaluation cycle produced. `error` is set when the snapshot could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    pub timestamp: u64,
    pub discovered: Vec<DiscoveredItem>,
    pub items: Vec<ItemReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
