//! Threshold evaluation.
//!
//! Bounds of a `ThresholdSpec` come in three flavours, told apart by sign and magnitude:
//!
//! - `value >= 0`: used-space percentage, applied as is.
//! - `-100 <= value < 0`: free-space percentage; applied as `100 - |value|` used.
//! - `value < -100`: free space in MB; applied as the used percentage that leaves `|value|` MB free.
//!
//! Each bound is classified on its own, so a pair may mix flavours.

use crate::error::CheckError;
use crate::models::{Status, ThresholdSpec};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Largest magnitude still read as a percentage.
const PERCENT_LIMIT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    UsedPercent(f64),
    FreePercent(f64),
    FreeMegabytes(f64),
}

pub fn classify_bound(value: f64) -> Bound {
    if value >= 0.0 {
        Bound::UsedPercent(value)
    } else if value.abs() <= PERCENT_LIMIT {
        Bound::FreePercent(value.abs())
    } else {
        Bound::FreeMegabytes(value.abs())
    }
}

impl Bound {
    /// The used-space percentage this bound stands for, given the pool capacity.
    pub fn used_percent(self, total_bytes: u64) -> f64 {
        match self {
            Bound::UsedPercent(pct) => pct,
            Bound::FreePercent(pct) => PERCENT_LIMIT - pct,
            Bound::FreeMegabytes(mb) => {
                let total_mb = total_bytes as f64 / BYTES_PER_MB;
                PERCENT_LIMIT * (total_mb - mb) / total_mb
            }
        }
    }
}

/// Warn/crit as used-space percentages, after conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedLevels {
    pub warn: f64,
    pub crit: f64,
}

impl AppliedLevels {
    pub fn from_spec(spec: &ThresholdSpec, total_bytes: u64) -> Option<Self> {
        match *spec {
            ThresholdSpec::Absent => None,
            ThresholdSpec::Levels { warn, crit } => Some(AppliedLevels {
                warn: classify_bound(warn).used_percent(total_bytes),
                crit: classify_bound(crit).used_percent(total_bytes),
            }),
        }
    }

    pub fn status_for(&self, utilization: f64) -> Status {
        if utilization >= self.crit {
            Status::Crit
        } else if utilization >= self.warn {
            Status::Warn
        } else {
            Status::Ok
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub utilization: f64,
    pub status: Status,
    pub levels: Option<AppliedLevels>,
}

pub fn utilization_percent(used_bytes: u64, total_bytes: u64) -> Option<f64> {
    if total_bytes == 0 {
        return None;
    }
    Some(used_bytes as f64 * 100.0 / total_bytes as f64)
}

/// Evaluate `used_bytes` of `total_bytes` against `spec`. `item` only labels the error.
pub fn evaluate(
    item: &str,
    used_bytes: u64,
    total_bytes: u64,
    spec: &ThresholdSpec,
) -> Result<Evaluation, CheckError> {
    let utilization =
        utilization_percent(used_bytes, total_bytes).ok_or_else(|| CheckError::DegenerateCapacity {
            item: item.to_string(),
        })?;
    let levels = AppliedLevels::from_spec(spec, total_bytes);
    let status = levels.map_or(Status::Ok, |l| l.status_for(utilization));
    Ok(Evaluation {
        utilization,
        status,
        levels,
    })
}
