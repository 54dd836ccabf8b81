// Domain models

mod check;
mod pool;

pub use check::{
    CheckResult, CycleReport, DiscoveredItem, ItemReport, MetricPoint, Status, ThresholdSpec,
};
pub use pool::{NamedEntity, RawSnapshot, ResourcePool};
