// Pool, naming and snapshot models

use serde::{Deserialize, Serialize};

/// One memory pool as reported by the device, scaled to bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePool {
    pub id: String,
    pub used_bytes: u64,
    pub free_bytes: u64,
    /// Kernel-reserved memory (fourth raw column). Counts as occupied, not as capacity.
    pub reserved_bytes: u64,
}

impl ResourcePool {
    /// Capacity of the pool: used + free.
    pub fn total_bytes(&self) -> u64 {
        self.used_bytes.saturating_add(self.free_bytes)
    }

    /// What the check reports as used: used + reserved.
    pub fn occupied_bytes(&self) -> u64 {
        self.used_bytes.saturating_add(self.reserved_bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedEntity {
    pub id: String,
    pub label: String,
}

/// Both raw tables as written by the collector; every cell is a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    #[serde(default)]
    pub pools: Vec<Vec<String>>,
    #[serde(default)]
    pub names: Vec<Vec<String>>,
}
