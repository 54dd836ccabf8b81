// Discovery: which labelled pools become monitored items.

use std::collections::HashSet;

use crate::models::{DiscoveredItem, ThresholdSpec};
use crate::section::{NameTable, PoolTable, Section};

/// One item per label whose id has a pool row, in naming-table order.
/// Ids present in only one table are skipped. A label repeated on later ids
/// is discovered once; the first id wins, as in `Section::resolve`.
pub fn discover(pools: &PoolTable, names: &NameTable) -> Vec<DiscoveredItem> {
    discover_by(names, |id| pools.contains_key(id))
}

/// Same as `discover`, also keeping items whose pool row failed to parse.
pub fn discover_section(section: &Section) -> Vec<DiscoveredItem> {
    discover_by(&section.names, |id| section.has_pool_row(id))
}

fn discover_by(names: &NameTable, has_pool: impl Fn(&str) -> bool) -> Vec<DiscoveredItem> {
    let mut seen: HashSet<&str> = HashSet::new();
    names
        .iter()
        .filter_map(|entity| {
            if !has_pool(&entity.id) {
                tracing::debug!(pool_id = %entity.id, label = %entity.label, "No pool row for label, skipping");
                return None;
            }
            if !seen.insert(entity.label.as_str()) {
                tracing::debug!(pool_id = %entity.id, label = %entity.label, "Label already taken by an earlier pool, skipping");
                return None;
            }
            Some(DiscoveredItem {
                name: entity.label.clone(),
                params: ThresholdSpec::Absent,
            })
        })
        .collect()
}
