// Parsed collector output: pool table + naming table.

mod names;
mod pools;

pub use names::{NameTable, parse_name_rows, parse_names};
pub use pools::{PoolRows, PoolTable, parse_pool_rows, parse_pools};

use std::collections::HashMap;

use crate::error::CheckError;
use crate::models::{RawSnapshot, ResourcePool};

#[derive(Debug, Clone, Default)]
pub struct Section {
    pub pools: PoolTable,
    /// Pool ids whose row failed to parse; their items report UNKNOWN.
    pub failed: HashMap<String, CheckError>,
    pub names: NameTable,
    /// Row errors that cannot be tied to any item.
    pub errors: Vec<CheckError>,
}

impl Section {
    /// Parse both tables row by row. A bad row only affects the item it belongs to.
    pub fn parse(raw: &RawSnapshot) -> Self {
        let PoolRows {
            pools,
            failed,
            orphans,
        } = parse_pool_rows(&raw.pools);
        let (names, name_errors) = parse_name_rows(&raw.names);
        let errors: Vec<CheckError> = orphans.into_iter().chain(name_errors).collect();
        for e in &errors {
            tracing::warn!(error = %e, "Row dropped");
        }
        Section {
            pools,
            failed,
            names,
            errors,
        }
    }

    /// Whether `id` has a pool row, parsed or failed.
    pub fn has_pool_row(&self, id: &str) -> bool {
        self.pools.contains_key(id) || self.failed.contains_key(id)
    }

    /// Pool behind an item label: the first id (table order) with this label that has a pool row.
    /// `Err` when that row failed to parse.
    pub fn resolve(&self, label: &str) -> Option<Result<&ResourcePool, &CheckError>> {
        self.names.ids_for(label).find_map(|id| {
            self.pools
                .get(id)
                .map(Ok)
                .or_else(|| self.failed.get(id).map(Err))
        })
    }
}
