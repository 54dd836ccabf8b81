// Pool table: raw KiB rows into ResourcePool, keyed by pool id.

use std::collections::HashMap;

use crate::error::{CheckError, Table};
use crate::models::ResourcePool;

/// Raw values are KiB.
const KIB: u64 = 1024;

/// Column names for error messages, in raw order after the id.
const COLUMNS: [&str; 3] = ["used", "free", "reserved"];

pub type PoolTable = HashMap<String, ResourcePool>;

/// Parse `[id, used, free, reserved, ..]` rows. Extra columns are ignored; a duplicate id replaces the earlier row.
pub fn parse_pools<R, S>(rows: &[R]) -> Result<PoolTable, CheckError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut pools = PoolTable::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let pool = parse_row(index, row.as_ref())?;
        if let Some(prev) = pools.insert(pool.id.clone(), pool) {
            tracing::debug!(pool_id = %prev.id, row = index, "Duplicate pool id, keeping last row");
        }
    }
    Ok(pools)
}

/// Row-by-row outcome of a pool table where bad rows do not hide good ones.
#[derive(Debug, Clone, Default)]
pub struct PoolRows {
    pub pools: PoolTable,
    /// Rows that failed after their id was read, keyed by that id.
    pub failed: HashMap<String, CheckError>,
    /// Rows that failed before any id could be read.
    pub orphans: Vec<CheckError>,
}

/// Like `parse_pools`, but keeps going past bad rows. Last row per id wins, good or bad.
pub fn parse_pool_rows<R, S>(rows: &[R]) -> PoolRows
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut out = PoolRows::default();
    for (index, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let Some(id) = row.first().map(|id| id.as_ref().trim().to_string()) else {
            out.orphans
                .push(CheckError::parse(Table::Pools, index, "empty row"));
            continue;
        };
        match parse_row(index, row) {
            Ok(pool) => {
                out.failed.remove(&id);
                out.pools.insert(id, pool);
            }
            Err(e) => {
                tracing::debug!(pool_id = %id, error = %e, "Pool row rejected");
                out.pools.remove(&id);
                out.failed.insert(id, e);
            }
        }
    }
    out
}

fn parse_row<S: AsRef<str>>(index: usize, row: &[S]) -> Result<ResourcePool, CheckError> {
    if row.len() < 4 {
        return Err(CheckError::parse(
            Table::Pools,
            index,
            format!("expected at least 4 fields, got {}", row.len()),
        ));
    }
    let id = row[0].as_ref().trim().to_string();
    let mut values = [0u64; 3];
    for (slot, (raw, column)) in values.iter_mut().zip(row[1..4].iter().zip(COLUMNS)) {
        *slot = parse_kib(raw.as_ref())
            .map_err(|reason| CheckError::parse(Table::Pools, index, format!("{column}: {reason}")))?;
    }
    let [used_bytes, free_bytes, reserved_bytes] = values;
    Ok(ResourcePool {
        id,
        used_bytes,
        free_bytes,
        reserved_bytes,
    })
}

fn parse_kib(raw: &str) -> Result<u64, String> {
    let kib: u64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{raw:?} is not a non-negative integer"))?;
    kib.checked_mul(KIB)
        .ok_or_else(|| format!("{raw} KiB overflows a byte count"))
}
