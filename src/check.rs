// Check entry points: resolve an item to its pool, evaluate, render.

use crate::discovery::discover_section;
use crate::error::CheckError;
use crate::levels::evaluate;
use crate::models::{CheckResult, ItemReport, ResourcePool, ThresholdSpec};
use crate::render::render;
use crate::section::Section;

/// Evaluate one pool. Used figure is used + reserved, capacity is used + free.
pub fn check_pool(
    item: &str,
    pool: &ResourcePool,
    params: &ThresholdSpec,
    metric_name: &str,
) -> Result<CheckResult, CheckError> {
    let used = pool.occupied_bytes();
    let total = pool.total_bytes();
    let evaluation = evaluate(item, used, total, params)?;
    Ok(render(used, total, &evaluation, metric_name))
}

pub fn try_check_item(
    item: &str,
    params: &ThresholdSpec,
    section: &Section,
    metric_name: &str,
) -> Result<CheckResult, CheckError> {
    match section.resolve(item) {
        Some(Ok(pool)) => check_pool(item, pool, params, metric_name),
        Some(Err(e)) => Err(e.clone()),
        None => Err(CheckError::ItemNotFound {
            item: item.to_string(),
        }),
    }
}

/// Like `try_check_item`, with errors turned into an UNKNOWN result.
pub fn check_item(
    item: &str,
    params: &ThresholdSpec,
    section: &Section,
    metric_name: &str,
) -> CheckResult {
    try_check_item(item, params, section, metric_name).unwrap_or_else(|e| {
        tracing::warn!(item = %item, error = %e, "Check returned unknown");
        e.into_result()
    })
}

/// Discover and check every item of `section` with the same params.
pub fn check_all(section: &Section, params: &ThresholdSpec, metric_name: &str) -> Vec<ItemReport> {
    discover_section(section)
        .into_iter()
        .map(|discovered| {
            let result = check_item(&discovered.name, params, section, metric_name);
            ItemReport {
                item: discovered.name,
                result,
            }
        })
        .collect()
}
