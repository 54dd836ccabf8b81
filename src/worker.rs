// Evaluation worker: one snapshot read + full check pass per tick.
// Reports go out on a channel; the binary prints them.

use crate::check::check_all;
use crate::discovery::discover_section;
use crate::models::{CycleReport, RawSnapshot, ThresholdSpec};
use crate::section::Section;
use crate::snapshot_repo::SnapshotRepo;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Duration, interval};

/// Channel capacity for cycle reports (backpressure if the printer falls behind).
pub const REPORT_CHANNEL_CAPACITY: usize = 16;

pub struct WorkerDeps {
    pub snapshot_repo: Arc<SnapshotRepo>,
    pub report_tx: mpsc::Sender<CycleReport>,
    pub shutdown_rx: oneshot::Receiver<()>,
}

/// What every cycle evaluates with.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub levels: ThresholdSpec,
    pub metric_name: String,
}

pub struct WorkerConfig {
    pub interval_ms: u64,
    pub settings: CheckSettings,
}

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Evaluate one raw snapshot. Rows that cannot be tied to an item are listed in `error`;
/// everything else is evaluated.
pub fn evaluate_snapshot(raw: &RawSnapshot, settings: &CheckSettings, timestamp: u64) -> CycleReport {
    let section = Section::parse(raw);
    let error = if section.errors.is_empty() {
        None
    } else {
        Some(
            section
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    };
    CycleReport {
        timestamp,
        discovered: discover_section(&section),
        items: check_all(&section, &settings.levels, &settings.metric_name),
        error,
    }
}

/// Load the snapshot and evaluate it. IO and decode failures are returned, not reported.
pub async fn run_cycle(repo: &SnapshotRepo, settings: &CheckSettings) -> anyhow::Result<CycleReport> {
    let raw = repo.load().await?;
    let report = evaluate_snapshot(&raw, settings, now_ms());
    tracing::debug!(
        operation = "run_cycle",
        items = report.items.len(),
        levels = !settings.levels.is_absent(),
        "Cycle evaluated"
    );
    Ok(report)
}

/// Spawns the worker. Stops on shutdown signal or when the report receiver is dropped.
pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        snapshot_repo,
        report_tx,
        mut shutdown_rx,
    } = deps;
    tokio::spawn(async move {
        let mut tick = interval(Duration::from_millis(config.interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                _ = tick.tick() => {
                    match run_cycle(&snapshot_repo, &config.settings).await {
                        Ok(report) => {
                            if report_tx.send(report).await.is_err() {
                                tracing::debug!("Report receiver dropped");
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, path = %snapshot_repo.path().display(), "Cycle skipped");
                        }
                    }
                }
            }
        }
        tracing::debug!("Worker shutting down");
    })
}
