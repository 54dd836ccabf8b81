use anyhow::Result;
use poolcheck::*;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn print_report(report: &models::CycleReport) -> Result<()> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::AppConfig::load()?;
    tracing::info!(
        service = version::NAME,
        version = version::VERSION,
        source = %app_config.source.path,
        "Starting"
    );

    let snapshot_repo = Arc::new(snapshot_repo::SnapshotRepo::new(&app_config.source.path));
    let settings = worker::CheckSettings {
        levels: app_config.check.levels,
        metric_name: app_config.check.metric_name.clone(),
    };

    if app_config.monitoring.once {
        let report = worker::run_cycle(&snapshot_repo, &settings).await?;
        return print_report(&report);
    }

    let (report_tx, mut report_rx) = mpsc::channel(worker::REPORT_CHANNEL_CAPACITY);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let worker_handle = worker::spawn(
        worker::WorkerDeps {
            snapshot_repo,
            report_tx,
            shutdown_rx,
        },
        worker::WorkerConfig {
            interval_ms: app_config.monitoring.interval_ms,
            settings,
        },
    );

    let printer = async {
        while let Some(report) = report_rx.recv().await {
            if let Err(e) = print_report(&report) {
                tracing::warn!(error = %e, "Failed to write report");
            }
        }
    };

    tokio::select! {
        _ = printer => {}
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
        }
    }

    let _ = shutdown_tx.send(());
    let _ = worker_handle.await;
    Ok(())
}
