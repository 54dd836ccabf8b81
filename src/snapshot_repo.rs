// Collector snapshot file (JSON with both raw tables)

use crate::models::RawSnapshot;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::instrument;

pub struct SnapshotRepo {
    path: PathBuf,
}

impl SnapshotRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the snapshot. Rows are validated later, in `Section::parse`.
    #[instrument(skip(self), fields(repo = "snapshot", operation = "load"))]
    pub async fn load(&self) -> anyhow::Result<RawSnapshot> {
        let s = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read snapshot {}", self.path.display()))?;
        let snapshot = Self::decode(&s)
            .with_context(|| format!("decode snapshot {}", self.path.display()))?;
        tracing::debug!(
            pools = snapshot.pools.len(),
            names = snapshot.names.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn decode(s: &str) -> anyhow::Result<RawSnapshot> {
        Ok(serde_json::from_str(s)?)
    }
}
