// Error taxonomy of the check core

use crate::models::CheckResult;

/// Which raw table a parse error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Pools,
    Names,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::Pools => f.write_str("pool table"),
            Table::Names => f.write_str("naming table"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error("Malformed row {row} in {table}: {reason}")]
    Parse {
        table: Table,
        row: usize,
        reason: String,
    },

    #[error("Cannot calculate memory usage: Device reports total memory 0")]
    DegenerateCapacity { item: String },

    #[error("Item not found in monitoring data")]
    ItemNotFound { item: String },
}

impl CheckError {
    pub(crate) fn parse(table: Table, row: usize, reason: impl Into<String>) -> Self {
        CheckError::Parse {
            table,
            row,
            reason: reason.into(),
        }
    }

    /// Error outcome as an UNKNOWN result carrying the error text.
    pub fn into_result(self) -> CheckResult {
        CheckResult::unknown(self.to_string())
    }
}
