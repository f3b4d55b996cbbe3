/// Persistence gateway between the in-memory habits and storage tiers
///
/// The remote service is authoritative when reachable; local storage keeps
/// the app usable offline; bundled seed data covers a first run. Failures
/// are never fatal here, they are logged and collected in a `SyncReport`.

pub mod gateway;
pub mod seed;

pub use gateway::*;
pub use seed::seed_habits;

use serde::Serialize;
use thiserror::Error;

use crate::remote::RemoteError;
use crate::storage::StorageError;

/// Errors from a single reconciliation step
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Local storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Remote service error: {0}")]
    Remote(#[from] RemoteError),
}

/// Where a loaded habit collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitSource {
    Remote,
    Local,
    Seed,
}

/// Where a loaded theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Remote,
    Local,
    System,
}

/// Which kind of write failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncOperation {
    LocalWrite,
    Create,
    Update,
    Delete,
    Theme,
}

/// One failed step of a sync cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncFailure {
    /// `None` for failures not tied to one record
    pub habit_id: Option<String>,
    pub operation: SyncOperation,
    pub message: String,
}

/// Structured outcome of one save cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyncReport {
    pub local_saved: bool,
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record_failure(
        &mut self,
        habit_id: Option<String>,
        operation: SyncOperation,
        error: &SyncError,
    ) {
        tracing::warn!(
            habit_id = habit_id.as_deref().unwrap_or("-"),
            operation = ?operation,
            "Sync step failed: {}",
            error
        );
        self.failures.push(SyncFailure {
            habit_id,
            operation,
            message: error.to_string(),
        });
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "local cache {}; {} created, {} updated, {} deleted remotely; {} failed",
            if self.local_saved { "saved" } else { "NOT saved" },
            self.created,
            self.updated,
            self.deleted,
            self.failures.len()
        )
    }
}
