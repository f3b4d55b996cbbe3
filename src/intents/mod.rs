/// User intents applied to the tracker state
///
/// Each intent mutates the in-memory habits first, then runs the save
/// protocol. Remote failures never roll back the local change; they show up
/// in the returned `SyncReport`.

pub mod add;
pub mod delete;
pub mod edit;
pub mod theme;
pub mod view;

use serde::Serialize;

use crate::domain::Habit;
use crate::sync::SyncReport;

/// Result of applying one intent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentResponse {
    pub message: String,
    /// The affected habit as it stands after syncing, when there is one
    pub habit: Option<Habit>,
    pub sync: SyncReport,
}
