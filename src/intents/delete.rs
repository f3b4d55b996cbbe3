/// Intent for deleting a habit

use crate::domain::HabitId;
use crate::intents::IntentResponse;
use crate::remote::HabitApi;
use crate::storage::LocalStore;
use crate::sync::SyncOperation;
use crate::{HabitTracker, TrackerError};

impl<L: LocalStore, R: HabitApi> HabitTracker<L, R> {
    /// Remove a habit locally, then ask the remote service to drop it
    ///
    /// Local-only habits never reached the service, so no request is sent.
    pub async fn delete_habit(&mut self, habit_id: &HabitId) -> Result<IntentResponse, TrackerError> {
        let idx = self.position(habit_id)?;
        let removed = self.habits.remove(idx);
        tracing::info!("Deleting habit '{}' ({})", removed.name, removed.id);

        let mut sync = self.persist().await;
        if self.habits_loaded {
            match self.gateway.push_delete(&removed.id).await {
                Ok(true) => sync.deleted += 1,
                Ok(false) => tracing::debug!("Habit {} was never synced, no remote delete", removed.id),
                Err(e) => sync.record_failure(Some(removed.id.to_string()), SyncOperation::Delete, &e),
            }
        }

        Ok(IntentResponse {
            message: format!("🗑️ Deleted habit '{}'", removed.name),
            habit: Some(removed),
            sync,
        })
    }
}
