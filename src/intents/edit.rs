/// Intents that change existing habits: edit, toggle a day, weekly reset

use chrono::Weekday;

use crate::domain::{day_name, HabitEdit, HabitId};
use crate::intents::IntentResponse;
use crate::remote::HabitApi;
use crate::storage::LocalStore;
use crate::{HabitTracker, TrackerError};

impl<L: LocalStore, R: HabitApi> HabitTracker<L, R> {
    /// Rename a habit and optionally change its colour
    pub async fn edit_habit(&mut self, edit: HabitEdit) -> Result<IntentResponse, TrackerError> {
        let edit = edit.validate()?;
        let idx = self.position(&edit.id)?;
        tracing::info!("Editing habit {}", edit.id);

        self.habits[idx].apply_edit(edit);
        let sync = self.persist().await;
        let habit = self.habits[idx].clone();

        Ok(IntentResponse {
            message: format!("✏️ Updated habit '{}'", habit.name),
            habit: Some(habit),
            sync,
        })
    }

    /// Flip one day of the current week for a habit
    pub async fn toggle_day(
        &mut self,
        habit_id: &HabitId,
        day: Weekday,
    ) -> Result<IntentResponse, TrackerError> {
        let idx = self.position(habit_id)?;
        let done = self.habits[idx].toggle_day(day);
        tracing::debug!("Habit {} {} -> {}", habit_id, day_name(day), done);

        let sync = self.persist().await;
        let habit = self.habits[idx].clone();

        let message = if done {
            format!("✅ Marked '{}' done on {}", habit.name, day_name(day))
        } else {
            format!("↩️ Cleared '{}' on {}", habit.name, day_name(day))
        };

        Ok(IntentResponse {
            message,
            habit: Some(habit),
            sync,
        })
    }

    /// Clear the week for every habit
    pub async fn reset_progress(&mut self) -> IntentResponse {
        tracing::info!("Resetting weekly progress for {} habits", self.habits.len());
        for habit in &mut self.habits {
            habit.reset_progress();
        }

        let sync = self.persist().await;
        IntentResponse {
            message: format!("🔄 Reset weekly progress for {} habits", self.habits.len()),
            habit: None,
            sync,
        }
    }
}
