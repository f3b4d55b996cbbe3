/// Intent for adding a habit

use crate::domain::{Habit, HabitId, NewHabit};
use crate::intents::IntentResponse;
use crate::remote::HabitApi;
use crate::storage::LocalStore;
use crate::{HabitTracker, TrackerError};

impl<L: LocalStore, R: HabitApi> HabitTracker<L, R> {
    /// Add a habit with a fresh local id and an empty week
    ///
    /// The habit is visible immediately; the save cycle then tries to create
    /// it remotely and swaps in the acknowledged record on success.
    pub async fn add_habit(&mut self, payload: NewHabit) -> Result<IntentResponse, TrackerError> {
        let payload = payload.validate()?;
        let habit = Habit::new(payload);
        tracing::info!("Adding habit '{}' ({})", habit.name, habit.id);

        self.habits.push(habit);
        let idx = self.habits.len() - 1;

        let sync = self.persist().await;
        let habit = self.habits[idx].clone();

        let message = match habit.id {
            HabitId::Remote(_) => format!("✅ Created habit '{}' ({})", habit.name, habit.id),
            HabitId::Local(_) => format!("✅ Created habit '{}' ({}, saved offline)", habit.name, habit.id),
        };

        Ok(IntentResponse {
            message,
            habit: Some(habit),
            sync,
        })
    }
}
