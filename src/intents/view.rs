/// Read-side intents: the visible list, statistics and manual sync

use chrono::NaiveDate;

use crate::analytics::WeeklySummary;
use crate::domain::{visible_habits, Habit, HabitId, HabitQuery, WeeklyStats};
use crate::remote::HabitApi;
use crate::storage::LocalStore;
use crate::sync::SyncReport;
use crate::{HabitTracker, TrackerError};

impl<L: LocalStore, R: HabitApi> HabitTracker<L, R> {
    /// Habits to display for a search, filter and sort selection
    pub fn visible(&self, query: &HabitQuery, today: NaiveDate) -> Vec<Habit> {
        visible_habits(&self.habits, query, self.streak_policy(), today)
    }

    pub fn habit_stats(&self, habit_id: &HabitId, today: NaiveDate) -> Result<WeeklyStats, TrackerError> {
        let idx = self.position(habit_id)?;
        Ok(WeeklyStats::calculate(&self.habits[idx], self.streak_policy(), today))
    }

    pub fn summary(&self, today: NaiveDate) -> WeeklySummary {
        self.analytics.summarize(&self.habits, today)
    }

    /// Run a save cycle without changing anything
    ///
    /// Pushes habits that were created or changed while offline.
    pub async fn sync(&mut self) -> SyncReport {
        tracing::info!("Manual sync of {} habits", self.habits.len());
        self.persist().await
    }
}
