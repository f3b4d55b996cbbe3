/// Analytics engine for the weekly overview
///
/// This module rolls the per-habit statistics up into the numbers shown in
/// the header of the habit list.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Habit, StreakPolicy, WeeklyStats};

/// Aggregate view over all habits for the current week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub total_habits: usize,
    pub completed_habits: usize,
    /// Mean completion percentage, 0 when there are no habits
    pub average_completion: u8,
    pub best_streak: u8,
    pub per_habit: Vec<WeeklyStats>,
    pub insight: String,
}

/// Analytics engine for processing habit data
pub struct AnalyticsEngine {
    policy: StreakPolicy,
}

impl AnalyticsEngine {
    pub fn new(policy: StreakPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> StreakPolicy {
        self.policy
    }

    /// Summarize every habit's week
    pub fn summarize(&self, habits: &[Habit], today: NaiveDate) -> WeeklySummary {
        let per_habit: Vec<WeeklyStats> = habits
            .iter()
            .map(|h| WeeklyStats::calculate(h, self.policy, today))
            .collect();

        let total_habits = per_habit.len();
        let completed_habits = per_habit.iter().filter(|s| s.fully_completed).count();
        let average_completion = if total_habits == 0 {
            0
        } else {
            let sum: usize = per_habit.iter().map(|s| s.completion_percentage as usize).sum();
            ((sum + total_habits / 2) / total_habits) as u8
        };
        let best_streak = per_habit.iter().map(|s| s.streak).max().unwrap_or(0);

        let insight = Self::insight(total_habits, completed_habits, average_completion);

        WeeklySummary {
            total_habits,
            completed_habits,
            average_completion,
            best_streak,
            per_habit,
            insight,
        }
    }

    fn insight(total: usize, completed: usize, average: u8) -> String {
        if total == 0 {
            "Start by creating your first habit to track!".to_string()
        } else if completed == total {
            "Every habit completed this week. Outstanding!".to_string()
        } else if average == 0 {
            "Great job creating habits! Now start ticking off days.".to_string()
        } else {
            format!(
                "{} of {} habits fully done, {}% of the week completed on average.",
                completed, total, average
            )
        }
    }
}
