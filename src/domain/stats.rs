/// Derived statistics for a habit's week
///
/// Everything here is a pure function of a habit (and, for the
/// `EndingToday` streak policy, an explicit reference date).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Habit, HabitId, WeekDays, WEEK_ORDER};

const DAYS_IN_WEEK: u8 = 7;

/// How a streak is measured over a single week of flags
///
/// One policy is chosen per tracker and used for every habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StreakPolicy {
    /// Longest run of completed days scanning Monday to Sunday, no wrap
    #[default]
    LongestRun,
    /// Consecutive completed days walking back from today, wrapping the week
    EndingToday,
}

impl fmt::Display for StreakPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreakPolicy::LongestRun => f.write_str("longest-run"),
            StreakPolicy::EndingToday => f.write_str("ending-today"),
        }
    }
}

impl FromStr for StreakPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "longest-run" => Ok(StreakPolicy::LongestRun),
            "ending-today" => Ok(StreakPolicy::EndingToday),
            _ => Err(DomainError::Validation {
                message: format!(
                    "Invalid streak policy '{}'. Valid options: longest-run, ending-today", s
                ),
            }),
        }
    }
}

/// Number of days completed this week (0-7)
pub fn completed_count(habit: &Habit) -> u8 {
    habit.completed_days.completed_count()
}

/// Share of the week completed, rounded half-up to a whole percent
pub fn completion_percentage(habit: &Habit) -> u8 {
    let count = completed_count(habit) as u32;
    // round(count * 100 / 7) with half-up rounding, in integers
    ((count * 200 + DAYS_IN_WEEK as u32) / (2 * DAYS_IN_WEEK as u32)) as u8
}

/// Whether every day of the week is completed
pub fn is_fully_completed(habit: &Habit) -> bool {
    completed_count(habit) == DAYS_IN_WEEK
}

/// Streak length for a habit under the given policy
pub fn streak(habit: &Habit, policy: StreakPolicy, today: NaiveDate) -> u8 {
    match policy {
        StreakPolicy::LongestRun => longest_run(&habit.completed_days),
        StreakPolicy::EndingToday => run_ending_on(&habit.completed_days, today),
    }
}

/// Longest contiguous run of completed days, Monday to Sunday
fn longest_run(week: &WeekDays) -> u8 {
    let mut longest = 0;
    let mut current = 0;
    for (_, done) in week.iter() {
        if done {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Consecutive completed days counting back from `today`'s weekday
fn run_ending_on(week: &WeekDays, today: NaiveDate) -> u8 {
    let start = today.weekday().num_days_from_monday() as usize;
    let mut run = 0;
    for offset in 0..WEEK_ORDER.len() {
        let day = WEEK_ORDER[(start + WEEK_ORDER.len() - offset) % WEEK_ORDER.len()];
        if !week.get(day) {
            break;
        }
        run += 1;
    }
    run
}

/// All derived statistics for one habit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStats {
    pub habit_id: HabitId,
    pub completed_days: u8,
    pub completion_percentage: u8,
    pub fully_completed: bool,
    pub streak: u8,
    /// Advisory counters carried on the record
    pub total_days: u32,
    pub failure_days: u32,
}

impl WeeklyStats {
    pub fn calculate(habit: &Habit, policy: StreakPolicy, today: NaiveDate) -> Self {
        Self {
            habit_id: habit.id.clone(),
            completed_days: completed_count(habit),
            completion_percentage: completion_percentage(habit),
            fully_completed: is_fully_completed(habit),
            streak: streak(habit, policy, today),
            total_days: habit.total_days.unwrap_or(0),
            failure_days: habit.failure_days.unwrap_or(0),
        }
    }

    /// Short encouragement based on how far through the week the habit is
    pub fn motivational_message(&self) -> String {
        match self.completed_days {
            0 => "Ready to start! Every week begins with a single day.".to_string(),
            1 => "Great start! One day down, keep the momentum going.".to_string(),
            2..=4 => format!("Nice work! {} days done this week.", self.completed_days),
            5 | 6 => format!("Almost there! {} of 7 days complete.", self.completed_days),
            _ => "Perfect week! Every day completed.".to_string(),
        }
    }
}
