/// Filtering and ordering of the habit list for display

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{completed_count, streak, DomainError, Habit, StreakPolicy};

/// Which habits to keep based on this week's completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl FromStr for FilterKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterKind::All),
            "completed" => Ok(FilterKind::Completed),
            "incomplete" => Ok(FilterKind::Incomplete),
            _ => Err(DomainError::Validation {
                message: format!("Invalid filter '{}'. Valid options: all, completed, incomplete", s),
            }),
        }
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKind {
    Name,
    Streak,
    /// Newest first
    #[default]
    CreatedAt,
}

impl FromStr for SortKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKind::Name),
            "streak" => Ok(SortKind::Streak),
            "created" | "createdat" | "created-at" => Ok(SortKind::CreatedAt),
            _ => Err(DomainError::Validation {
                message: format!("Invalid sort '{}'. Valid options: name, streak, created", s),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitQuery {
    pub search_term: String,
    pub filter: FilterKind,
    pub sort: SortKind,
}

impl HabitQuery {
    fn matches(&self, habit: &Habit, needle: &str) -> bool {
        if !habit.name.to_lowercase().contains(needle) {
            return false;
        }
        match self.filter {
            FilterKind::All => true,
            FilterKind::Completed => completed_count(habit) == 7,
            FilterKind::Incomplete => completed_count(habit) < 7,
        }
    }
}

/// Case-insensitive name ordering; on a tie lowercase sorts first
///
/// Lowercased names are compared by code point, so accented letters sort
/// after the ASCII alphabet.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Produce the ordered list of habits to display
///
/// Sorting is stable, so habits with equal keys keep their input order.
pub fn visible_habits(
    habits: &[Habit],
    query: &HabitQuery,
    policy: StreakPolicy,
    today: NaiveDate,
) -> Vec<Habit> {
    let needle = query.search_term.to_lowercase();
    let mut visible: Vec<Habit> = habits
        .iter()
        .filter(|h| query.matches(h, &needle))
        .cloned()
        .collect();

    match query.sort {
        SortKind::Name => visible.sort_by(|a, b| collate(&a.name, &b.name)),
        SortKind::Streak => visible.sort_by_key(|h| std::cmp::Reverse(streak(h, policy, today))),
        SortKind::CreatedAt => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    visible
}
