/// Habit entity and related functionality
///
/// This module defines the core Habit record the user tracks week by week,
/// plus the creation and edit payloads validated at the input boundary.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, DomainError, Frequency, HabitId, WeekDays};

/// A habit represents something the user wants to do regularly
///
/// Each habit owns exactly one `WeekDays` record of this week's completions.
/// The optional counters are advisory statistics and are not kept in step
/// with `completed_days`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read 20 mins")
    pub name: String,
    /// Optional display colour as `#RRGGBB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub category: Category,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub completed_days: WeekDays,
    /// When this habit was created; never changes afterwards
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_days: Option<u32>,
}

/// Payload for creating a habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    pub color: Option<String>,
    pub frequency: Frequency,
    pub category: Category,
    pub start_date: NaiveDate,
}

/// Payload for editing an existing habit
#[derive(Debug, Clone, PartialEq)]
pub struct HabitEdit {
    pub id: HabitId,
    pub name: String,
    /// `None` keeps the current colour
    pub color: Option<String>,
}

impl NewHabit {
    /// Check the payload and return it with a trimmed name
    pub fn validate(mut self) -> Result<Self, DomainError> {
        self.name = validate_name(&self.name)?;
        if let Some(ref color) = self.color {
            validate_color(color)?;
        }
        Ok(self)
    }
}

impl HabitEdit {
    pub fn validate(mut self) -> Result<Self, DomainError> {
        self.name = validate_name(&self.name)?;
        if let Some(ref color) = self.color {
            validate_color(color)?;
        }
        Ok(self)
    }
}

impl Habit {
    /// Create a new local-only habit from a creation payload
    pub fn new(payload: NewHabit) -> Self {
        Self::with_created_at(payload, Utc::now())
    }

    /// Create a new local-only habit with a fixed creation time
    pub fn with_created_at(payload: NewHabit, created_at: DateTime<Utc>) -> Self {
        Self {
            id: HabitId::new_local(),
            name: payload.name,
            color: payload.color,
            frequency: payload.frequency,
            category: payload.category,
            start_date: payload.start_date,
            completed_days: WeekDays::empty(),
            created_at,
            total_days: Some(0),
            failure_days: Some(0),
        }
    }

    /// Flip one day's completion flag
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        self.completed_days.toggle(day)
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    /// Apply an already validated edit
    pub fn apply_edit(&mut self, edit: HabitEdit) {
        self.rename(edit.name);
        if let Some(color) = edit.color {
            self.color = Some(color);
        }
    }

    /// Clear every completion flag for the week
    pub fn reset_progress(&mut self) {
        self.completed_days = WeekDays::empty();
    }
}

// Validation helpers

/// Validate habit name according to business rules
fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidHabitName(
            "Habit name cannot be empty".to_string()
        ));
    }

    if trimmed.chars().count() > 100 {
        return Err(DomainError::InvalidHabitName(
            "Habit name cannot be longer than 100 characters".to_string()
        ));
    }

    Ok(trimmed.to_string())
}

fn validate_color(color: &str) -> Result<(), DomainError> {
    let hex = color.strip_prefix('#').unwrap_or("");
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DomainError::Validation {
            message: format!("Colour must look like #RRGGBB, got '{}'", color),
        });
    }
    Ok(())
}
