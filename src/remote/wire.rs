/// Wire format of the remote habit service
///
/// Remote records use a snake_case `start_date` and numeric ids, while the
/// local model uses `startDate` and `HabitId`. Decoding is lenient: missing
/// or unknown fields fall back to defaults instead of failing the record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Category, Frequency, Habit, HabitId, Theme, WeekDays};

/// A habit as sent to and received from the remote service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiHabit {
    /// Absent for records the service has not seen yet
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "remote_id")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, rename = "completedDays")]
    pub completed_days: Option<WeekDays>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, rename = "totalDays")]
    pub total_days: Option<u32>,
    #[serde(default, rename = "failureDays")]
    pub failure_days: Option<u32>,
}

/// Body of `GET/PUT /settings/theme`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSetting {
    pub theme: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

/// Accept ids sent either as numbers or as numeric strings
fn remote_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Number(n)) => Some(n),
        Some(RawId::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

impl ApiHabit {
    /// Wire form of a local record
    pub fn from_habit(habit: &Habit) -> Self {
        Self {
            id: habit.id.remote_id(),
            name: Some(habit.name.clone()),
            color: habit.color.clone(),
            frequency: Some(habit.frequency.as_str().to_string()),
            category: Some(habit.category.display_name().to_string()),
            start_date: Some(habit.start_date.format("%Y-%m-%d").to_string()),
            completed_days: Some(habit.completed_days),
            created_at: Some(habit.created_at.to_rfc3339()),
            total_days: Some(habit.total_days.unwrap_or(0)),
            failure_days: Some(habit.failure_days.unwrap_or(0)),
        }
    }

    /// Fill fields the service did not echo back with the values we sent
    pub fn fill_missing_from(mut self, sent: &ApiHabit) -> Self {
        self.id = self.id.or(sent.id);
        self.name = self.name.or_else(|| sent.name.clone());
        self.color = self.color.or_else(|| sent.color.clone());
        self.frequency = self.frequency.or_else(|| sent.frequency.clone());
        self.category = self.category.or_else(|| sent.category.clone());
        self.start_date = self.start_date.or_else(|| sent.start_date.clone());
        self.completed_days = self.completed_days.or(sent.completed_days);
        self.created_at = self.created_at.or_else(|| sent.created_at.clone());
        self.total_days = self.total_days.or(sent.total_days);
        self.failure_days = self.failure_days.or(sent.failure_days);
        self
    }

    /// Local record for a wire payload, filling gaps with defaults
    pub fn into_habit(self) -> Habit {
        let id = match self.id {
            Some(n) => HabitId::Remote(n),
            None => HabitId::new_local(),
        };

        let created_at = self
            .created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        let start_date = self
            .start_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
            .unwrap_or_else(|| created_at.date_naive());

        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Untitled".to_string());

        Habit {
            id,
            name,
            color: self.color,
            frequency: self
                .frequency
                .and_then(|f| f.parse::<Frequency>().ok())
                .unwrap_or_default(),
            category: self
                .category
                .and_then(|c| c.parse::<Category>().ok())
                .unwrap_or_default(),
            start_date,
            completed_days: self.completed_days.unwrap_or_default(),
            created_at,
            total_days: Some(self.total_days.unwrap_or(0)),
            failure_days: Some(self.failure_days.unwrap_or(0)),
        }
    }
}

impl ThemeSetting {
    pub fn new(theme: Theme) -> Self {
        Self { theme: theme.as_str().to_string() }
    }
}
