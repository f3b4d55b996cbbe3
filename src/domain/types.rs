/// Core types and enums used throughout the domain layer
///
/// This module defines the identifier, category, frequency and theme types
/// shared by habits, the persistence gateway and the wire mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Prefix carried by identifiers generated on this device
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Unique identifier for a habit
///
/// A habit is either known only to this device (`Local`) or has been
/// acknowledged by the remote service, which assigned it a numeric id
/// (`Remote`). Local ids keep their raw text so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HabitId {
    Local(String),
    Remote(u64),
}

impl HabitId {
    /// Generate a new local-only habit ID
    pub fn new_local() -> Self {
        Self::Local(format!("{}{}", LOCAL_ID_PREFIX, Uuid::new_v4()))
    }

    /// Parse an id from its string form
    ///
    /// All-digit strings are remote ids; anything else stays local.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = trimmed.parse::<u64>() {
                return Self::Remote(n);
            }
        }
        Self::Local(s.to_string())
    }

    /// Whether the remote service has never acknowledged this habit
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// The remote-assigned id, if any
    pub fn remote_id(&self) -> Option<u64> {
        match self {
            Self::Remote(n) => Some(*n),
            Self::Local(_) => None,
        }
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(s) => f.write_str(s),
            Self::Remote(n) => write!(f, "{}", n),
        }
    }
}

impl From<HabitId> for String {
    fn from(id: HabitId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for HabitId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(DomainError::InvalidId("Habit id cannot be empty".to_string()));
        }
        Ok(Self::parse(&s))
    }
}

impl FromStr for HabitId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

/// Categories for organizing habits into different life areas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Health,
    Fitness,
    Study,
    Work,
    #[default]
    Personal,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Health,
        Category::Fitness,
        Category::Study,
        Category::Work,
        Category::Personal,
    ];

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Fitness => "Fitness",
            Category::Study => "Study",
            Category::Work => "Work",
            Category::Personal => "Personal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidCategory(format!(
                "Invalid category '{}'. Valid options: Health, Fitness, Study, Work, Personal", s
            )))
    }
}

/// How often a habit should be performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            _ => Err(DomainError::InvalidFrequency(format!(
                "Invalid frequency '{}'. Valid options: daily, weekly", s
            ))),
        }
    }
}

/// Light or dark colour scheme, shared by the whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DomainError::InvalidTheme(other.to_string())),
        }
    }
}
