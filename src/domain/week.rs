/// Weekly completion flags owned by each habit
///
/// A `WeekDays` always carries all seven days. Days missing from a stored
/// or remote payload are read back as not completed.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Monday-first ordering used everywhere a week is scanned
pub const WEEK_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One "completed" flag for each day of the week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

impl WeekDays {
    /// A week with nothing completed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a week with exactly the given days completed
    pub fn with_days(days: &[Weekday]) -> Self {
        let mut week = Self::empty();
        for day in days {
            week.set(*day, true);
        }
        week
    }

    pub fn get(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, completed: bool) {
        let flag = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *flag = completed;
    }

    /// Flip a single day and return its new value
    pub fn toggle(&mut self, day: Weekday) -> bool {
        let flipped = !self.get(day);
        self.set(day, flipped);
        flipped
    }

    /// Iterate the week Monday through Sunday
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, bool)> + '_ {
        WEEK_ORDER.iter().map(move |day| (*day, self.get(*day)))
    }

    /// Number of completed days (0-7)
    pub fn completed_count(&self) -> u8 {
        self.iter().filter(|(_, done)| *done).count() as u8
    }
}

/// Lowercase full name of a weekday, as used in stored payloads
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
