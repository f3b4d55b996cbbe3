/// Bundled example habits used when neither remote nor local data exists

use chrono::{NaiveDate, TimeZone, Utc, Weekday};

use crate::domain::{Category, Frequency, Habit, HabitId, WeekDays};

struct SeedHabit {
    id: &'static str,
    name: &'static str,
    color: &'static str,
    frequency: Frequency,
    category: Category,
    start: (i32, u32, u32),
    created: (i32, u32, u32, u32, u32),
    days: &'static [Weekday],
    total_days: u32,
    failure_days: u32,
}

const SEED: [SeedHabit; 3] = [
    SeedHabit {
        id: "local-seed-1",
        name: "Morning Run",
        color: "#3B82F6",
        frequency: Frequency::Daily,
        category: Category::Fitness,
        start: (2025, 10, 1),
        created: (2025, 10, 1, 7, 0),
        days: &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
        total_days: 30,
        failure_days: 5,
    },
    SeedHabit {
        id: "local-seed-2",
        name: "Read 20 mins",
        color: "#F59E0B",
        frequency: Frequency::Daily,
        category: Category::Study,
        start: (2025, 9, 20),
        created: (2025, 9, 20, 19, 30),
        days: &[Weekday::Tue, Weekday::Thu, Weekday::Sat],
        total_days: 25,
        failure_days: 7,
    },
    SeedHabit {
        id: "local-seed-3",
        name: "Meal Prep",
        color: "#10B981",
        frequency: Frequency::Weekly,
        category: Category::Health,
        start: (2025, 10, 5),
        created: (2025, 10, 5, 12, 0),
        days: &[Weekday::Sun],
        total_days: 10,
        failure_days: 2,
    },
];

/// The default collection shown on a first run; never empty
pub fn seed_habits() -> Vec<Habit> {
    SEED.iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.start;
            let (cy, cm, cd, ch, cmin) = seed.created;
            Some(Habit {
                id: HabitId::Local(seed.id.to_string()),
                name: seed.name.to_string(),
                color: Some(seed.color.to_string()),
                frequency: seed.frequency,
                category: seed.category,
                start_date: NaiveDate::from_ymd_opt(y, m, d)?,
                completed_days: WeekDays::with_days(seed.days),
                created_at: Utc.with_ymd_and_hms(cy, cm, cd, ch, cmin, 0).single()?,
                total_days: Some(seed.total_days),
                failure_days: Some(seed.failure_days),
            })
        })
        .collect()
}
