/// Search, filter and sort behaviour of the visible habit list
use chrono::{Duration, NaiveDate, TimeZone, Utc, Weekday};
use habit_tracker::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
}

fn habit(name: &str, created_offset_mins: i64, days: &[Weekday]) -> Habit {
    let mut habit = Habit::with_created_at(
        NewHabit {
            name: name.to_string(),
            color: None,
            frequency: Frequency::Daily,
            category: Category::Personal,
            start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        },
        Utc.with_ymd_and_hms(2025, 10, 1, 8, 0, 0).unwrap() + Duration::minutes(created_offset_mins),
    );
    habit.completed_days = WeekDays::with_days(days);
    habit
}

fn names(habits: &[Habit]) -> Vec<&str> {
    habits.iter().map(|h| h.name.as_str()).collect()
}

fn run(habits: &[Habit], search: &str, filter: FilterKind, sort: SortKind) -> Vec<Habit> {
    let query = HabitQuery {
        search_term: search.to_string(),
        filter,
        sort,
    };
    visible_habits(habits, &query, StreakPolicy::LongestRun, today())
}

#[test]
fn test_name_sort_is_case_insensitive() {
    let habits = vec![habit("Cherry", 0, &[]), habit("apple", 1, &[]), habit("Banana", 2, &[])];

    let visible = run(&habits, "", FilterKind::All, SortKind::Name);
    assert_eq!(names(&visible), vec!["apple", "Banana", "Cherry"]);
}

#[test]
fn test_created_sort_is_newest_first() {
    let habits = vec![habit("Old", 0, &[]), habit("New", 30, &[]), habit("Mid", 10, &[])];

    let visible = run(&habits, "", FilterKind::All, SortKind::CreatedAt);
    assert_eq!(names(&visible), vec!["New", "Mid", "Old"]);
}

#[test]
fn test_streak_sort_keeps_input_order_on_ties() {
    let habits = vec![
        habit("One", 0, &[Weekday::Mon]),
        habit("Three", 1, &[Weekday::Mon, Weekday::Tue, Weekday::Wed]),
        habit("AlsoOne", 2, &[Weekday::Fri]),
    ];

    let visible = run(&habits, "", FilterKind::All, SortKind::Streak);
    assert_eq!(names(&visible), vec!["Three", "One", "AlsoOne"]);
}

#[test]
fn test_filters_split_on_full_week() {
    let habits = vec![habit("Done", 0, &WEEK_ORDER), habit("Partial", 1, &[Weekday::Sun])];

    assert_eq!(names(&run(&habits, "", FilterKind::Completed, SortKind::Name)), vec!["Done"]);
    assert_eq!(names(&run(&habits, "", FilterKind::Incomplete, SortKind::Name)), vec!["Partial"]);
    assert_eq!(run(&habits, "", FilterKind::All, SortKind::Name).len(), 2);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let habits = vec![habit("Morning Run", 0, &[]), habit("Read", 1, &[])];

    assert_eq!(names(&run(&habits, "RUN", FilterKind::All, SortKind::Name)), vec!["Morning Run"]);
    assert!(run(&habits, "swim", FilterKind::All, SortKind::Name).is_empty());
}

#[test]
fn test_search_term_is_matched_as_typed() {
    let habits = vec![habit("Readiness", 0, &[]), habit("Read books", 1, &[])];

    assert_eq!(names(&run(&habits, "Read ", FilterKind::All, SortKind::Name)), vec!["Read books"]);
    assert_eq!(run(&habits, "read", FilterKind::All, SortKind::Name).len(), 2);
}

#[test]
fn test_query_does_not_touch_input() {
    let habits = vec![habit("b", 0, &[]), habit("a", 1, &[])];
    let before = habits.clone();

    run(&habits, "", FilterKind::All, SortKind::Name);
    assert_eq!(habits, before);
}
