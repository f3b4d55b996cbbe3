/// Main entry point for the habit tracker CLI
///
/// This file sets up logging, parses command line arguments, loads the
/// tracker state and applies one intent per invocation. Logs go to stderr so
/// stdout only carries command output.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate, Weekday};
use clap::{Parser, Subcommand};
use tracing::info;

use habit_tracker::{
    default_database_path, day_name, Category, FilterKind, Frequency, HabitEdit, HabitId,
    HabitQuery, HabitTracker, IntentResponse, NewHabit, SortKind, StreakPolicy, Theme,
    TrackerConfig, WeeklyStats, DEFAULT_API_URL,
};

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite file used as the local cache
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Base URL of the remote habit service
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Timeout for each remote request, in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// How streaks are counted: longest-run or ending-today
    #[arg(long, default_value = "longest-run")]
    streak_policy: StreakPolicy,

    /// Theme used when no preference is stored anywhere
    #[arg(long, default_value = "light")]
    system_theme: Theme,

    /// Print command output as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show habits, optionally searched, filtered and sorted
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// all, completed or incomplete
        #[arg(long, default_value = "all")]
        filter: FilterKind,
        /// name, streak or created
        #[arg(long, default_value = "created")]
        sort: SortKind,
    },
    /// Add a new habit
    Add {
        name: String,
        #[arg(long, default_value = "daily")]
        frequency: Frequency,
        #[arg(long, default_value = "personal")]
        category: Category,
        /// Defaults to today
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Hex colour such as #3B82F6
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename a habit and optionally change its colour
    Rename {
        id: HabitId,
        name: String,
        #[arg(long)]
        color: Option<String>,
    },
    /// Flip one day of the current week
    Toggle { id: HabitId, day: Weekday },
    /// Delete a habit
    Delete { id: HabitId },
    /// Clear the current week for every habit
    Reset,
    /// Show weekly statistics
    Stats {
        /// Limit to one habit
        id: Option<HabitId>,
    },
    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Push local changes to the remote service
    Sync,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    Show,
    Toggle,
    Set { theme: Theme },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => default_database_path()?,
    };

    info!("Using local storage at: {}", db_path.display());

    let config = TrackerConfig::new(db_path)
        .with_api_base_url(args.api_url)
        .with_request_timeout(Duration::from_secs(args.timeout_secs))
        .with_streak_policy(args.streak_policy)
        .with_system_theme(args.system_theme);

    let mut tracker = HabitTracker::open(&config)?;
    let (habit_source, theme_source) = tracker.load().await;
    info!("Habits from {:?}, theme from {:?}", habit_source, theme_source);

    let today = Local::now().date_naive();
    let json = args.json;

    match args.command {
        Command::List { search, filter, sort } => {
            let query = HabitQuery {
                search_term: search,
                filter,
                sort,
            };
            let visible = tracker.visible(&query, today);
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else if visible.is_empty() {
                println!("No habits match.");
            } else {
                for habit in &visible {
                    let stats = WeeklyStats::calculate(habit, tracker.streak_policy(), today);
                    let week: String = habit
                        .completed_days
                        .iter()
                        .map(|(_, done)| if done { '■' } else { '□' })
                        .collect();
                    println!(
                        "{:<16} {:<24} {} {:>3}%  🔥{}  [{}]",
                        habit.id,
                        habit.name,
                        week,
                        stats.completion_percentage,
                        stats.streak,
                        habit.category
                    );
                }
            }
        }
        Command::Add {
            name,
            frequency,
            category,
            start_date,
            color,
        } => {
            let payload = NewHabit {
                name,
                color,
                frequency,
                category,
                start_date: start_date.unwrap_or(today),
            };
            let response = tracker.add_habit(payload).await?;
            print_response(&response, json)?;
        }
        Command::Rename { id, name, color } => {
            let response = tracker.edit_habit(HabitEdit { id, name, color }).await?;
            print_response(&response, json)?;
        }
        Command::Toggle { id, day } => {
            let response = tracker.toggle_day(&id, day).await?;
            print_response(&response, json)?;
        }
        Command::Delete { id } => {
            let response = tracker.delete_habit(&id).await?;
            print_response(&response, json)?;
        }
        Command::Reset => {
            let response = tracker.reset_progress().await;
            print_response(&response, json)?;
        }
        Command::Stats { id: Some(id) } => {
            let stats = tracker.habit_stats(&id, today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
        Command::Stats { id: None } => {
            let summary = tracker.summary(today);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("📊 Week of {} ({} today)", today, day_name(today.weekday()));
                println!(
                    "{} habits, {} fully completed, {}% average, best streak {}",
                    summary.total_habits,
                    summary.completed_habits,
                    summary.average_completion,
                    summary.best_streak
                );
                println!("💡 {}", summary.insight);
            }
        }
        Command::Theme { action } => match action.unwrap_or(ThemeAction::Show) {
            ThemeAction::Show => println!("{}", tracker.theme()),
            ThemeAction::Toggle => {
                let response = tracker.toggle_theme().await;
                print_response(&response, json)?;
            }
            ThemeAction::Set { theme } => {
                let response = tracker.set_theme(theme).await;
                print_response(&response, json)?;
            }
        },
        Command::Sync => {
            let report = tracker.sync().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("🔁 {}", report.summary());
            }
        }
    }

    Ok(())
}

fn print_response(response: &IntentResponse, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }
    println!("{}", response.message);
    if !response.sync.is_clean() {
        println!("⚠️ {}", response.sync.summary());
        for failure in &response.sync.failures {
            println!(
                "   {:?} {}: {}",
                failure.operation,
                failure.habit_id.as_deref().unwrap_or("-"),
                failure.message
            );
        }
    }
    Ok(())
}

fn print_stats(stats: &WeeklyStats) {
    println!("📊 Habit {}", stats.habit_id);
    println!("   {} of 7 days ({}%)", stats.completed_days, stats.completion_percentage);
    println!("   Streak: {}", stats.streak);
    println!("   Total days: {}, missed: {}", stats.total_days, stats.failure_days);
    println!("   {}", stats.motivational_message());
}
