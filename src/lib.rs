/// Public library interface for the habit tracker
///
/// This module exports the application state (`HabitTracker`) together with
/// the domain types, storage, remote client and persistence gateway it is
/// built from.

use thiserror::Error;

// Internal modules
mod analytics;
mod config;
mod domain;
mod intents;
mod remote;
mod storage;
mod sync;

// Re-export public modules and types
pub use analytics::{AnalyticsEngine, WeeklySummary};
pub use config::{default_database_path, TrackerConfig, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
pub use domain::*;
pub use intents::IntentResponse;
pub use remote::{ApiHabit, HabitApi, HttpHabitApi, RemoteError, ThemeSetting};
pub use storage::{LocalStore, SqliteStorage, StorageError, HABITS_SLOT, THEME_SLOT};
pub use sync::{
    seed_habits, HabitSource, LoadOutcome, PersistenceGateway, SyncError, SyncFailure,
    SyncOperation, SyncReport, ThemeOutcome, ThemeSource,
};

/// Errors that can occur while running the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Local storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Remote client error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },
}

/// Application state: the habit collection, the theme and the gateway
///
/// This is the single mutator of the habit list. Every intent updates the
/// in-memory state first and then asks the gateway to reconcile storage.
pub struct HabitTracker<L = SqliteStorage, R = HttpHabitApi> {
    gateway: PersistenceGateway<L, R>,
    analytics: AnalyticsEngine,
    habits: Vec<Habit>,
    theme: Theme,
    habits_loaded: bool,
    theme_loaded: bool,
}

impl HabitTracker<SqliteStorage, HttpHabitApi> {
    /// Open local storage and build the HTTP client described by `config`
    pub fn open(config: &TrackerConfig) -> Result<Self, TrackerError> {
        let local = SqliteStorage::new(&config.database_path)?;
        let remote = HttpHabitApi::new(config.api_base_url.clone(), config.request_timeout)?;
        tracing::info!(
            "Initializing habit tracker with local storage {:?} and remote {}",
            config.database_path,
            remote.base_url()
        );
        let gateway = PersistenceGateway::new(local, remote, config.system_theme);

        Ok(Self::with_gateway(gateway, config.streak_policy))
    }
}

impl<L: LocalStore, R: HabitApi> HabitTracker<L, R> {
    pub fn with_gateway(gateway: PersistenceGateway<L, R>, policy: StreakPolicy) -> Self {
        Self {
            gateway,
            analytics: AnalyticsEngine::new(policy),
            habits: Vec::new(),
            theme: Theme::default(),
            habits_loaded: false,
            theme_loaded: false,
        }
    }

    /// Run the habit and theme load protocols
    pub async fn load(&mut self) -> (HabitSource, ThemeSource) {
        let loaded = self.gateway.load_habits().await;
        self.habits = loaded.habits;
        self.habits_loaded = true;

        let theme = self.gateway.load_theme().await;
        self.theme = theme.theme;
        self.theme_loaded = true;

        tracing::info!(
            "Tracker ready with {} habits from {:?}, {} theme from {:?}",
            self.habits.len(),
            loaded.source,
            self.theme,
            theme.source
        );
        (loaded.source, theme.source)
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn habit(&self, habit_id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == habit_id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn streak_policy(&self) -> StreakPolicy {
        self.analytics.policy()
    }

    pub fn gateway(&self) -> &PersistenceGateway<L, R> {
        &self.gateway
    }

    /// Run the save protocol, once loading has happened
    async fn persist(&mut self) -> SyncReport {
        if !self.habits_loaded {
            tracing::debug!("Habits not loaded yet, skipping save");
            return SyncReport::default();
        }
        self.gateway.save_habits(&mut self.habits).await
    }

    fn position(&self, habit_id: &HabitId) -> Result<usize, TrackerError> {
        self.habits
            .iter()
            .position(|h| &h.id == habit_id)
            .ok_or_else(|| TrackerError::HabitNotFound {
                habit_id: habit_id.to_string(),
            })
    }
}
