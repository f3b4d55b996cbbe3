/// Runtime configuration for the tracker
///
/// `main.rs` fills this from command line flags; library users and tests
/// build it directly.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::{StreakPolicy, Theme};

/// Base URL of the hosted habit service
pub const DEFAULT_API_URL: &str = "https://habit-track.up.railway.app";

/// File name of the local storage database
const DATABASE_FILE: &str = "local_storage.db";

/// Upper bound on any single remote request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub api_base_url: String,
    /// SQLite file backing local storage
    pub database_path: PathBuf,
    pub request_timeout: Duration,
    pub streak_policy: StreakPolicy,
    /// Theme used when neither the service nor local storage has one
    pub system_theme: Theme,
}

impl TrackerConfig {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            database_path,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            streak_policy: StreakPolicy::default(),
            system_theme: Theme::default(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_streak_policy(mut self, policy: StreakPolicy) -> Self {
        self.streak_policy = policy;
        self
    }

    pub fn with_system_theme(mut self, theme: Theme) -> Self {
        self.system_theme = theme;
        self
    }
}

/// Pick a writable directory for the local storage file
///
/// Candidates are tried in order: home, platform data dir, config dir and
/// the working directory. The temp dir is used when none is writable.
pub fn default_database_path() -> std::io::Result<PathBuf> {
    let candidates = [
        dirs::home_dir().map(|p| p.join(".habit_tracker")),
        dirs::data_dir().map(|p| p.join("habit_tracker")),
        dirs::config_dir().map(|p| p.join("habit_tracker")),
        std::env::current_dir().ok().map(|p| p.join(".habit_tracker")),
    ];

    if let Some(dir) = candidates.into_iter().flatten().find(|dir| is_writable_dir(dir)) {
        return Ok(dir.join(DATABASE_FILE));
    }

    let dir = std::env::temp_dir().join("habit_tracker");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(DATABASE_FILE);
    tracing::warn!("Using temporary directory for local storage: {}", path.display());
    Ok(path)
}

/// Create `dir` if needed and check a file can be written into it
fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let check_file = dir.join(".write_check");
    let writable = std::fs::write(&check_file, b"ok").is_ok();
    let _ = std::fs::remove_file(&check_file);
    writable
}
