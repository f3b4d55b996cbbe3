/// Load and save protocols for habits and the theme preference

use std::collections::HashSet;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{Habit, HabitId, Theme};
use crate::remote::HabitApi;
use crate::storage::LocalStore;
use crate::sync::{
    seed_habits, HabitSource, SyncError, SyncOperation, SyncReport, ThemeSource,
};

/// Result of the habit load protocol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadOutcome {
    pub habits: Vec<Habit>,
    pub source: HabitSource,
}

/// Result of the theme load protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeOutcome {
    pub theme: Theme,
    pub source: ThemeSource,
}

/// Reconciles in-memory state with local storage and the remote service
pub struct PersistenceGateway<L, R> {
    local: L,
    remote: R,
    /// Used when neither tier has a theme
    system_theme: Theme,
}

impl<L: LocalStore, R: HabitApi> PersistenceGateway<L, R> {
    pub fn new(local: L, remote: R, system_theme: Theme) -> Self {
        Self {
            local,
            remote,
            system_theme,
        }
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Load habits: remote if it has any, else local cache, else seed data
    pub async fn load_habits(&self) -> LoadOutcome {
        match self.remote.list_habits().await {
            Ok(habits) if !habits.is_empty() => {
                info!("Loaded {} habits from remote service", habits.len());
                return LoadOutcome {
                    habits,
                    source: HabitSource::Remote,
                };
            }
            Ok(_) => info!("Remote service has no habits, trying local storage"),
            Err(e) => warn!("Remote habits unavailable, trying local storage: {}", e),
        }

        match self.local.load_habits() {
            Ok(Some(habits)) if !habits.is_empty() => {
                info!("Loaded {} habits from local storage", habits.len());
                return LoadOutcome {
                    habits,
                    source: HabitSource::Local,
                };
            }
            Ok(_) => info!("Local storage has no habits, using seed data"),
            Err(e) => warn!("Local habits unreadable, using seed data: {}", e),
        }

        LoadOutcome {
            habits: seed_habits(),
            source: HabitSource::Seed,
        }
    }

    /// Save habits: local cache first, then push every record remotely
    ///
    /// Local-only records are created remotely and replaced in `habits` by
    /// the acknowledged record. Remote-known records get a full update.
    /// Failures are recorded in the report and never stop other records.
    pub async fn save_habits(&self, habits: &mut Vec<Habit>) -> SyncReport {
        let mut report = SyncReport::default();
        let local_saved = self.write_local(habits, &mut report);
        report.local_saved = local_saved;

        let mut created_now = HashSet::new();
        for idx in 0..habits.len() {
            if !habits[idx].id.is_local() {
                continue;
            }
            let local_id = habits[idx].id.to_string();
            match self.push_create(&habits[idx]).await {
                Ok(created) => {
                    debug!("Habit {} acknowledged remotely as {}", local_id, created.id);
                    created_now.insert(created.id.clone());
                    habits[idx] = created;
                    report.created += 1;
                    self.write_local(habits, &mut report);
                }
                Err(e) => report.record_failure(Some(local_id), SyncOperation::Create, &e),
            }
        }

        let updates = habits
            .iter()
            .filter(|h| !h.id.is_local() && !created_now.contains(&h.id))
            .map(|habit| async move { (habit.id.to_string(), self.push_update(habit).await) });

        for (habit_id, result) in join_all(updates).await {
            match result {
                Ok(Some(_)) => report.updated += 1,
                Ok(None) => {}
                Err(e) => report.record_failure(Some(habit_id), SyncOperation::Update, &e),
            }
        }

        debug!("Save cycle finished: {}", report.summary());
        report
    }

    /// Create one record remotely, returning it with its remote id
    pub async fn push_create(&self, habit: &Habit) -> Result<Habit, SyncError> {
        Ok(self.remote.create_habit(habit).await?)
    }

    /// Send the full record to the remote service
    ///
    /// Local-only records are skipped and yield `Ok(None)`.
    pub async fn push_update(&self, habit: &Habit) -> Result<Option<Habit>, SyncError> {
        match habit.id.remote_id() {
            Some(remote_id) => Ok(Some(self.remote.update_habit(remote_id, habit).await?)),
            None => Ok(None),
        }
    }

    /// Delete a record remotely; local-only ids need no request
    pub async fn push_delete(&self, habit_id: &HabitId) -> Result<bool, SyncError> {
        match habit_id.remote_id() {
            Some(remote_id) => {
                self.remote.delete_habit(remote_id).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Load theme: remote, then local mirror, then the system default
    pub async fn load_theme(&self) -> ThemeOutcome {
        match self.remote.health().await {
            Ok(()) => debug!("Remote health check passed"),
            Err(e) => warn!("Remote health check failed: {}", e),
        }

        match self.remote.get_theme().await {
            Ok(theme) => {
                return ThemeOutcome {
                    theme,
                    source: ThemeSource::Remote,
                }
            }
            Err(e) => warn!("Remote theme unavailable: {}", e),
        }

        match self.local.load_theme() {
            Ok(Some(theme)) => {
                return ThemeOutcome {
                    theme,
                    source: ThemeSource::Local,
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Local theme unreadable: {}", e),
        }

        ThemeOutcome {
            theme: self.system_theme,
            source: ThemeSource::System,
        }
    }

    /// Save theme to the local mirror, then to the remote service
    pub async fn save_theme(&self, theme: Theme) -> SyncReport {
        let mut report = SyncReport::default();

        match self.local.save_theme(theme) {
            Ok(()) => report.local_saved = true,
            Err(e) => report.record_failure(None, SyncOperation::LocalWrite, &e.into()),
        }

        if let Err(e) = self.remote.put_theme(theme).await {
            report.record_failure(None, SyncOperation::Theme, &e.into());
        }

        report
    }

    fn write_local(&self, habits: &[Habit], report: &mut SyncReport) -> bool {
        match self.local.save_habits(habits) {
            Ok(()) => true,
            Err(e) => {
                report.record_failure(None, SyncOperation::LocalWrite, &e.into());
                false
            }
        }
    }
}
