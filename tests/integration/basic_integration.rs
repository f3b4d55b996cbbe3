/// Basic integration tests: tracker over file-backed storage and a scripted remote
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use habit_tracker::*;
use tempfile::NamedTempFile;

/// Remote service kept in memory so tests can flip it offline
#[derive(Default)]
struct ScriptedApi {
    habits: Mutex<Vec<Habit>>,
    theme: Mutex<Option<Theme>>,
    offline: Mutex<bool>,
}

impl ScriptedApi {
    fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    fn check(&self, method: &'static str, path: &str) -> Result<(), RemoteError> {
        if *self.offline.lock().unwrap() {
            return Err(RemoteError::Status {
                status: 503,
                method,
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl HabitApi for ScriptedApi {
    async fn list_habits(&self) -> Result<Vec<Habit>, RemoteError> {
        self.check("GET", "/habits")?;
        Ok(self.habits.lock().unwrap().clone())
    }

    async fn create_habit(&self, habit: &Habit) -> Result<Habit, RemoteError> {
        self.check("POST", "/habits")?;
        let mut habits = self.habits.lock().unwrap();
        let mut created = habit.clone();
        created.id = HabitId::Remote(habits.len() as u64 + 1);
        habits.push(created.clone());
        Ok(created)
    }

    async fn update_habit(&self, remote_id: u64, habit: &Habit) -> Result<Habit, RemoteError> {
        self.check("PUT", "/habits")?;
        let mut habits = self.habits.lock().unwrap();
        if let Some(slot) = habits.iter_mut().find(|h| h.id == HabitId::Remote(remote_id)) {
            *slot = habit.clone();
        }
        Ok(habit.clone())
    }

    async fn delete_habit(&self, remote_id: u64) -> Result<(), RemoteError> {
        self.check("DELETE", "/habits")?;
        self.habits
            .lock()
            .unwrap()
            .retain(|h| h.id != HabitId::Remote(remote_id));
        Ok(())
    }

    async fn health(&self) -> Result<(), RemoteError> {
        self.check("GET", "/health")
    }

    async fn get_theme(&self) -> Result<Theme, RemoteError> {
        self.check("GET", "/settings/theme")?;
        self.theme.lock().unwrap().ok_or(RemoteError::Status {
            status: 404,
            method: "GET",
            path: "/settings/theme".to_string(),
        })
    }

    async fn put_theme(&self, theme: Theme) -> Result<(), RemoteError> {
        self.check("PUT", "/settings/theme")?;
        *self.theme.lock().unwrap() = Some(theme);
        Ok(())
    }
}

fn tracker(file: &NamedTempFile, remote: ScriptedApi) -> HabitTracker<SqliteStorage, ScriptedApi> {
    let storage = SqliteStorage::new(file.path()).expect("Failed to create storage");
    let gateway = PersistenceGateway::new(storage, remote, Theme::Light);
    HabitTracker::with_gateway(gateway, StreakPolicy::LongestRun)
}

fn payload(name: &str) -> NewHabit {
    NewHabit {
        name: name.to_string(),
        color: None,
        frequency: Frequency::Daily,
        category: Category::Fitness,
        start_date: NaiveDate::from_ymd_opt(2025, 10, 13).unwrap(),
    }
}

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_first_run_uses_seed_and_pushes_it() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let mut tracker = tracker(&temp_file, ScriptedApi::default());

        let (habits, theme) = tracker.load().await;
        assert_eq!(habits, HabitSource::Seed);
        assert_eq!(theme, ThemeSource::System);

        let report = tracker.sync().await;
        assert_eq!(report.created, seed_habits().len());
        assert!(tracker.habits().iter().all(|h| !h.id.is_local()));
    }

    #[tokio::test]
    async fn test_offline_changes_survive_restart() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");

        let id = {
            let remote = ScriptedApi::default();
            remote.set_offline(true);
            let mut tracker = tracker(&temp_file, remote);
            tracker.load().await;
            let id = tracker.add_habit(payload("Pushups")).await.unwrap().habit.unwrap().id;
            tracker.toggle_day(&id, Weekday::Mon).await.unwrap();
            id
        };

        // Second session: still offline, so local storage is the source
        let remote = ScriptedApi::default();
        remote.set_offline(true);
        let mut tracker = tracker(&temp_file, remote);
        let (source, _) = tracker.load().await;

        assert_eq!(source, HabitSource::Local);
        let habit = tracker.habit(&id).expect("habit kept locally");
        assert!(habit.completed_days.monday);
    }

    #[tokio::test]
    async fn test_reconnect_creates_offline_habits() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let remote = ScriptedApi::default();
        remote.set_offline(true);
        let mut tracker = tracker(&temp_file, remote);
        tracker.load().await;
        tracker.add_habit(payload("Plank")).await.unwrap();

        tracker.gateway().remote().set_offline(false);
        let report = tracker.sync().await;

        assert!(report.is_clean());
        let remote_names: Vec<String> = tracker
            .gateway()
            .remote()
            .habits
            .lock()
            .unwrap()
            .iter()
            .map(|h| h.name.clone())
            .collect();
        assert!(remote_names.contains(&"Plank".to_string()));

        let stored = tracker.gateway().local().load_habits().unwrap().unwrap();
        assert!(stored.iter().all(|h| !h.id.is_local()));
    }

    #[tokio::test]
    async fn test_theme_survives_restart_via_local_mirror() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        {
            let mut tracker = tracker(&temp_file, ScriptedApi::default());
            tracker.load().await;
            tracker.set_theme(Theme::Dark).await;
        }

        let remote = ScriptedApi::default();
        remote.set_offline(true);
        let mut tracker = tracker(&temp_file, remote);
        let (_, source) = tracker.load().await;

        assert_eq!(source, ThemeSource::Local);
        assert_eq!(tracker.theme(), Theme::Dark);
    }
}
