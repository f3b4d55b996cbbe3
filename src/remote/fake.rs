/// In-memory stand-in for the remote service used by unit tests

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Habit, HabitId, Theme};
use crate::remote::{HabitApi, RemoteError};

#[derive(Default)]
pub struct FakeState {
    pub habits: Vec<Habit>,
    pub next_id: u64,
    pub theme: Option<Theme>,
    pub offline: bool,
    pub calls: Vec<String>,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn with_habits(habits: Vec<Habit>) -> Self {
        let api = Self::default();
        api.lock().habits = habits;
        api
    }

    pub fn offline() -> Self {
        let api = Self::default();
        api.set_offline(true);
        api
    }

    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    pub fn set_theme(&self, theme: Theme) {
        self.lock().theme = Some(theme);
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn stored(&self) -> Vec<Habit> {
        self.lock().habits.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn call(&self, method: &'static str, path: String) -> Result<MutexGuard<'_, FakeState>, RemoteError> {
        let mut state = self.lock();
        state.calls.push(format!("{} {}", method, path));
        if state.offline {
            return Err(RemoteError::Status { status: 503, method, path });
        }
        Ok(state)
    }
}

fn not_found(method: &'static str, path: String) -> RemoteError {
    RemoteError::Status { status: 404, method, path }
}

#[async_trait]
impl HabitApi for FakeApi {
    async fn list_habits(&self) -> Result<Vec<Habit>, RemoteError> {
        Ok(self.call("GET", "/habits".to_string())?.habits.clone())
    }

    async fn create_habit(&self, habit: &Habit) -> Result<Habit, RemoteError> {
        let mut state = self.call("POST", "/habits".to_string())?;
        state.next_id += 1;
        let mut created = habit.clone();
        created.id = HabitId::Remote(100 + state.next_id);
        state.habits.push(created.clone());
        Ok(created)
    }

    async fn update_habit(&self, remote_id: u64, habit: &Habit) -> Result<Habit, RemoteError> {
        let path = format!("/habits/{}", remote_id);
        let mut state = self.call("PUT", path.clone())?;
        let slot = state
            .habits
            .iter_mut()
            .find(|h| h.id == HabitId::Remote(remote_id))
            .ok_or_else(|| not_found("PUT", path))?;
        *slot = habit.clone();
        Ok(habit.clone())
    }

    async fn delete_habit(&self, remote_id: u64) -> Result<(), RemoteError> {
        let path = format!("/habits/{}", remote_id);
        let mut state = self.call("DELETE", path.clone())?;
        let before = state.habits.len();
        state.habits.retain(|h| h.id != HabitId::Remote(remote_id));
        if state.habits.len() == before {
            return Err(not_found("DELETE", path));
        }
        Ok(())
    }

    async fn health(&self) -> Result<(), RemoteError> {
        self.call("GET", "/health".to_string())?;
        Ok(())
    }

    async fn get_theme(&self) -> Result<Theme, RemoteError> {
        let state = self.call("GET", "/settings/theme".to_string())?;
        state
            .theme
            .ok_or_else(|| not_found("GET", "/settings/theme".to_string()))
    }

    async fn put_theme(&self, theme: Theme) -> Result<(), RemoteError> {
        self.call("PUT", "/settings/theme".to_string())?.theme = Some(theme);
        Ok(())
    }
}
