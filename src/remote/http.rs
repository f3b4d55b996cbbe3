/// HTTP implementation of the remote habit service client
///
/// Every request goes through one `reqwest::Client` built with a bounded
/// timeout, so an unreachable service degrades to "unavailable" instead of
/// hanging a sync cycle.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::domain::{Habit, Theme};
use crate::remote::{ApiHabit, HabitApi, RemoteError, ThemeSetting};

const HABITS_PATH: &str = "/habits";
const HEALTH_PATH: &str = "/health";
const THEME_PATH: &str = "/settings/theme";

/// REST client for the remote habit service
pub struct HttpHabitApi {
    client: Client,
    base_url: String,
}

impl HttpHabitApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into a status error
    fn check_status(
        response: Response,
        method: &'static str,
        path: &str,
    ) -> Result<Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(RemoteError::Status {
                status: status.as_u16(),
                method,
                path: path.to_string(),
            })
        }
    }

    async fn read_json<T: DeserializeOwned>(
        response: Response,
        path: &str,
    ) -> Result<T, RemoteError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RemoteError::Malformed {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl HabitApi for HttpHabitApi {
    async fn list_habits(&self) -> Result<Vec<Habit>, RemoteError> {
        let response = self.client.get(self.url(HABITS_PATH)).send().await?;
        let response = Self::check_status(response, "GET", HABITS_PATH)?;
        let records: Vec<ApiHabit> = Self::read_json(response, HABITS_PATH).await?;

        tracing::debug!("Fetched {} habits from remote", records.len());
        Ok(records.into_iter().map(ApiHabit::into_habit).collect())
    }

    async fn create_habit(&self, habit: &Habit) -> Result<Habit, RemoteError> {
        let mut payload = ApiHabit::from_habit(habit);
        // The service assigns the id
        payload.id = None;

        let response = self
            .client
            .post(self.url(HABITS_PATH))
            .json(&payload)
            .send()
            .await?;
        let response = Self::check_status(response, "POST", HABITS_PATH)?;
        let created: ApiHabit = Self::read_json(response, HABITS_PATH).await?;

        if created.id.is_none() {
            return Err(RemoteError::Malformed {
                path: HABITS_PATH.to_string(),
                message: "created habit has no id".to_string(),
            });
        }

        Ok(created.fill_missing_from(&payload).into_habit())
    }

    async fn update_habit(&self, remote_id: u64, habit: &Habit) -> Result<Habit, RemoteError> {
        let path = format!("{}/{}", HABITS_PATH, remote_id);
        let mut payload = ApiHabit::from_habit(habit);
        payload.id = Some(remote_id);

        let response = self.client.put(self.url(&path)).json(&payload).send().await?;
        let response = Self::check_status(response, "PUT", &path)?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            // Nothing echoed back; the sent record stands
            return Ok(habit.clone());
        }
        let updated: ApiHabit = serde_json::from_str(&body).map_err(|e| RemoteError::Malformed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(updated.fill_missing_from(&payload).into_habit())
    }

    async fn delete_habit(&self, remote_id: u64) -> Result<(), RemoteError> {
        let path = format!("{}/{}", HABITS_PATH, remote_id);
        let response = self.client.delete(self.url(&path)).send().await?;
        Self::check_status(response, "DELETE", &path)?;
        Ok(())
    }

    async fn health(&self) -> Result<(), RemoteError> {
        let response = self.client.get(self.url(HEALTH_PATH)).send().await?;
        Self::check_status(response, "GET", HEALTH_PATH)?;
        Ok(())
    }

    async fn get_theme(&self) -> Result<Theme, RemoteError> {
        let response = self.client.get(self.url(THEME_PATH)).send().await?;
        let response = Self::check_status(response, "GET", THEME_PATH)?;
        let setting: ThemeSetting = Self::read_json(response, THEME_PATH).await?;

        setting.theme.parse::<Theme>().map_err(|e| RemoteError::Malformed {
            path: THEME_PATH.to_string(),
            message: e.to_string(),
        })
    }

    async fn put_theme(&self, theme: Theme) -> Result<(), RemoteError> {
        let response = self
            .client
            .put(self.url(THEME_PATH))
            .json(&ThemeSetting::new(theme))
            .send()
            .await?;
        Self::check_status(response, "PUT", THEME_PATH)?;
        Ok(())
    }
}
