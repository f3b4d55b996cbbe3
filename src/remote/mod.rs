/// Client side of the remote habit service
///
/// The service is an opaque REST/JSON collaborator. `HabitApi` is the seam
/// the persistence gateway talks to; `HttpHabitApi` is the real client and
/// tests substitute their own implementations.

pub mod http;
pub mod wire;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpHabitApi;
pub use wire::{ApiHabit, ThemeSetting};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Habit, Theme};

/// Errors that can occur talking to the remote service
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote service returned status {status} for {method} {path}")]
    Status {
        status: u16,
        method: &'static str,
        path: String,
    },

    #[error("Malformed response from {path}: {message}")]
    Malformed { path: String, message: String },
}

/// Operations offered by the remote habit service
///
/// All methods speak in domain types; mapping to and from the wire format
/// is the implementation's job.
#[async_trait]
pub trait HabitApi: Send + Sync {
    /// `GET /habits`
    async fn list_habits(&self) -> Result<Vec<Habit>, RemoteError>;

    /// `POST /habits`, returning the record with its remote-assigned id
    async fn create_habit(&self, habit: &Habit) -> Result<Habit, RemoteError>;

    /// `PUT /habits/{id}` with the full record
    async fn update_habit(&self, remote_id: u64, habit: &Habit) -> Result<Habit, RemoteError>;

    /// `DELETE /habits/{id}`
    async fn delete_habit(&self, remote_id: u64) -> Result<(), RemoteError>;

    /// `GET /health`
    async fn health(&self) -> Result<(), RemoteError>;

    /// `GET /settings/theme`
    async fn get_theme(&self) -> Result<Theme, RemoteError>;

    /// `PUT /settings/theme`
    async fn put_theme(&self, theme: Theme) -> Result<(), RemoteError>;
}
