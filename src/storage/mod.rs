/// Storage layer for the local durable cache
///
/// Local storage holds two named slots: the JSON array of all habits and
/// the theme string. It is the offline fallback behind the remote service.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;

use crate::domain::{Habit, Theme};

/// Slot holding the serialized habit collection
pub const HABITS_SLOT: &str = "habits";
/// Slot holding the theme preference
pub const THEME_SLOT: &str = "theme";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unrecognized value in slot '{slot}': {value}")]
    InvalidSlotValue { slot: String, value: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the local storage interface
///
/// Reads return `Ok(None)` when a slot has never been written.
pub trait LocalStore {
    /// Read the cached habit collection
    fn load_habits(&self) -> Result<Option<Vec<Habit>>, StorageError>;

    /// Replace the cached habit collection
    fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError>;

    /// Read the mirrored theme preference
    fn load_theme(&self) -> Result<Option<Theme>, StorageError>;

    /// Replace the mirrored theme preference
    fn save_theme(&self, theme: Theme) -> Result<(), StorageError>;
}
