/// SQLite implementation of the local storage slots
///
/// Each slot is one row in the `slots` table holding a JSON or plain text
/// value. Writes replace the whole slot.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Habit, Theme};
use crate::storage::{migrations, LocalStore, StorageError, HABITS_SLOT, THEME_SLOT};

/// SQLite-based local storage
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the storage file and migrate its schema
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Storage that lives only as long as this value
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;
        migrations::initialize_database(&conn)?;
        Ok(Self { conn })
    }

    fn read_slot(&self, name: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1",
                params![name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, name: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (name, value, updated_at) VALUES (?1, ?2, ?3)",
            params![name, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl LocalStore for SqliteStorage {
    fn load_habits(&self) -> Result<Option<Vec<Habit>>, StorageError> {
        match self.read_slot(HABITS_SLOT)? {
            Some(raw) => {
                let habits: Vec<Habit> = serde_json::from_str(&raw)?;
                tracing::debug!("Read {} habits from local storage", habits.len());
                Ok(Some(habits))
            }
            None => Ok(None),
        }
    }

    fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let json = serde_json::to_string(habits)?;
        self.write_slot(HABITS_SLOT, &json)?;
        tracing::debug!("Wrote {} habits to local storage", habits.len());
        Ok(())
    }

    fn load_theme(&self) -> Result<Option<Theme>, StorageError> {
        match self.read_slot(THEME_SLOT)? {
            Some(raw) => raw.parse::<Theme>().map(Some).map_err(|_| {
                StorageError::InvalidSlotValue {
                    slot: THEME_SLOT.to_string(),
                    value: raw,
                }
            }),
            None => Ok(None),
        }
    }

    fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.write_slot(THEME_SLOT, theme.as_str())
    }
}
