/// Domain module containing core business logic and data types
///
/// This module defines the habit record, its weekly completion flags, the
/// derived statistics and the filter/sort rules used to display habits.

pub mod habit;
pub mod query;
pub mod stats;
pub mod types;
pub mod week;

// Re-export public types for easy access
pub use habit::*;
pub use query::*;
pub use stats::*;
pub use types::*;
pub use week::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid habit id: {0}")]
    InvalidId(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid theme '{0}'. Valid options: light, dark")]
    InvalidTheme(String),
}
