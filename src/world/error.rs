//! Error types for game data loading.

use thiserror::Error;

/// Errors that can occur when loading enemy or level data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A tuning value is negative, NaN or infinite.
    #[error("Invalid value for '{field}' in '{path}': {value}")]
    InvalidStat {
        path: String,
        field: &'static str,
        value: f32,
    },

    /// Stopping distance beyond chase range means a chase can never start cleanly.
    #[error("Stopping distance {stopping_distance} exceeds chase range {chase_range} in '{path}'")]
    StoppingBeyondChase {
        path: String,
        stopping_distance: f32,
        chase_range: f32,
    },

    /// A level references an enemy type with no definition.
    #[error("Level '{level}' references unknown enemy type '{enemy_type}'")]
    UnknownEnemyType { level: String, enemy_type: String },
}
