//! Error types for the liftlog_core library.
//!
//! Domain violations (bad reps, targets below the bar) are reported through
//! `Option` or sentinel results. This type only covers the fallible
//! surroundings: config files and user-supplied date lists.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A date string that could not be parsed into an activity day
    #[error("Invalid date on line {line}: {value:?}")]
    InvalidDate { line: usize, value: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}
