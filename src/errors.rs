//! Error types for the teambudget core
//!
//! Covers roster loading and session lookup failures. A rejected selection is
//! deliberately not an error: the budget check is a normal outcome of
//! `toggle` and is reported through `ToggleOutcome::Rejected`.

use thiserror::Error;

/// Main error type for roster and session operations
#[derive(Error, Debug)]
pub enum SelectorError {
    /// Candidate id not present in the roster
    #[error("Unknown candidate id {id}: not in the roster")]
    UnknownCandidate { id: u32 },

    /// Roster contained no candidates
    #[error("Roster is empty: at least one candidate is required")]
    EmptyRoster,

    /// Roster contained the same id more than once
    #[error("Duplicate candidate id {id} in roster")]
    DuplicateCandidate { id: u32 },

    /// Candidate entry failed validation
    #[error("Invalid candidate {id}: {reason}")]
    InvalidCandidate { id: u32, reason: String },

    /// Roster JSON parsing errors
    #[error("Roster parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, SelectorError>;

impl From<anyhow::Error> for SelectorError {
    fn from(err: anyhow::Error) -> Self {
        SelectorError::ConfigError(err.to_string())
    }
}
