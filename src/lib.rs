//! teambudget - Budget-constrained team building
//!
//! A selection core plus interactive terminal surface:
//!
//! - **roster**: immutable candidate list, built-in or loaded from JSON
//! - **selector**: selection set + running total, validated against a
//!   fixed budget ceiling before every commit
//! - **notify**: transient rejection banner with timed auto-dismissal
//! - **session / repl / cli**: the interactive application around the core

pub mod errors;
pub mod events;
pub mod notify;
pub mod roster;
pub mod selector;
pub mod session;
pub mod telemetry;

pub use errors::{Result, SelectorError};

pub mod cli;
pub mod config;
pub mod repl;

// Re-export commonly used types
pub use roster::{Candidate, Roster};
pub use selector::{BudgetSelector, SelectorConfig, ToggleOutcome};
pub use session::TeamSession;
