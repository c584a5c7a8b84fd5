//! Roster provider: static candidate data, fixed at startup

pub mod data;
pub mod provider;
pub mod types;

pub use provider::Roster;
pub use types::Candidate;
