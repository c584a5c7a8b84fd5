//! Selector type definitions

use serde::{Deserialize, Serialize};

/// Default budget ceiling in whole currency units
pub const DEFAULT_BUDGET_CEILING: u64 = 100_000;

/// Message shown when a selection would push the total over the ceiling
pub const BUDGET_EXCEEDED_MESSAGE: &str = "Budget exceeded! Cannot add player.";

/// Configuration for the budget selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Upper bound the running total may never exceed after a commit
    /// (default: 100_000)
    pub ceiling: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_BUDGET_CEILING,
        }
    }
}

impl SelectorConfig {
    pub fn with_ceiling(ceiling: u64) -> Self {
        Self { ceiling }
    }
}

/// Outcome of a toggle request
///
/// The selector decides before any presentation state changes, so callers
/// only apply mutations the core approved. There is no rollback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Candidate added; running total after the commit
    Committed { total: u64 },

    /// Candidate removed; running total after the removal
    Removed { total: u64 },

    /// Adding would exceed the ceiling; no state was mutated
    Rejected { message: String },

    /// Candidate already in the requested state; nothing happened
    NoChange,
}

impl ToggleOutcome {
    /// True for the rejection variant only
    pub fn is_rejected(&self) -> bool {
        matches!(self, ToggleOutcome::Rejected { .. })
    }

    /// True if the selection set was mutated
    pub fn changed(&self) -> bool {
        matches!(
            self,
            ToggleOutcome::Committed { .. } | ToggleOutcome::Removed { .. }
        )
    }
}
