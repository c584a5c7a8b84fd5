//! Budget-constrained selection management
//! Validates every addition against a fixed ceiling before committing

pub mod manager;
pub mod types;

pub use manager::BudgetSelector;
pub use types::{SelectorConfig, ToggleOutcome, BUDGET_EXCEEDED_MESSAGE, DEFAULT_BUDGET_CEILING};
