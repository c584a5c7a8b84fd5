//! Budget selector
//!
//! Holds the selection set and running total, and validates every addition
//! against the budget ceiling before committing.
//!
//! Invariants:
//! - the running total always equals the sum of costs of the selection set
//! - the selection set never contains duplicate ids
//! - a committed running total never exceeds the ceiling (equality allowed)

use crate::roster::Candidate;
use crate::selector::types::{SelectorConfig, ToggleOutcome, BUDGET_EXCEEDED_MESSAGE};

/// Selection state with budget validation
#[derive(Debug, Clone)]
pub struct BudgetSelector {
    /// Selector configuration
    config: SelectorConfig,

    /// Currently selected candidates, in insertion order
    selection: Vec<Candidate>,

    /// Sum of costs of the current selection
    total: u64,
}

impl BudgetSelector {
    /// Create a selector with the default ceiling
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Create a selector with custom configuration
    pub fn with_config(config: SelectorConfig) -> Self {
        Self {
            config,
            selection: Vec::new(),
            total: 0,
        }
    }

    /// Apply a toggle intent: (candidate, desired-selected)
    ///
    /// Add path: the prospective total is computed first and committed only
    /// if it stays within the ceiling; a rejection leaves all state
    /// untouched. Remove path: never validated, it cannot violate the
    /// ceiling. Toggling to the state the candidate is already in is a
    /// no-op.
    pub fn toggle(&mut self, candidate: &Candidate, want_selected: bool) -> ToggleOutcome {
        let selected = self.is_selected(candidate.id);

        if want_selected {
            if selected {
                return ToggleOutcome::NoChange;
            }

            // An overflowing sum necessarily exceeds the ceiling
            match self.total.checked_add(candidate.cost) {
                Some(prospective) if prospective <= self.config.ceiling => {
                    self.total = prospective;
                    self.selection.push(candidate.clone());
                    ToggleOutcome::Committed { total: self.total }
                }
                _ => ToggleOutcome::Rejected {
                    message: BUDGET_EXCEEDED_MESSAGE.to_string(),
                },
            }
        } else {
            if !selected {
                return ToggleOutcome::NoChange;
            }

            // Retain preserves relative order of the remaining entries
            self.selection.retain(|c| c.id != candidate.id);
            self.total -= candidate.cost;
            ToggleOutcome::Removed { total: self.total }
        }
    }

    /// Current selection, in insertion order
    pub fn selection(&self) -> &[Candidate] {
        &self.selection
    }

    /// Current running total
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Budget ceiling
    pub fn ceiling(&self) -> u64 {
        self.config.ceiling
    }

    /// Headroom left under the ceiling
    pub fn remaining(&self) -> u64 {
        self.config.ceiling.saturating_sub(self.total)
    }

    /// Ratio of the running total to the ceiling (0.0 to 1.0)
    pub fn utilization(&self) -> f64 {
        if self.config.ceiling == 0 {
            return 0.0;
        }
        (self.total as f64) / (self.config.ceiling as f64)
    }

    /// Number of selected candidates
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Whether a candidate id is currently selected
    pub fn is_selected(&self, id: u32) -> bool {
        self.selection.iter().any(|c| c.id == id)
    }

    /// Clear the selection and total
    pub fn reset(&mut self) {
        self.selection.clear();
        self.total = 0;
    }
}

impl Default for BudgetSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use quickcheck_macros::quickcheck;

    fn candidate(id: u32, cost: u64) -> Candidate {
        Candidate::new(id, &format!("Candidate {}", id), "Test", cost)
    }

    #[test]
    fn test_commit_within_ceiling() {
        let mut selector = BudgetSelector::new();
        let outcome = selector.toggle(&candidate(1, 52_000), true);
        assert_eq!(outcome, ToggleOutcome::Committed { total: 52_000 });
        assert_eq!(selector.total(), 52_000);
        assert_eq!(selector.selected_count(), 1);
    }

    #[test]
    fn test_reject_over_ceiling() {
        let mut selector = BudgetSelector::new();
        selector.toggle(&candidate(3, 72_000), true);

        // 72_000 + 52_000 = 124_000 > 100_000
        let outcome = selector.toggle(&candidate(1, 52_000), true);
        assert_eq!(
            outcome,
            ToggleOutcome::Rejected {
                message: "Budget exceeded! Cannot add player.".to_string()
            }
        );
        assert_eq!(selector.total(), 72_000);
        assert_eq!(selector.selected_count(), 1);
        assert!(!selector.is_selected(1));
    }

    #[test]
    fn test_commit_exactly_at_ceiling() {
        let mut selector = BudgetSelector::new();
        assert!(selector.toggle(&candidate(1, 52_000), true).changed());
        let outcome = selector.toggle(&candidate(4, 48_000), true);
        assert_eq!(outcome, ToggleOutcome::Committed { total: 100_000 });
        assert_eq!(selector.total(), selector.ceiling());
        assert_eq!(selector.remaining(), 0);
    }

    #[test]
    fn test_remove_subtracts_cost() {
        let mut selector = BudgetSelector::new();
        selector.toggle(&candidate(1, 52_000), true);
        selector.toggle(&candidate(2, 30_000), true);

        let outcome = selector.toggle(&candidate(1, 52_000), false);
        assert_eq!(outcome, ToggleOutcome::Removed { total: 30_000 });
        assert_eq!(selector.total(), 30_000);
        assert!(!selector.is_selected(1));
        assert!(selector.is_selected(2));
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let mut selector = BudgetSelector::new();
        selector.toggle(&candidate(1, 52_000), true);
        let before_total = selector.total();
        let before_ids: Vec<u32> = selector.selection().iter().map(|c| c.id).collect();

        selector.toggle(&candidate(2, 30_000), true);
        selector.toggle(&candidate(2, 30_000), false);

        assert_eq!(selector.total(), before_total);
        let after_ids: Vec<u32> = selector.selection().iter().map(|c| c.id).collect();
        assert_eq!(after_ids, before_ids);
    }

    #[test]
    fn test_re_add_is_noop() {
        let mut selector = BudgetSelector::new();
        selector.toggle(&candidate(1, 52_000), true);

        let outcome = selector.toggle(&candidate(1, 52_000), true);
        assert_eq!(outcome, ToggleOutcome::NoChange);
        assert_eq!(selector.total(), 52_000);
        assert_eq!(selector.selected_count(), 1);
    }

    #[test]
    fn test_remove_non_selected_is_noop() {
        let mut selector = BudgetSelector::new();
        selector.toggle(&candidate(1, 52_000), true);

        let outcome = selector.toggle(&candidate(9, 45_000), false);
        assert_eq!(outcome, ToggleOutcome::NoChange);
        assert_eq!(selector.total(), 52_000);
        assert_eq!(selector.selected_count(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut selector = BudgetSelector::new();
        selector.toggle(&candidate(4, 10_000), true);
        selector.toggle(&candidate(2, 10_000), true);
        selector.toggle(&candidate(9, 10_000), true);
        selector.toggle(&candidate(2, 10_000), false);

        let ids: Vec<u32> = selector.selection().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 9]);
    }

    #[test]
    fn test_utilization() {
        let mut selector = BudgetSelector::new();
        assert_eq!(selector.utilization(), 0.0);
        selector.toggle(&candidate(1, 50_000), true);
        assert!((selector.utilization() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_ceiling_utilization() {
        let selector = BudgetSelector::with_config(SelectorConfig::with_ceiling(0));
        assert_eq!(selector.utilization(), 0.0);
    }

    #[test]
    fn test_zero_ceiling_rejects_all_positive_costs() {
        let mut selector = BudgetSelector::with_config(SelectorConfig::with_ceiling(0));
        let outcome = selector.toggle(&candidate(1, 1), true);
        assert!(outcome.is_rejected());
        assert_eq!(selector.total(), 0);
    }

    #[test]
    fn test_extreme_cost_rejected_without_overflow() {
        let mut selector = BudgetSelector::new();
        selector.toggle(&candidate(1, 52_000), true);

        // total + cost would overflow u64; must reject, not wrap or panic
        let outcome = selector.toggle(&candidate(2, u64::MAX), true);
        assert!(outcome.is_rejected());
        assert_eq!(selector.total(), 52_000);
        assert_eq!(selector.selected_count(), 1);
    }

    #[test]
    fn test_reset() {
        let mut selector = BudgetSelector::new();
        selector.toggle(&candidate(1, 52_000), true);
        selector.reset();
        assert_eq!(selector.total(), 0);
        assert_eq!(selector.selected_count(), 0);
    }

    #[test]
    fn test_custom_ceiling() {
        let mut selector = BudgetSelector::with_config(SelectorConfig::with_ceiling(60_000));
        assert!(selector.toggle(&candidate(1, 52_000), true).changed());
        assert!(selector.toggle(&candidate(9, 45_000), true).is_rejected());
        assert_eq!(selector.remaining(), 8_000);
    }

    /// For any toggle sequence over the built-in roster, the running total
    /// equals the sum of selected costs and never exceeds the ceiling.
    #[quickcheck]
    fn prop_total_matches_selection(ops: Vec<(u8, bool)>) -> bool {
        let roster = Roster::builtin();
        let mut selector = BudgetSelector::new();

        for (idx, want) in ops {
            let candidate = &roster.candidates()[(idx as usize) % roster.len()];
            selector.toggle(candidate, want);

            let sum: u64 = selector.selection().iter().map(|c| c.cost).sum();
            if selector.total() != sum || selector.total() > selector.ceiling() {
                return false;
            }
        }
        true
    }

    /// No toggle sequence can produce duplicate ids in the selection.
    #[quickcheck]
    fn prop_no_duplicate_ids(ops: Vec<(u8, bool)>) -> bool {
        let roster = Roster::builtin();
        let mut selector = BudgetSelector::new();

        for (idx, want) in ops {
            let candidate = &roster.candidates()[(idx as usize) % roster.len()];
            selector.toggle(candidate, want);
        }

        let mut ids: Vec<u32> = selector.selection().iter().map(|c| c.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        ids.len() == len
    }
}
