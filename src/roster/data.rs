//! Built-in demo roster
//!
//! Ten candidates with fixed costs, available without any roster file.

use crate::roster::types::Candidate;

/// Build the default ten-entry roster
pub fn builtin_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(1, "Alice Johnson", "HR", 52_000),
        Candidate::new(2, "Bob Smith", "IT", 68_000),
        Candidate::new(3, "Charlie Davis", "Finance", 72_000),
        Candidate::new(4, "Diana Lee", "Marketing", 48_000),
        Candidate::new(5, "Ethan Brown", "Sales", 56_000),
        Candidate::new(6, "Fiona Wilson", "Operations", 64_000),
        Candidate::new(7, "George Miller", "IT", 59_000),
        Candidate::new(8, "Hannah Clark", "Finance", 70_000),
        Candidate::new(9, "Ian Turner", "Support", 45_000),
        Candidate::new(10, "Julia Adams", "Management", 85_000),
    ]
}
