//! Roster type definitions

use serde::{Deserialize, Serialize};

/// A selectable roster entry with a fixed hiring cost
///
/// Candidates are immutable once loaded; the id is unique and stable for the
/// lifetime of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique, stable identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Department label, shown alongside the name
    pub department: String,

    /// Cost in whole currency units
    pub cost: u64,
}

impl Candidate {
    pub fn new(id: u32, name: &str, department: &str, cost: u64) -> Self {
        Candidate {
            id,
            name: name.to_string(),
            department: department.to_string(),
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_construction() {
        let c = Candidate::new(1, "Alice Johnson", "HR", 52_000);
        assert_eq!(c.id, 1);
        assert_eq!(c.cost, 52_000);
    }

    #[test]
    fn test_candidate_serialization() {
        let c = Candidate::new(2, "Bob Smith", "IT", 68_000);
        let json = serde_json::to_string(&c).unwrap();
        let back: Candidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
