//! Roster provider
//!
//! Owns the immutable, ordered list of candidates for the process lifetime.
//! Rosters come from the built-in demo data or from a JSON file; either way
//! they are validated once on load and never mutated afterwards.

use crate::errors::{Result, SelectorError};
use crate::roster::data::builtin_candidates;
use crate::roster::types::Candidate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Immutable ordered candidate list
#[derive(Debug, Clone)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Create the built-in demo roster
    pub fn builtin() -> Self {
        // Built-in data is known valid
        Roster {
            candidates: builtin_candidates(),
        }
    }

    /// Create a roster from explicit candidates, validating them
    pub fn from_candidates(candidates: Vec<Candidate>) -> Result<Self> {
        Self::validate(&candidates)?;
        Ok(Roster { candidates })
    }

    /// Load a roster from a JSON file (an array of candidates)
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let candidates: Vec<Candidate> = serde_json::from_str(&contents)?;
        Self::from_candidates(candidates)
    }

    /// Validate roster shape: non-empty, unique ids, non-empty names
    fn validate(candidates: &[Candidate]) -> Result<()> {
        if candidates.is_empty() {
            return Err(SelectorError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for candidate in candidates {
            if !seen.insert(candidate.id) {
                return Err(SelectorError::DuplicateCandidate { id: candidate.id });
            }
            if candidate.name.trim().is_empty() {
                return Err(SelectorError::InvalidCandidate {
                    id: candidate.id,
                    reason: "name is empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Look up a candidate by id
    pub fn get(&self, id: u32) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// All candidates in load order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
