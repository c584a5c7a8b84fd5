//! In-process selection statistics
//!
//! Counts toggle outcomes for the `/status` view. No external metrics
//! system; everything lives in memory for the session lifetime.

use crate::selector::ToggleOutcome;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Counters over toggle outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStats {
    pub toggles: usize,
    pub commits: usize,
    pub removals: usize,
    pub rejections: usize,
    pub noops: usize,
}

/// Shared stats collector
#[derive(Clone)]
pub struct StatsCollector {
    stats: Arc<Mutex<SelectionStats>>,
    start_time: Instant,
}

impl StatsCollector {
    pub fn new() -> Self {
        StatsCollector {
            stats: Arc::new(Mutex::new(SelectionStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record one toggle outcome
    pub fn record(&self, outcome: &ToggleOutcome) {
        let mut stats = self.stats.lock().unwrap();
        stats.toggles += 1;
        match outcome {
            ToggleOutcome::Committed { .. } => stats.commits += 1,
            ToggleOutcome::Removed { .. } => stats.removals += 1,
            ToggleOutcome::Rejected { .. } => stats.rejections += 1,
            ToggleOutcome::NoChange => stats.noops += 1,
        }
    }

    /// Snapshot of current counters
    pub fn get_stats(&self) -> SelectionStats {
        self.stats.lock().unwrap().clone()
    }

    /// Time since the collector was created
    pub fn session_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Reset all counters
    pub fn reset(&self) {
        *self.stats.lock().unwrap() = SelectionStats::default();
    }
}

impl Default for StatsCollector {
    fn default() -> Self {
        Self::new()
    }
}
