//! Team session coordinator
//!
//! Ties the roster, budget selector, notification board, and stats behind a
//! single surface. All mutations go through `add`/`remove`, which validate
//! first and only then commit, raise the rejection banner, record stats, and
//! emit events for the presentation layer.

use crate::errors::{Result, SelectorError};
use crate::events::{EventBus, SelectorEvent};
use crate::notify::NoticeBoard;
use crate::roster::{Candidate, Roster};
use crate::selector::{BudgetSelector, SelectorConfig, ToggleOutcome};
use crate::telemetry::StatsCollector;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;

/// Maximum number of actions kept in history
const MAX_HISTORY_SIZE: usize = 100;

/// What a recorded action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Added,
    Removed,
    Rejected,
}

/// One committed, removed, or rejected toggle
#[derive(Debug, Clone)]
pub struct ActionRecord {
    pub candidate_id: u32,
    pub candidate_name: String,
    pub action: ActionKind,
    pub total_after: u64,
    pub timestamp: DateTime<Utc>,
}

/// Interactive team-building session state
pub struct TeamSession {
    roster: Roster,
    selector: BudgetSelector,
    notices: NoticeBoard,
    stats: StatsCollector,
    events: EventBus,
    history: VecDeque<ActionRecord>,
}

impl TeamSession {
    /// Create a session with default selector config and notice TTL
    pub fn new(roster: Roster) -> (Self, mpsc::Receiver<SelectorEvent>) {
        Self::with_config(roster, SelectorConfig::default(), crate::notify::DEFAULT_NOTICE_TTL)
    }

    /// Create a session with a custom ceiling and notice window
    pub fn with_config(
        roster: Roster,
        config: SelectorConfig,
        notice_ttl: Duration,
    ) -> (Self, mpsc::Receiver<SelectorEvent>) {
        let (events, receiver) = EventBus::new();
        let session = TeamSession {
            roster,
            selector: BudgetSelector::with_config(config),
            notices: NoticeBoard::with_ttl(notice_ttl),
            stats: StatsCollector::new(),
            events,
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
        };
        (session, receiver)
    }

    /// Request adding a candidate by id
    ///
    /// Unknown ids are errors; a budget rejection is not, it comes back as
    /// `ToggleOutcome::Rejected` with the banner already raised.
    pub async fn add(&mut self, id: u32) -> Result<ToggleOutcome> {
        let candidate = self.lookup(id)?;
        let outcome = self.selector.toggle(&candidate, true);
        self.apply_outcome(&candidate, &outcome).await;
        Ok(outcome)
    }

    /// Request removing a candidate by id
    pub async fn remove(&mut self, id: u32) -> Result<ToggleOutcome> {
        let candidate = self.lookup(id)?;
        let outcome = self.selector.toggle(&candidate, false);
        self.apply_outcome(&candidate, &outcome).await;
        Ok(outcome)
    }

    fn lookup(&self, id: u32) -> Result<Candidate> {
        self.roster
            .get(id)
            .cloned()
            .ok_or(SelectorError::UnknownCandidate { id })
    }

    async fn apply_outcome(&mut self, candidate: &Candidate, outcome: &ToggleOutcome) {
        self.stats.record(outcome);

        match outcome {
            ToggleOutcome::Committed { total } => {
                self.record(candidate, ActionKind::Added, *total);
                self.events
                    .emit(SelectorEvent::CandidateAdded {
                        id: candidate.id,
                        name: candidate.name.clone(),
                        total: *total,
                    })
                    .await;
            }
            ToggleOutcome::Removed { total } => {
                self.record(candidate, ActionKind::Removed, *total);
                self.events
                    .emit(SelectorEvent::CandidateRemoved {
                        id: candidate.id,
                        name: candidate.name.clone(),
                        total: *total,
                    })
                    .await;
            }
            ToggleOutcome::Rejected { message } => {
                self.notices.raise(message.clone());
                self.record(candidate, ActionKind::Rejected, self.selector.total());
                self.events
                    .emit(SelectorEvent::SelectionRejected {
                        id: candidate.id,
                        message: message.clone(),
                    })
                    .await;
            }
            ToggleOutcome::NoChange => {}
        }
    }

    fn record(&mut self, candidate: &Candidate, action: ActionKind, total_after: u64) {
        if self.history.len() >= MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(ActionRecord {
            candidate_id: candidate.id,
            candidate_name: candidate.name.clone(),
            action,
            total_after,
            timestamp: Utc::now(),
        });
    }

    /// Clear selection, banner, and stats; the roster is untouched
    pub async fn reset(&mut self) {
        self.selector.reset();
        self.notices.dismiss();
        self.stats.reset();
        self.history.clear();
        self.events.emit(SelectorEvent::SelectionReset).await;
    }

    /// Action history, newest first
    pub fn history(&self, limit: usize) -> Vec<&ActionRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selector(&self) -> &BudgetSelector {
        &self.selector
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn stats(&self) -> &StatsCollector {
        &self.stats
    }
}
