//! Event bus for selection updates
//!
//! Publisher-subscriber channel between the selection core and the
//! presentation layer, with a bounded channel so a slow consumer cannot
//! grow memory without limit.

use tokio::sync::mpsc;

/// Selection lifecycle events consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// A candidate was committed to the selection
    CandidateAdded { id: u32, name: String, total: u64 },

    /// A candidate was removed from the selection
    CandidateRemoved { id: u32, name: String, total: u64 },

    /// An addition was rejected by the budget check
    SelectionRejected { id: u32, message: String },

    /// The whole selection was cleared
    SelectionReset,
}

/// Bounded event channel
///
/// Channel capacity: 100 events. Emission never blocks; when the channel is
/// full the event is dropped.
pub struct EventBus {
    sender: mpsc::Sender<SelectorEvent>,
}

impl EventBus {
    pub fn new() -> (Self, mpsc::Receiver<SelectorEvent>) {
        let (sender, receiver) = mpsc::channel(100);
        (EventBus { sender }, receiver)
    }

    /// Emit an event to the subscriber
    pub async fn emit(&self, event: SelectorEvent) {
        let _ = self.sender.try_send(event);
    }

    /// Clone the sender for multi-producer usage
    pub fn clone_sender(&self) -> mpsc::Sender<SelectorEvent> {
        self.sender.clone()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        EventBus {
            sender: self.sender.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new().0
    }
}
