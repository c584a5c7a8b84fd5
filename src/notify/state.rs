//! Notification state machine
//!
//! A transient user-facing banner with two states:
//!
//! ```text
//! Hidden --raise()--> Visible --(ttl elapses)--> Hidden
//! ```
//!
//! Initial state is Hidden; there is no terminal state, the cycle repeats
//! for the life of the session. The message is retained when the banner
//! expires, only the visibility flips.

/// Visibility states of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeState {
    /// No banner shown (initial state)
    Hidden,

    /// Banner shown, waiting for the dismissal timer
    Visible,
}

impl NoticeState {
    pub fn is_visible(&self) -> bool {
        matches!(self, NoticeState::Visible)
    }
}

/// A transient (message, visibility) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub state: NoticeState,
}

impl Notification {
    /// Initial hidden notification with no message
    pub fn hidden() -> Self {
        Notification {
            message: String::new(),
            state: NoticeState::Hidden,
        }
    }

    /// Transition to Visible with a new message
    pub fn raise(&mut self, message: String) {
        self.message = message;
        self.state = NoticeState::Visible;
    }

    /// Transition to Hidden; the message is retained
    pub fn expire(&mut self) {
        self.state = NoticeState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::hidden()
    }
}
