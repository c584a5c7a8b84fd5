//! Auto-dismissing notification board
//!
//! `raise` shows a message and schedules a single deferred clear after a
//! fixed TTL. A new `raise` within the window cancels the previous timer and
//! restarts the window, so a newer message is never hidden early by a stale
//! timer.

use crate::notify::state::Notification;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default visibility window for a raised notification
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(3000);

/// Notification holder with timed auto-dismissal
///
/// Requires a tokio runtime: each `raise` spawns one timer task. The timer
/// is the only suspension point in the system; all other mutations are
/// synchronous.
pub struct NoticeBoard {
    notice: Arc<Mutex<Notification>>,
    ttl: Duration,
    timer: Option<JoinHandle<()>>,
}

impl NoticeBoard {
    /// Create a board with the default 3000 ms window
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_NOTICE_TTL)
    }

    /// Create a board with a custom visibility window
    pub fn with_ttl(ttl: Duration) -> Self {
        NoticeBoard {
            notice: Arc::new(Mutex::new(Notification::hidden())),
            ttl,
            timer: None,
        }
    }

    /// Show a message and schedule its dismissal
    ///
    /// Cancels any pending dismissal first, so overlapping raises restart
    /// the full window for the newest message.
    pub fn raise(&mut self, message: impl Into<String>) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        self.notice.lock().unwrap().raise(message.into());

        // The window starts now, not when the timer task is first polled
        let deadline = tokio::time::Instant::now() + self.ttl;
        let notice = Arc::clone(&self.notice);
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            notice.lock().unwrap().expire();
        }));
    }

    /// Hide the banner immediately and cancel the pending timer
    pub fn dismiss(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.notice.lock().unwrap().expire();
    }

    /// Snapshot of the current notification
    pub fn snapshot(&self) -> Notification {
        self.notice.lock().unwrap().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.notice.lock().unwrap().is_visible()
    }

    /// Configured visibility window
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NoticeBoard {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, Duration};

    #[tokio::test(start_paused = true)]
    async fn test_raise_shows_message() {
        let mut board = NoticeBoard::new();
        board.raise("Budget exceeded! Cannot add player.");

        let notice = board.snapshot();
        assert!(notice.is_visible());
        assert_eq!(notice.message, "Budget exceeded! Cannot add player.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_expires_after_ttl() {
        let mut board = NoticeBoard::new();
        board.raise("over budget");

        advance(Duration::from_millis(3001)).await;
        // Let the timer task run
        tokio::task::yield_now().await;

        assert!(!board.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_still_visible_before_ttl() {
        let mut board = NoticeBoard::new();
        board.raise("over budget");

        advance(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;

        assert!(board.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_re_raise_restarts_window() {
        let mut board = NoticeBoard::new();
        board.raise("first");

        advance(Duration::from_millis(2000)).await;
        board.raise("second");

        // The first timer would have fired here; it was cancelled
        advance(Duration::from_millis(1500)).await;
        tokio::task::yield_now().await;
        let notice = board.snapshot();
        assert!(notice.is_visible());
        assert_eq!(notice.message, "second");

        // Full window for the second message elapses
        advance(Duration::from_millis(1600)).await;
        tokio::task::yield_now().await;
        assert!(!board.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_anchored_at_raise_time() {
        let mut board = NoticeBoard::new();
        board.raise("over budget");

        // Advance the full window before the timer task has ever been
        // polled; the deadline must already be fixed at raise time
        advance(Duration::from_millis(3001)).await;
        tokio::task::yield_now().await;

        assert!(!board.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_timer() {
        let mut board = NoticeBoard::new();
        board.raise("over budget");
        board.dismiss();
        assert!(!board.is_visible());

        // A later raise is unaffected by the cancelled timer
        board.raise("again");
        advance(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        assert!(board.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_ttl() {
        let mut board = NoticeBoard::with_ttl(Duration::from_millis(500));
        board.raise("short-lived");

        advance(Duration::from_millis(501)).await;
        tokio::task::yield_now().await;
        assert!(!board.is_visible());
    }
}
