//! Transient error notifications with timed auto-dismissal

pub mod state;
pub mod timer;

pub use state::{NoticeState, Notification};
pub use timer::{NoticeBoard, DEFAULT_NOTICE_TTL};
