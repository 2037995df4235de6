//! User-facing notices.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Global counter for unique notice IDs.
static NOTICE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    NOTICE_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// How a notice reaches the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Blocking browser alert.
    Alert,
    /// Transient banner that dismisses itself.
    Toast,
}

/// A message for the visitor.
///
/// Each notice gets a unique `id` so a pending auto-dismiss only clears the
/// notice it was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: usize,
    pub kind: NoticeKind,
    pub delivery: Delivery,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, delivery: Delivery, message: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            kind,
            delivery,
            message: message.into(),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, Delivery::Alert, message)
    }

    pub fn success_toast(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, Delivery::Toast, message)
    }

    pub fn error_toast(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, Delivery::Toast, message)
    }
}
