//! Transient user notifications (toasts).
//!
//! # Responsibility
//! - Define the toast payload and the `Notifier` collaborator seam.
//! - Provide a queue-backed notifier for hosts and tests, and a log-backed one.

use log::{info, warn};
use std::cell::RefCell;

/// Visual emphasis of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Error emphasis.
    Destructive,
}

/// One short-lived message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Notification collaborator.
///
/// Takes `&self` so one notifier can be shared by several producers.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Collects toasts until the host drains them.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: RefCell<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all pending toasts, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        self.pending.take()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        self.pending.borrow_mut().push(toast);
    }
}

/// Writes toasts to the log instead of displaying them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => info!(
                "event=toast module=notify status=ok title={} description={}",
                toast.title, toast.description
            ),
            ToastVariant::Destructive => warn!(
                "event=toast module=notify status=error title={} description={}",
                toast.title, toast.description
            ),
        }
    }
}
