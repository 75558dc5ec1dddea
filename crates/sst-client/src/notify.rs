//! User-visible notifications raised by the transport.
//!
//! The transport never owns a global toast channel. Whoever builds the client
//! injects a [`Notifier`]; the application shell decides how notices are shown
//! and for how long they stay up.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// How loud a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A transient message for the person using the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    /// HTTP status that triggered the notice, when there was one.
    pub status: Option<u16>,
    /// How long the notice stays visible before it dismisses itself.
    pub dismiss_after: Duration,
}

impl Notice {
    #[must_use]
    pub fn error(message: impl Into<String>, status: Option<u16>, dismiss_after: Duration) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            status,
            dismiss_after,
        }
    }
}

/// Sink for notices. Implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

impl<F> Notifier for F
where
    F: Fn(Notice) + Send + Sync,
{
    fn notify(&self, notice: Notice) {
        self(notice);
    }
}

/// Forwards notices to `tracing`. Used when no front end is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => {
                tracing::error!(status = ?notice.status, "{}", notice.message);
            }
            Severity::Warning => tracing::warn!(status = ?notice.status, "{}", notice.message),
            Severity::Info => tracing::info!("{}", notice.message),
        }
    }
}

/// Keeps every notice in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return the notices received so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
