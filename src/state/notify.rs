//! User-facing toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session transitions, the request authorizer, and route guards report every
//! terminal failure exactly once through a `Notifier`. The UI renders the
//! `NotificationCenter` queue as a toast stack.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::util::observable::{Observable, Subscription};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    /// CSS modifier used by the toast stack.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Level::Success => "toast--success",
            Level::Info => "toast--info",
            Level::Warning => "toast--warning",
            Level::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str, title: &str) {
        self.notify(Notification {
            level: Level::Success,
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }

    fn info(&self, message: &str, title: &str) {
        self.notify(Notification {
            level: Level::Info,
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }

    fn warning(&self, message: &str, title: &str) {
        self.notify(Notification {
            level: Level::Warning,
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }

    fn error(&self, message: &str, title: &str) {
        self.notify(Notification {
            level: Level::Error,
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }
}

/// A queued notification with a stable id for dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Observable toast queue.
#[derive(Clone)]
pub struct NotificationCenter {
    toasts: Observable<Vec<Toast>>,
    next_id: std::sync::Arc<AtomicU64>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            toasts: Observable::new(Vec::new()),
            next_id: std::sync::Arc::new(AtomicU64::new(1)),
        }
    }

    /// Currently visible toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn clear(&self) {
        self.toasts.set(Vec::new());
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Vec<Toast>) + Send + Sync + 'static,
    {
        self.toasts.subscribe(listener)
    }

    /// Queue a notification and return its toast id.
    pub fn push(&self, notification: Notification) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.toasts.update(|list| list.push(Toast { id, notification }));
        id
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Error | Level::Warning => {
                log::warn!("{}: {}", notification.title, notification.message);
            }
            Level::Success | Level::Info => {
                log::info!("{}: {}", notification.title, notification.message);
            }
        }
        self.push(notification);
    }
}
