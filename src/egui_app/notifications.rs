use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Success => write!(f, "SUCCESS"),
            NotificationLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    created: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= TOAST_LIFETIME
    }
}

/// Bounded toast queue, oldest first
pub struct Notifications {
    entries: VecDeque<Notification>,
    max_entries: usize,
}

impl Notifications {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn push(&mut self, level: NotificationLevel, title: impl Into<String>, message: impl Into<String>) {
        let notification = Notification {
            level,
            title: title.into(),
            message: message.into(),
            created: Instant::now(),
        };

        tracing::debug!("[{}] {}: {}", notification.level, notification.title, notification.message);

        self.entries.push_back(notification);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Success, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Error, title, message);
    }

    /// Drop toasts older than their lifetime
    pub fn prune(&mut self, now: Instant) {
        self.entries.retain(|n| !n.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(5)
    }
}
