use std::time::{Duration, Instant};

use crate::theme;
use crate::theme::notification::NotificationColors;

/// Determines style and lifetime of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    #[default]
    Info,
    Warning,
    /// Stays until replaced or dismissed
    Error,
}

impl NotificationType {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(1500)),
            NotificationType::Warning => Some(Duration::from_secs(10)),
            NotificationType::Error => None,
        }
    }

    pub fn colors(self) -> &'static NotificationColors {
        match self {
            NotificationType::Info => &theme::notification::INFO,
            NotificationType::Warning => &theme::notification::WARNING,
            NotificationType::Error => &theme::notification::ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationType,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.kind
            .duration()
            .is_some_and(|d| self.created_at.elapsed() >= d)
    }
}

/// Holds at most one notification; showing a new one replaces the old.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Info);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Error);
    }

    fn show_with_type(&mut self, message: &str, kind: NotificationType) {
        self.current = Some(Notification::new(message, kind));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drops an expired notification; returns true if one was removed.
    pub fn clear_if_expired(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
