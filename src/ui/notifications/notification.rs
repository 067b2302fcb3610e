// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::session::NotifyIcon;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Like confirmation (pink, 3s duration).
    #[default]
    Love,
    /// Informational message (blue, 3s duration).
    Info,
    /// Something degraded but the page still works (orange, 5s duration).
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Love => palette::PINK_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Love | Severity::Info => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }

    /// Glyph drawn at the left of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Love => "\u{2665}",
            Severity::Info => "i",
            Severity::Warning => "!",
        }
    }
}

impl From<NotifyIcon> for Severity {
    fn from(icon: NotifyIcon) -> Self {
        match icon {
            NotifyIcon::Heart => Severity::Love,
            NotifyIcon::Info => Severity::Info,
            NotifyIcon::Warning => Severity::Warning,
        }
    }
}

/// A toast to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    detail: Option<String>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            detail: None,
            created_at: Instant::now(),
        }
    }

    pub fn love(message: impl Into<String>) -> Self {
        Self::new(Severity::Love, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Adds a second, smaller line under the message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether this notification has outlived its severity's
    /// duration at `now`.
    #[must_use]
    pub fn should_auto_dismiss(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.severity.auto_dismiss_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::love("test");
        let n2 = Notification::love("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Love.color(), Severity::Info.color());
        assert_ne!(Severity::Love.color(), Severity::Warning.color());
        assert_ne!(Severity::Info.color(), Severity::Warning.color());
    }

    #[test]
    fn warning_duration_is_longer_than_love() {
        assert!(Severity::Warning.auto_dismiss_duration() > Severity::Love.auto_dismiss_duration());
    }

    #[test]
    fn icons_map_to_severities() {
        assert_eq!(Severity::from(NotifyIcon::Heart), Severity::Love);
        assert_eq!(Severity::from(NotifyIcon::Info), Severity::Info);
        assert_eq!(Severity::from(NotifyIcon::Warning), Severity::Warning);
    }

    #[test]
    fn detail_is_optional() {
        let plain = Notification::info("hello");
        assert!(plain.detail().is_none());

        let detailed = Notification::love("Thanks").with_detail("You've shown 2 cats some love");
        assert_eq!(detailed.message(), "Thanks");
        assert_eq!(detailed.detail(), Some("You've shown 2 cats some love"));
    }

    #[test]
    fn expires_after_three_seconds() {
        let notification = Notification::love("x");
        let created = notification.created_at();
        assert!(!notification.should_auto_dismiss(created + Duration::from_millis(2_999)));
        assert!(notification.should_auto_dismiss(created + Duration::from_secs(3)));
    }
}
