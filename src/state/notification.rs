//! Transient, dismissible notifications.

/// Ticks a notification stays visible (about ten seconds at the UI tick rate).
///
pub const NOTIFICATION_TICKS: u16 = 160;

/// Severity of a notification.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Message shown on top of the current view until dismissed or expired.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    remaining_ticks: u16,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: &str) -> Self {
        Notification {
            level,
            message: message.to_owned(),
            remaining_ticks: NOTIFICATION_TICKS,
        }
    }

    pub fn info(message: &str) -> Self {
        Notification::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: &str) -> Self {
        Notification::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: &str) -> Self {
        Notification::new(NotificationLevel::Error, message)
    }

    /// Count down one tick. Returns false once expired.
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}
