use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Alert, DashboardError, Notification, NotificationLevel};

/// Queue of toasts plus the single modal alert slot.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    alert: Option<Alert>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            alert: None,
            default_duration,
        }
    }

    fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);
        self.queue.push_back(notification);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }

    /// Shows a modal alert, replacing any alert still open.
    pub fn alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    /// Routes an operation failure to the right surface.
    ///
    /// Location failures block; everything else becomes an error toast.
    pub fn report(&mut self, title: &str, error: &DashboardError) {
        if error.is_blocking() {
            self.alert(Alert::error(error.to_string()));
        } else {
            self.error(title, error.to_string());
        }
    }

    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    #[must_use]
    pub const fn current_alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }
}
