//! Operator feedback: transient toasts and the success dialog
//!
//! The directory reducer only describes what to tell the operator
//! ([`Notification`]); a [`Notifier`] decides how. The TUI uses
//! [`FeedbackCenter`], tests can collect notifications in a `Vec`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Most toasts shown at once; older ones are dropped first
pub const MAX_TOASTS: usize = 3;

/// Something to tell the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Non-blocking success toast
    Success(String),
    /// Non-blocking error toast
    Error(String),
    /// Dialog that stays until dismissed
    Alert {
        /// Dialog title
        title: String,
        /// Dialog body
        text: String,
    },
}

/// Capability that surfaces notifications to the operator
pub trait Notifier {
    /// Deliver one notification
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Green, operation succeeded
    Success,
    /// Red, operation failed
    Error,
}

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Severity
    pub level: ToastLevel,
    /// Message text
    pub message: String,
    shown_at: Instant,
}

/// Dialog waiting for the operator to dismiss it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Dialog title
    pub title: String,
    /// Dialog body
    pub text: String,
}

/// Toast stack plus at most one alert, as rendered by the TUI
#[derive(Debug)]
pub struct FeedbackCenter {
    toasts: VecDeque<Toast>,
    alert: Option<Alert>,
    ttl: Duration,
}

impl FeedbackCenter {
    /// Create a feedback center whose toasts live for `ttl`
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            alert: None,
            ttl,
        }
    }

    /// Toasts on screen, oldest first
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// The alert waiting for dismissal, if any
    #[must_use]
    pub const fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Close the alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Drop toasts that have been visible longer than the configured duration
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
    }

    fn push_toast(&mut self, level: ToastLevel, message: String, now: Instant) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            level,
            message,
            shown_at: now,
        });
    }
}

impl Default for FeedbackCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(3_000))
    }
}

impl Notifier for FeedbackCenter {
    fn notify(&mut self, notification: Notification) {
        let now = Instant::now();
        match notification {
            Notification::Success(message) => {
                info!(%message, "Success toast");
                self.push_toast(ToastLevel::Success, message, now);
            }
            Notification::Error(message) => {
                warn!(%message, "Error toast");
                self.push_toast(ToastLevel::Error, message, now);
            }
            Notification::Alert { title, text } => {
                info!(%title, %text, "Alert");
                self.alert = Some(Alert { title, text });
            }
        }
    }
}
