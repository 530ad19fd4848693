//! # Notifications
//!
//! The transient notification channel (toasts, in the storefront UI).
//!
//! Success and failure travel through the same channel and are distinguished
//! only by a severity flag; the actual rendering is an external collaborator
//! behind the [`Notifier`] trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Severity
// =============================================================================

/// How a notification should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Normal confirmation styling.
    Success,
    /// Destructive/error styling.
    Error,
}

// =============================================================================
// Notification
// =============================================================================

/// One transient message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub severity: Severity,
    /// When the notification was raised.
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a success notification.
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            body: body.into(),
            severity: Severity::Success,
            raised_at: Utc::now(),
        }
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            body: body.into(),
            severity: Severity::Error,
            raised_at: Utc::now(),
        }
    }
}

// =============================================================================
// Notifier Seam
// =============================================================================

/// The seam to whatever renders notifications (the UI's toast stack).
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Test notifier that records everything it is handed.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub raised: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.raised.push(notification);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
