//! # Submission Error Types
//!
//! Error types for the outbound contact submission.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Submission Error Categories                         │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Rejected       │  │  Transport      │  │  InFlight               │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Server said    │  │  Request never  │  │  Single-flight guard    │ │
//! │  │  non-2xx; body  │  │  completed      │  │  refused a second       │ │
//! │  │  message kept   │  │  (DNS, refused, │  │  submit while one is    │ │
//! │  │  when present   │  │  timeout, ...)  │  │  still running          │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  All variants are request-scoped: surfaced as a transient notification │
//! │  while the form's entered values are preserved for retry.              │
//! │                                                                         │
//! │  A fourth variant, Validation, signals that a submit click stopped at  │
//! │  the schema; the per-field messages stay in the session's FormErrors.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Fallback shown when the server rejects without a usable body message.
pub const GENERIC_REJECTION: &str = "Something went wrong";

/// Fallback shown when the request never reached the server.
pub const GENERIC_TRANSPORT_FAILURE: &str = "Failed to send your message";

/// Result type alias for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// A failed contact submission.
///
/// ## Design Principles
/// - Never fatal: the worst case is a form that must be resubmitted
/// - [`SubmitError::user_message`] is what the notification shows; the
///   variants keep the underlying detail for logs
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is taken from a `message` field in the JSON response body
    /// when one is present, else [`GENERIC_REJECTION`].
    #[error("Server rejected submission with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The request failed before a response arrived.
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// A submission is already running for this form instance.
    #[error("A submission is already in flight")]
    InFlight,

    /// The value set did not pass its schema; the field messages live in the
    /// session's [`FormErrors`](bazaar_core::forms::FormErrors), this variant
    /// only signals that the submit click went nowhere.
    #[error("Form validation failed")]
    Validation,
}

impl SubmitError {
    /// The text the failure notification shows to the user.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message, .. } => message.clone(),
            SubmitError::Transport(_) => GENERIC_TRANSPORT_FAILURE.to_string(),
            SubmitError::InFlight => self.to_string(),
            SubmitError::Validation => "Please check the form for errors".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_user_message_prefers_server_text() {
        let err = SubmitError::Rejected {
            status: 500,
            message: "server error".to_string(),
        };
        assert_eq!(err.user_message(), "server error");
        assert_eq!(
            err.to_string(),
            "Server rejected submission with status 500: server error"
        );
    }

    #[test]
    fn test_validation_user_message() {
        assert_eq!(
            SubmitError::Validation.user_message(),
            "Please check the form for errors"
        );
    }

    #[test]
    fn test_in_flight_message() {
        assert_eq!(
            SubmitError::InFlight.user_message(),
            "A submission is already in flight"
        );
    }
}
