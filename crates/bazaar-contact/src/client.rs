//! # Contact Client
//!
//! The HTTP POST of a validated contact message and the interpretation of
//! whatever comes back.
//!
//! ## Outcome Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                POST {endpoint}  body: {name,email,subject,message}      │
//! │                                                                         │
//! │   Response                         Outcome                              │
//! │   ────────                         ───────                              │
//! │   2xx (any body)              ──►  Ok(())                               │
//! │   non-2xx, body has message   ──►  Rejected { status, body.message }    │
//! │   non-2xx, no usable body     ──►  Rejected { status, generic text }    │
//! │   no response at all          ──►  Transport(source)                    │
//! │                                                                         │
//! │   Interpretation is a pure function of (status, body text) so it is    │
//! │   testable without a server.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bazaar_core::forms::AcceptedForm;

use crate::error::{SubmitError, SubmitResult, GENERIC_REJECTION};

// =============================================================================
// Wire Types
// =============================================================================

/// The JSON body of a contact submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Builds the wire body from an accepted contact form.
    ///
    /// Only an [`AcceptedForm`] can become a message: the type encodes that
    /// validation already ran.
    pub fn from_accepted(form: &AcceptedForm) -> Self {
        ContactMessage {
            name: form.get("name").to_string(),
            email: form.get("email").to_string(),
            subject: form.get("subject").to_string(),
            message: form.get("message").to_string(),
        }
    }
}

/// The slice of the server's JSON reply we care about.
#[derive(Debug, Deserialize)]
struct ServerReply {
    message: Option<String>,
}

// =============================================================================
// Response Interpretation
// =============================================================================

/// Maps a received status and body text to a submission outcome.
///
/// A 2xx status is success regardless of body. Anything else is a rejection
/// whose message is taken from a `message` field in the JSON body when one is
/// present, else [`GENERIC_REJECTION`].
pub fn interpret_response(status: u16, body: &str) -> SubmitResult<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_str::<ServerReply>(body)
        .ok()
        .and_then(|reply| reply.message)
        .unwrap_or_else(|| GENERIC_REJECTION.to_string());

    Err(SubmitError::Rejected { status, message })
}

// =============================================================================
// Client
// =============================================================================

/// The contact endpoint client.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// Creates a client for the given endpoint URL
    /// (e.g. `http://localhost:5000/api/contact`).
    pub fn new(endpoint: impl Into<String>) -> Self {
        ContactClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submits a contact message.
    ///
    /// Awaited by the calling view; the session's single-flight guard keeps a
    /// second submission from starting while this one runs.
    pub async fn submit(&self, message: &ContactMessage) -> SubmitResult<()> {
        let start = Instant::now();
        debug!(endpoint = %self.endpoint, subject = %message.subject, "submitting contact message");

        let response = self
            .http
            .post(&self.endpoint)
            .json(message)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let outcome = interpret_response(status, &body);

        let elapsed = start.elapsed();
        match &outcome {
            Ok(()) => info!(
                status,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "contact message accepted"
            ),
            Err(err) => warn!(
                status,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                error = %err,
                "contact message rejected"
            ),
        }

        outcome
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::forms::{contact_schema, FormValue};

    fn valid_form() -> AcceptedForm {
        let mut value = FormValue::for_schema(&contact_schema());
        value.set("name", "Asha Negi");
        value.set("email", "asha@example.com");
        value.set("subject", "Wholesale pricing");
        value.set("message", "Do you offer wholesale rates on honey?");
        contact_schema().validate(&value).unwrap()
    }

    #[test]
    fn test_message_from_accepted_form() {
        let message = ContactMessage::from_accepted(&valid_form());
        assert_eq!(message.name, "Asha Negi");
        assert_eq!(message.email, "asha@example.com");

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["subject"], "Wholesale pricing");
        assert!(json.get("name").is_some() && json.get("message").is_some());
    }

    #[test]
    fn test_any_2xx_is_success() {
        assert!(interpret_response(200, "{}").is_ok());
        assert!(interpret_response(201, "").is_ok());
        assert!(interpret_response(204, "not even json").is_ok());
    }

    #[test]
    fn test_rejection_takes_body_message() {
        let err = interpret_response(500, r#"{"message":"server error"}"#).unwrap_err();
        match err {
            SubmitError::Rejected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "server error");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_rejection_falls_back_without_body_message() {
        for body in ["", "{}", r#"{"message":null}"#, "<html>oops</html>"] {
            let err = interpret_response(502, body).unwrap_err();
            assert_eq!(err.user_message(), GENERIC_REJECTION);
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        // Port 9 (discard) is closed on loopback; the connection is refused
        // before any HTTP exchange happens.
        let client = ContactClient::new("http://127.0.0.1:9/api/contact");
        let message = ContactMessage::from_accepted(&valid_form());

        let err = client.submit(&message).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(err.user_message(), "Failed to send your message");
    }
}
