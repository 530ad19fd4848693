//! # Form Session
//!
//! Per-form-instance state the view layer drives.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form Session State Machine                           │
//! │                                                                         │
//! │            set_field                begin_submit (accepted)             │
//! │  Pristine ──────────► Editing ─────────────────────► Submitting        │
//! │      ▲                 │    ▲                            │              │
//! │      │                 │    │ begin_submit (rejected:    │              │
//! │      │                 └────┘ FormErrors populated)      │              │
//! │      │                      ▲                            │              │
//! │      │                      │ finish_submit(Err):        │              │
//! │      │                      │ values PRESERVED           │              │
//! │      │                      └────────────────────────────┤              │
//! │      │ finish_submit(Ok): all values cleared             │              │
//! │      └───────────────────────────────────────────────────┘              │
//! │                                                                         │
//! │  Single-flight guard: begin_submit while Submitting is refused.        │
//! │  Clear-on-edit: set_field removes that field's error WITHOUT           │
//! │  re-running its rules, so a field can transiently look valid while     │
//! │  the user is mid-edit. Intentional; submit re-validates everything.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session knows nothing about HTTP: [`submit_contact`] is the glue that
//! runs the machine against a [`ContactClient`] and a [`Notifier`].

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use bazaar_core::forms::{contact_schema, AcceptedForm, FormErrors, FormSchema, FormValue};

use crate::client::{ContactClient, ContactMessage};
use crate::error::{SubmitError, SubmitResult};
use crate::notify::{Notification, Notifier};

// =============================================================================
// Phase
// =============================================================================

/// Where a form instance currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Untouched since mount or since the last successful submission.
    #[default]
    Pristine,
    /// At least one field edited, or a rejection pushed the form back here.
    Editing,
    /// A submission is in flight; re-submission is refused.
    Submitting,
}

// =============================================================================
// Session
// =============================================================================

/// One form instance: its schema, current values, current verdict, phase.
///
/// ## Ownership
/// Owned exclusively by its view instance; nothing here is shared or locked.
/// All evaluation is synchronous - the only await happens outside, between
/// `begin_submit` and `finish_submit`.
#[derive(Debug, Clone)]
pub struct FormSession {
    schema: FormSchema,
    value: FormValue,
    errors: FormErrors,
    phase: FormPhase,
    opened_at: DateTime<Utc>,
}

impl FormSession {
    /// Creates a pristine session: every schema field present and empty.
    pub fn new(schema: FormSchema) -> Self {
        let value = FormValue::for_schema(&schema);
        FormSession {
            schema,
            value,
            errors: FormErrors::default(),
            phase: FormPhase::Pristine,
            opened_at: Utc::now(),
        }
    }

    /// Convenience constructor for the contact form.
    pub fn contact() -> Self {
        FormSession::new(contact_schema())
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Current field values.
    pub fn value(&self) -> &FormValue {
        &self.value
    }

    /// Current validation verdict.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// A single field's current value.
    pub fn field(&self, name: &str) -> &str {
        self.value.get(name)
    }

    /// When this session was opened.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Replaces one field's value and optimistically clears that field's
    /// error entry without re-running its rules.
    ///
    /// Editing is allowed in every phase; only re-submission is guarded.
    pub fn set_field(&mut self, name: &str, new_value: impl Into<String>) {
        self.value.set(name, new_value);
        if self.errors.clear_field(name) {
            debug!(field = %name, "cleared field error on edit");
        }
        if self.phase == FormPhase::Pristine {
            self.phase = FormPhase::Editing;
        }
    }

    /// Runs full validation and, if accepted, enters Submitting.
    ///
    /// - While Submitting, returns [`SubmitError::InFlight`] (single-flight
    ///   guard) and changes nothing.
    /// - On rejection, stores the fresh [`FormErrors`], stays in Editing and
    ///   returns [`SubmitError::Validation`].
    /// - On acceptance, clears any stale errors and hands back the accepted
    ///   value set for the caller to send.
    pub fn begin_submit(&mut self) -> SubmitResult<AcceptedForm> {
        if self.phase == FormPhase::Submitting {
            warn!("submit refused: one already in flight");
            return Err(SubmitError::InFlight);
        }

        match self.schema.validate(&self.value) {
            Ok(accepted) => {
                self.errors = FormErrors::default();
                self.phase = FormPhase::Submitting;
                debug!("form accepted, entering Submitting");
                Ok(accepted)
            }
            Err(errors) => {
                debug!(fields = errors.len(), "form rejected by schema");
                self.errors = errors;
                self.phase = FormPhase::Editing;
                Err(SubmitError::Validation)
            }
        }
    }

    /// Applies the outcome of the in-flight submission.
    ///
    /// Success resets every value and returns to Pristine; failure preserves
    /// the entered values (so the user can retry without retyping) and
    /// returns to Editing. A late outcome - arriving after further edits,
    /// since there is no cancellation path - is applied all the same.
    pub fn finish_submit(&mut self, outcome: &SubmitResult<()>) {
        match outcome {
            Ok(()) => {
                self.value.clear();
                self.errors = FormErrors::default();
                self.phase = FormPhase::Pristine;
            }
            Err(err) => {
                debug!(error = %err, "submission failed, values preserved");
                self.phase = FormPhase::Editing;
            }
        }
    }
}

// =============================================================================
// Orchestration
// =============================================================================

/// Drives one submit click end to end: validate, POST, notify, settle.
///
/// Mirrors what the storefront's contact view does - every observable
/// outcome maps to one notification:
///
/// | outcome                  | notification                   | form state |
/// |--------------------------|--------------------------------|------------|
/// | schema rejection         | "Form Validation Failed" (err) | values + errors kept |
/// | already in flight        | none (button is disabled)      | unchanged  |
/// | 2xx                      | "Message Sent!" (success)      | reset to Pristine |
/// | non-2xx / transport loss | "Failed to Send" (err)         | values kept |
pub async fn submit_contact(
    session: &mut FormSession,
    client: &ContactClient,
    notifier: &mut impl Notifier,
) -> SubmitResult<()> {
    let accepted = match session.begin_submit() {
        Ok(accepted) => accepted,
        Err(SubmitError::InFlight) => return Err(SubmitError::InFlight),
        Err(err) => {
            notifier.notify(Notification::error(
                "Form Validation Failed",
                err.user_message(),
            ));
            return Err(err);
        }
    };

    let message = ContactMessage::from_accepted(&accepted);
    let outcome = client.submit(&message).await;

    match &outcome {
        Ok(()) => notifier.notify(Notification::success(
            "Message Sent!",
            "We've received your message and will get back to you soon.",
        )),
        Err(err) => notifier.notify(Notification::error("Failed to Send", err.user_message())),
    }

    session.finish_submit(&outcome);
    outcome
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;
    use crate::error::GENERIC_TRANSPORT_FAILURE;
    use crate::notify::{RecordingNotifier, Severity};

    /// Serves exactly one HTTP request on loopback and returns the contact
    /// endpoint URL pointing at it.
    fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request_complete(&request) {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });

        format!("http://{addr}/api/contact")
    }

    /// True once the header block and the declared body length have arrived.
    fn request_complete(bytes: &[u8]) -> bool {
        let Some(split) = bytes.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&bytes[..split]);
        let content_length = headers
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        bytes.len() >= split + 4 + content_length
    }

    fn filled_session() -> FormSession {
        let mut session = FormSession::contact();
        session.set_field("name", "Asha Negi");
        session.set_field("email", "asha@example.com");
        session.set_field("subject", "Wholesale pricing");
        session.set_field("message", "Do you offer wholesale rates on honey?");
        session
    }

    #[test]
    fn test_session_starts_pristine_with_blank_fields() {
        let session = FormSession::contact();
        assert_eq!(session.phase(), FormPhase::Pristine);
        assert!(session.value().is_blank());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_first_edit_enters_editing() {
        let mut session = FormSession::contact();
        session.set_field("name", "A");
        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.field("name"), "A");
    }

    #[test]
    fn test_rejected_submit_populates_errors_and_stays_editing() {
        let mut session = FormSession::contact();
        session.set_field("name", "Al");
        session.set_field("email", "bad-email");
        session.set_field("subject", "Hi");
        session.set_field("message", "short");

        let err = session.begin_submit().unwrap_err();
        assert!(matches!(err, SubmitError::Validation));
        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.errors().len(), 3);
        assert_eq!(
            session.errors().get("email"),
            Some("Please enter a valid email address")
        );
        // Values are untouched by a rejection.
        assert_eq!(session.field("subject"), "Hi");
    }

    #[test]
    fn test_edit_clears_only_that_fields_error() {
        let mut session = FormSession::contact();
        session.set_field("email", "bad-email");
        session.set_field("message", "short");
        let _ = session.begin_submit();
        assert!(session.errors().get("email").is_some());
        assert!(session.errors().get("message").is_some());

        // Still invalid, but the entry goes away until the next submit.
        session.set_field("email", "still-bad");
        assert_eq!(session.errors().get("email"), None);
        assert!(session.errors().get("message").is_some());
    }

    #[test]
    fn test_accepted_submit_enters_submitting_and_guards_reentry() {
        let mut session = filled_session();

        let accepted = session.begin_submit().unwrap();
        assert_eq!(session.phase(), FormPhase::Submitting);
        assert_eq!(accepted.get("name"), "Asha Negi");

        let second = session.begin_submit().unwrap_err();
        assert!(matches!(second, SubmitError::InFlight));
        assert_eq!(session.phase(), FormPhase::Submitting);
    }

    #[test]
    fn test_success_resets_to_pristine() {
        let mut session = filled_session();
        let _ = session.begin_submit().unwrap();

        session.finish_submit(&Ok(()));
        assert_eq!(session.phase(), FormPhase::Pristine);
        assert!(session.value().is_blank());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_failure_preserves_values() {
        let mut session = filled_session();
        let _ = session.begin_submit().unwrap();

        let outcome = Err(SubmitError::Rejected {
            status: 500,
            message: "server error".to_string(),
        });
        session.finish_submit(&outcome);

        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.field("name"), "Asha Negi");
        assert_eq!(session.field("message"), "Do you offer wholesale rates on honey?");
    }

    #[test]
    fn test_late_outcome_applies_over_interim_edits() {
        // No cancellation path: edits made while in flight are discarded by
        // a late success, exactly like the view navigating on.
        let mut session = filled_session();
        let _ = session.begin_submit().unwrap();
        session.set_field("subject", "Changed my mind");

        session.finish_submit(&Ok(()));
        assert_eq!(session.phase(), FormPhase::Pristine);
        assert!(session.value().is_blank());
    }

    #[tokio::test]
    async fn test_submit_contact_invalid_form_notifies_and_skips_network() {
        let mut session = FormSession::contact();
        session.set_field("name", "A");
        // Endpoint is unreachable; an accepted form would surface a transport
        // error instead of the validation notification we expect here.
        let client = ContactClient::new("http://127.0.0.1:9/api/contact");
        let mut notifier = RecordingNotifier::default();

        let err = submit_contact(&mut session, &client, &mut notifier)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Validation));

        assert_eq!(notifier.raised.len(), 1);
        assert_eq!(notifier.raised[0].title, "Form Validation Failed");
        assert_eq!(notifier.raised[0].severity, Severity::Error);
        assert_eq!(session.phase(), FormPhase::Editing);
    }

    #[tokio::test]
    async fn test_submit_contact_success_notifies_and_resets() {
        let endpoint = one_shot_server("HTTP/1.1 200 OK", "{}");
        let mut session = filled_session();
        let client = ContactClient::new(endpoint);
        let mut notifier = RecordingNotifier::default();

        submit_contact(&mut session, &client, &mut notifier)
            .await
            .unwrap();

        assert_eq!(notifier.raised.len(), 1);
        assert_eq!(notifier.raised[0].title, "Message Sent!");
        assert_eq!(notifier.raised[0].severity, Severity::Success);
        assert_eq!(session.phase(), FormPhase::Pristine);
        assert!(session.value().is_blank());
        assert!(session.errors().is_empty());
    }

    #[tokio::test]
    async fn test_submit_contact_server_rejection_shows_body_message() {
        let endpoint = one_shot_server(
            "HTTP/1.1 500 Internal Server Error",
            r#"{"message":"server error"}"#,
        );
        let mut session = filled_session();
        let client = ContactClient::new(endpoint);
        let mut notifier = RecordingNotifier::default();

        let err = submit_contact(&mut session, &client, &mut notifier)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 500, .. }));

        assert_eq!(notifier.raised.len(), 1);
        assert_eq!(notifier.raised[0].title, "Failed to Send");
        assert_eq!(notifier.raised[0].body, "server error");
        assert_eq!(notifier.raised[0].severity, Severity::Error);
        // Entered values survive a rejection so the user can retry.
        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.field("name"), "Asha Negi");
    }

    #[tokio::test]
    async fn test_submit_contact_transport_failure_notifies_and_preserves() {
        let mut session = filled_session();
        let client = ContactClient::new("http://127.0.0.1:9/api/contact");
        let mut notifier = RecordingNotifier::default();

        let err = submit_contact(&mut session, &client, &mut notifier)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));

        assert_eq!(notifier.raised.len(), 1);
        assert_eq!(notifier.raised[0].title, "Failed to Send");
        assert_eq!(notifier.raised[0].body, GENERIC_TRANSPORT_FAILURE);
        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.field("name"), "Asha Negi");
    }
}
