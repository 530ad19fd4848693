//! # bazaar-contact: Contact Submission Boundary
//!
//! Everything in `bazaar-core` is pure; this crate owns the one operation
//! that leaves the local process - POSTing a validated contact message to the
//! backend - plus the per-form session state the view layer drives.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Contact Submission Flow                             │
//! │                                                                         │
//! │  User clicks "Send Message"                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FormSession::begin_submit                                              │
//! │       │                                                                 │
//! │       ├── already Submitting? ──► refused (single-flight guard)        │
//! │       │                                                                 │
//! │       ├── schema rejects? ──────► FormErrors stored, stays Editing,    │
//! │       │                           "Form Validation Failed" toast       │
//! │       │                                                                 │
//! │       └── accepted ──► Submitting                                      │
//! │                │                                                        │
//! │                ▼                                                        │
//! │       ContactClient::submit (HTTP POST, awaited by the view)           │
//! │                │                                                        │
//! │     ┌──────────┼──────────────┐                                        │
//! │     ▼          ▼              ▼                                        │
//! │   2xx      non-2xx        transport error                              │
//! │     │          │              │                                        │
//! │     ▼          └──────┬───────┘                                        │
//! │  FormSession::        ▼                                                │
//! │  finish_submit   finish_submit(Err)                                    │
//! │  (Ok): values    values PRESERVED so the user can retry,              │
//! │  reset, back     back to Editing, "Failed to Send" toast              │
//! │  to Pristine,                                                          │
//! │  success toast                                                         │
//! │                                                                         │
//! │  No cancellation path: an in-flight submission runs to completion      │
//! │  and its outcome is applied whenever it arrives.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - The HTTP POST and its response interpretation
//! - [`session`] - Per-form state machine and submission orchestration
//! - [`notify`] - Notification values and the [`Notifier`](notify::Notifier) seam
//! - [`error`] - [`SubmitError`](error::SubmitError) taxonomy

pub mod client;
pub mod error;
pub mod notify;
pub mod session;

pub use client::{ContactClient, ContactMessage};
pub use error::{SubmitError, SubmitResult};
pub use notify::{Notification, Notifier, Severity};
pub use session::{submit_contact, FormPhase, FormSession};
