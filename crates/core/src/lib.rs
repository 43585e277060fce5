//! Reelfolio domain logic.
//!
//! This crate holds everything about a contact submission that is
//! independent of HTTP, SQL, and SMTP:
//!
//! - [`validation`] — the field rules shared by the browser-side form
//!   controller and the server-side input gate.
//! - [`form`] — the contact form state machine ([`form::ContactForm`])
//!   and its async driver ([`form::ContactFormController`]).
//! - [`compose`] — pure composition of the notification texts (email
//!   subject/body, SMS summary) sent to the site owner.

pub mod compose;
pub mod form;
pub mod types;
pub mod validation;

pub use form::{ContactForm, ContactFormController, SubmitOutcome, SUBMITTED_DISPLAY_WINDOW};
pub use validation::{FieldErrors, FormField};
