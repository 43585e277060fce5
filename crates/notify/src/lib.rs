//! Outbound notification channels for the contact service.
//!
//! Two best-effort delivery channels alert the site owner about a new
//! submission after it has been durably stored:
//!
//! - [`email`] — SMTP via `lettre`, always constructed, with the
//!   submitter's address as the reply target.
//! - [`sms`] — the Twilio REST API via `reqwest`, constructed only when
//!   the account is fully configured.
//!
//! Both channels sit behind traits ([`EmailChannel`], [`SmsChannel`]) so
//! the submission handler can be exercised with counting test doubles.
//! Channel clients are built once at process start and reused; a call
//! failure never propagates past the handler's logging.

pub mod email;
pub mod sms;

pub use email::{ContactEmail, EmailChannel, EmailConfig, EmailError, SmtpChannel};
pub use sms::{SmsChannel, SmsConfig, SmsError, TwilioChannel};
