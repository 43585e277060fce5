//! Contact form field rules.
//!
//! The same rules run twice: in the browser-side form controller before a
//! request is issued, and in the submission handler's input gate. The gate
//! only re-checks presence (`has_required_fields`); the finer length and
//! shape rules exist so the form can annotate every invalid field before
//! the network is touched.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum trimmed length for the name field.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum trimmed length for the message field.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Basic `local@domain.tld` shape. Deliberately loose; the mailbox only
/// has to be plausible enough to be used as a Reply-To address.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// The four contact form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    ProjectType,
    Message,
}

impl FormField {
    /// Wire name of the field (`projectType` is camelCase, matching the
    /// JSON request body).
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::ProjectType => "projectType",
            FormField::Message => "message",
        }
    }
}

/// Per-field validation error messages, keyed by field in display order.
pub type FieldErrors = BTreeMap<FormField, String>;

/// Validate all four fields at once.
///
/// Returns an empty map when every rule passes. All violated rules are
/// reported together so the UI can annotate every invalid field in one
/// pass instead of revealing errors one at a time.
pub fn validate_fields(
    name: &str,
    email: &str,
    project_type: &str,
    message: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = name.trim();
    if name.is_empty() {
        errors.insert(FormField::Name, "Name is required".to_string());
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.insert(
            FormField::Name,
            format!("Name must be at least {MIN_NAME_LEN} characters"),
        );
    }

    let email = email.trim();
    if email.is_empty() {
        errors.insert(FormField::Email, "Email is required".to_string());
    } else if !EMAIL_RE.is_match(email) {
        errors.insert(FormField::Email, "Invalid email address".to_string());
    }

    if project_type.trim().is_empty() {
        errors.insert(
            FormField::ProjectType,
            "Please select a project type".to_string(),
        );
    }

    let message = message.trim();
    if message.is_empty() {
        errors.insert(FormField::Message, "Message is required".to_string());
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(
            FormField::Message,
            format!("Message must be at least {MIN_MESSAGE_LEN} characters"),
        );
    }

    errors
}

/// Server-side input gate: all four fields present and non-blank.
///
/// Whitespace-only counts as empty. This is the only rule the handler
/// enforces before writing to the store; the finer rules above are a
/// client-side courtesy.
pub fn has_required_fields(name: &str, email: &str, project_type: &str, message: &str) -> bool {
    !name.trim().is_empty()
        && !email.trim().is_empty()
        && !project_type.trim().is_empty()
        && !message.trim().is_empty()
}
