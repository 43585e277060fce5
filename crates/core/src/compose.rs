//! Notification text composition.
//!
//! Pure string builders for the owner-facing notifications. The email is
//! addressed to the site owner with the submitter as the reply target;
//! the SMS is a one-line summary that fits a single segment for typical
//! inputs.

/// Subject line for the owner notification email.
pub fn email_subject(name: &str, project_type: &str) -> String {
    format!("New contact from {name} – {project_type}")
}

/// Plain-text body for the owner notification email.
pub fn email_body(name: &str, email: &str, project_type: &str, message: &str) -> String {
    format!(
        "New contact message:\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Project Type: {project_type}\n\
         \n\
         Message:\n\
         {message}\n"
    )
}

/// One-line SMS summary of a new submission.
pub fn sms_summary(name: &str, email: &str, project_type: &str) -> String {
    format!("New portfolio inquiry from {name} ({email}) – {project_type}.")
}
