//! Contact form state machine.
//!
//! [`ContactForm`] is a plain state struct updated through pure transition
//! functions; the only suspension point is the outbound send call passed
//! into [`ContactForm::submit`]. [`ContactFormController`] wraps the form
//! for async UI hosts: it serializes access behind a mutex, fires the
//! optional success callback, and schedules the submitted-banner reset.
//!
//! State machine:
//!
//! ```text
//! Idle -> Validating -> ValidationFailed -> Idle
//!                    -> Submitting -> Submitted -> (timer) -> Idle
//!                                  -> Failed -> Idle
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::validation::{validate_fields, FieldErrors, FormField};

/// How long the success confirmation stays visible before the form
/// returns to its idle state.
pub const SUBMITTED_DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// Current values of the four input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

/// Result of a [`ContactForm::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed (or a submission was already in flight); the
    /// send function was never called.
    Rejected,
    /// The send function succeeded; fields were cleared.
    Accepted,
    /// The send function failed; fields were kept so the visitor can
    /// retry without retyping.
    Failed,
}

/// Ephemeral client-side form state. Never persisted.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub values: FormValues,
    /// Per-field validation errors, populated by [`ContactForm::validate`].
    pub errors: FieldErrors,
    /// Form-level error from a failed send, shown above the submit button.
    pub form_error: Option<String>,
    pub submitting: bool,
    pub submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value and clear any existing error for that field,
    /// so the visitor sees the correction as soon as they start retyping.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.values.name = value,
            FormField::Email => self.values.email = value,
            FormField::ProjectType => self.values.project_type = value,
            FormField::Message => self.values.message = value,
        }
        self.errors.remove(&field);
    }

    /// Run all field rules, store the resulting error map, and report
    /// whether the form is submittable.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_fields(
            &self.values.name,
            &self.values.email,
            &self.values.project_type,
            &self.values.message,
        );
        self.errors.is_empty()
    }

    /// Validate and, if clean, drive one submission through `send`.
    ///
    /// `send` receives a snapshot of the current values and performs the
    /// actual network call. On success the fields are cleared and
    /// `submitted` is raised; on failure the values are kept and the error
    /// is surfaced as [`ContactForm::form_error`]. `submitting` is cleared
    /// on every path. A second submit while one is in flight is rejected
    /// without calling `send`.
    pub async fn submit<F, Fut, E>(&mut self, send: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: fmt::Display,
    {
        if self.submitting {
            return SubmitOutcome::Rejected;
        }
        if !self.validate() {
            return SubmitOutcome::Rejected;
        }

        self.submitting = true;
        self.form_error = None;

        let result = send(self.values.clone()).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.values = FormValues::default();
                self.errors.clear();
                self.submitted = true;
                SubmitOutcome::Accepted
            }
            Err(e) => {
                self.form_error = Some(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// End the success-confirmation display window.
    pub fn clear_submitted(&mut self) {
        self.submitted = false;
    }

    /// Reset the form to its initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Async driver for a [`ContactForm`].
///
/// One controller exists per rendered form. The form lives behind an
/// `Arc<Mutex<_>>` so the submitted-banner timer can flip the flag back
/// after the submission that raised it has completed.
pub struct ContactFormController {
    form: Arc<Mutex<ContactForm>>,
    on_success: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self {
            form: Arc::new(Mutex::new(ContactForm::new())),
            on_success: None,
        }
    }

    /// Register a callback invoked once per accepted submission.
    pub fn on_success(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    /// Handle to the underlying form state (for rendering).
    pub fn form(&self) -> Arc<Mutex<ContactForm>> {
        Arc::clone(&self.form)
    }

    pub async fn update_field(&self, field: FormField, value: impl Into<String>) {
        self.form.lock().await.update_field(field, value);
    }

    /// Submit the form. On acceptance, fires the success callback and
    /// schedules `submitted` to clear after [`SUBMITTED_DISPLAY_WINDOW`].
    ///
    /// An in-flight submission holds the lock for the whole send call, so
    /// a second submit issued meanwhile is rejected without sending
    /// rather than queued behind the first.
    pub async fn submit<F, Fut, E>(&self, send: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: fmt::Display,
    {
        let Ok(mut form) = self.form.try_lock() else {
            return SubmitOutcome::Rejected;
        };
        let outcome = form.submit(send).await;
        drop(form);

        if outcome == SubmitOutcome::Accepted {
            if let Some(callback) = &self.on_success {
                callback();
            }
            let form = Arc::clone(&self.form);
            tokio::spawn(async move {
                tokio::time::sleep(SUBMITTED_DISPLAY_WINDOW).await;
                form.lock().await.clear_submitted();
            });
        }

        outcome
    }
}

impl Default for ContactFormController {
    fn default() -> Self {
        Self::new()
    }
}
