//! Handler for contact form submissions.
//!
//! Three sequential steps per request: input gate, store write, then two
//! best-effort notifications. Persistence is the only all-or-nothing
//! step -- losing a contact message is unacceptable, but a missed email
//! or SMS alert is recoverable because the message itself is durably
//! stored and can be reviewed later.

use std::time::Duration;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use reelfolio_core::compose;
use reelfolio_core::validation::has_required_fields;
use reelfolio_db::models::contact_message::CreateContactMessage;
use reelfolio_db::repositories::ContactMessageRepo;
use reelfolio_notify::ContactEmail;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Accept a contact form submission: persist it, then alert the owner.
///
/// - Any missing or blank field rejects with 400 before any side effect.
/// - A failed store write rejects with 500; no notification is attempted
///   for a message that was never saved.
/// - Once the row exists the request reports success regardless of how
///   the notification attempts fare.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<Json<SubmitResponse>> {
    tracing::debug!(
        name = %input.name,
        project_type = %input.project_type,
        "Received contact submission"
    );

    if !has_required_fields(&input.name, &input.email, &input.project_type, &input.message) {
        tracing::warn!("Contact submission rejected: missing required fields");
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let record = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = record.id, "Contact message stored");

    let notify_timeout = Duration::from_secs(state.config.notify_timeout_secs);

    // Best-effort from here on.
    let email = ContactEmail {
        reply_to: record.email.clone(),
        subject: compose::email_subject(&record.name, &record.project_type),
        body: compose::email_body(
            &record.name,
            &record.email,
            &record.project_type,
            &record.message,
        ),
    };
    match tokio::time::timeout(notify_timeout, state.email.send(&email)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "Email notification failed"),
        Err(_) => tracing::warn!("Email notification timed out"),
    }

    if let Some(sms) = &state.sms {
        let summary = compose::sms_summary(&record.name, &record.email, &record.project_type);
        match tokio::time::timeout(notify_timeout, sms.send(&summary)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "SMS notification failed"),
            Err(_) => tracing::warn!("SMS notification timed out"),
        }
    } else {
        tracing::debug!("SMS channel not configured, skipping SMS notify");
    }

    Ok(Json(SubmitResponse { success: true }))
}
