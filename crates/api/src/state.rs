use std::sync::Arc;

use reelfolio_notify::{EmailChannel, SmsChannel};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Every member is a long-lived, stateless-per-call resource constructed
/// once at process start: the pool, the email transport, and the SMS
/// client are reused across requests with no per-request setup. This is
/// cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelfolio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Email notification channel (always present; failures are logged).
    pub email: Arc<dyn EmailChannel>,
    /// SMS notification channel; `None` when Twilio is not fully
    /// configured, which silently disables the SMS step.
    pub sms: Option<Arc<dyn SmsChannel>>,
}
