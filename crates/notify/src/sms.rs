//! Owner notification SMS via the Twilio REST API.
//!
//! The channel is constructed only when the Twilio account is fully
//! configured: account SID, auth token, and both phone numbers. Any one
//! missing disables SMS for the whole process; the submission flow skips
//! the step silently.

use std::time::Duration;

use async_trait::async_trait;

/// HTTP request timeout for a single send attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for SMS delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Twilio returned a non-2xx status code.
    #[error("Twilio returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// SmsConfig
// ---------------------------------------------------------------------------

/// Configuration for the Twilio SMS channel. All four values are
/// mandatory; a partial configuration is treated as no configuration.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub to_number: String,
}

impl SmsConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless all of `TWILIO_ACCOUNT_SID`,
    /// `TWILIO_AUTH_TOKEN`, `TWILIO_SMS_FROM`, and `TWILIO_SMS_TO` are
    /// set, signalling that SMS notification is disabled.
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            std::env::var("TWILIO_ACCOUNT_SID").ok(),
            std::env::var("TWILIO_AUTH_TOKEN").ok(),
            std::env::var("TWILIO_SMS_FROM").ok(),
            std::env::var("TWILIO_SMS_TO").ok(),
        )
    }

    /// Assemble a config from already-read values; `None` if any is
    /// missing.
    pub fn from_parts(
        account_sid: Option<String>,
        auth_token: Option<String>,
        from_number: Option<String>,
        to_number: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            account_sid: account_sid?,
            auth_token: auth_token?,
            from_number: from_number?,
            to_number: to_number?,
        })
    }
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// Seam between the submission handler and a concrete SMS provider.
#[async_trait]
pub trait SmsChannel: Send + Sync {
    async fn send(&self, body: &str) -> Result<(), SmsError>;
}

/// Production [`SmsChannel`] backed by the Twilio Messages API.
pub struct TwilioChannel {
    client: reqwest::Client,
    config: SmsConfig,
}

impl TwilioChannel {
    /// Create a channel with a pre-configured HTTP client.
    pub fn new(config: SmsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    fn messages_url(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.config.account_sid
        )
    }
}

#[async_trait]
impl SmsChannel for TwilioChannel {
    async fn send(&self, body: &str) -> Result<(), SmsError> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("From", self.config.from_number.as_str()),
                ("To", self.config.to_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SmsError::HttpStatus(status.as_u16()));
        }

        // Twilio echoes the message SID back; log it for correlation.
        let sid = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("sid").and_then(|s| s.as_str()).map(String::from));
        tracing::info!(sid = sid.as_deref(), "SMS notification sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
