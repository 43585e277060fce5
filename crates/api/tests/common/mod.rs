//! Shared test harness for the API integration tests.
//!
//! Rebuilds the production router (same middleware stack as `main.rs`)
//! around a `#[sqlx::test]` pool and counting mock notification channels,
//! so every test exercises exactly what production runs minus the real
//! SMTP/Twilio round trips.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use reelfolio_api::config::ServerConfig;
use reelfolio_api::router::build_app_router;
use reelfolio_api::state::AppState;
use reelfolio_notify::{ContactEmail, EmailChannel, EmailError, SmsChannel, SmsError};

/// Build a test `ServerConfig` with safe defaults.
///
/// The notification timeout is 1 second so tests with hanging mock
/// channels finish quickly; channels that return promptly never notice.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        notify_timeout_secs: 1,
    }
}

// ---------------------------------------------------------------------------
// Mock channels
// ---------------------------------------------------------------------------

/// Counting [`EmailChannel`] double. Records every composed email.
pub struct MockEmail {
    calls: AtomicUsize,
    sent: Mutex<Vec<ContactEmail>>,
    fail: bool,
    hang: bool,
}

impl MockEmail {
    pub fn new(fail: bool, hang: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            fail,
            hang,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<ContactEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailChannel for MockEmail {
    async fn send(&self, email: &ContactEmail) -> Result<(), EmailError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(email.clone());
        if self.hang {
            std::future::pending::<()>().await;
        }
        if self.fail {
            Err(EmailError::Build("mock email failure".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Counting [`SmsChannel`] double. Records every summary text.
pub struct MockSms {
    calls: AtomicUsize,
    sent: Mutex<Vec<String>>,
    fail: bool,
    hang: bool,
}

impl MockSms {
    pub fn new(fail: bool, hang: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            fail,
            hang,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsChannel for MockSms {
    async fn send(&self, body: &str) -> Result<(), SmsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(body.to_string());
        if self.hang {
            std::future::pending::<()>().await;
        }
        if self.fail {
            Err(SmsError::HttpStatus(500))
        } else {
            Ok(())
        }
    }
}

/// Handles to the mock channels wired into a test app.
pub struct TestChannels {
    pub email: Arc<MockEmail>,
    pub sms: Arc<MockSms>,
}

/// Knobs for [`build_test_app_with`].
pub struct TestAppOptions {
    pub email_fails: bool,
    /// Email `send` never resolves; the handler's per-channel timeout
    /// must reclaim the request.
    pub email_hangs: bool,
    pub sms_configured: bool,
    pub sms_fails: bool,
    /// SMS `send` never resolves.
    pub sms_hangs: bool,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            email_fails: false,
            email_hangs: false,
            sms_configured: true,
            sms_fails: false,
            sms_hangs: false,
        }
    }
}

/// Build the application router with healthy mock channels and SMS
/// configured.
pub fn build_test_app(pool: PgPool) -> (Router, TestChannels) {
    build_test_app_with(pool, TestAppOptions::default())
}

/// Build the application router with the given channel behaviour.
///
/// The returned [`TestChannels`] always contains the SMS mock even when
/// `sms_configured` is false; in that case it is simply not wired into
/// the app state, which is exactly the "partially configured Twilio"
/// production shape.
pub fn build_test_app_with(pool: PgPool, options: TestAppOptions) -> (Router, TestChannels) {
    let config = test_config();

    let email = Arc::new(MockEmail::new(options.email_fails, options.email_hangs));
    let sms = Arc::new(MockSms::new(options.sms_fails, options.sms_hangs));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        email: Arc::clone(&email) as Arc<dyn EmailChannel>,
        sms: options
            .sms_configured
            .then(|| Arc::clone(&sms) as Arc<dyn SmsChannel>),
    };

    let app = build_app_router(state, &config);
    (app, TestChannels { email, sms })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response is the literal 400 rejection for missing fields.
pub async fn assert_rejected_all_fields(response: Response<Body>) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "All fields are required" }));
}
