//! Twilio client for sending SMS
//!
//! `POST /2010-04-01/Accounts/{AccountSid}/Messages.json` with a form body
//! and HTTP basic auth (account SID / auth token).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Twilio rejects bodies longer than this many characters
pub const MAX_BODY_CHARS: usize = 1600;

/// Twilio API errors
#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Error document returned by Twilio
    #[error("API error {status}: {message}{}", .code.map(|c| format!(" (code {c})")).unwrap_or_default())]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Message body too long: {0} characters (max 1600)")]
    BodyTooLong(usize),

    #[error("Unexpected response: {0}")]
    Parse(String),
}

impl TwilioError {
    /// Whether Twilio refused the account credentials
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }
}

/// Twilio client configuration
#[derive(Clone)]
pub struct TwilioConfig {
    /// Account SID (`AC...`), also the basic-auth user
    pub account_sid: String,
    /// Auth token, the basic-auth password
    pub auth_token: SecretString,
    /// Sender number in E.164 format
    pub from_number: String,
    /// API base URL (default: <https://api.twilio.com>)
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[REDACTED]")
            .field("from_number", &self.from_number)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TwilioConfig {
    /// Default public endpoint
    pub const DEFAULT_BASE_URL: &'static str = "https://api.twilio.com";

    pub fn new(
        account_sid: impl Into<String>,
        auth_token: SecretString,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token,
            from_number: from_number.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Message resource returned after a successful create
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResource {
    /// Message SID (`SM...`)
    pub sid: String,
    /// Initial status, usually "queued" or "accepted"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub num_segments: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// API error document
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

/// Twilio Messages API client
#[derive(Debug, Clone)]
pub struct TwilioClient {
    client: Client,
    config: TwilioConfig,
}

impl TwilioClient {
    /// Create a new Twilio client
    ///
    /// # Errors
    ///
    /// Returns `TwilioError::Configuration` when a credential is empty, or
    /// `TwilioError::Request` if the HTTP client cannot be built.
    pub fn new(config: TwilioConfig) -> Result<Self, TwilioError> {
        if config.account_sid.trim().is_empty() {
            return Err(TwilioError::Configuration(
                "account_sid is required".to_string(),
            ));
        }
        if config.auth_token.expose_secret().trim().is_empty() {
            return Err(TwilioError::Configuration(
                "auth_token is required".to_string(),
            ));
        }
        if config.from_number.trim().is_empty() {
            return Err(TwilioError::Configuration(
                "from_number is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }

    /// Sender number this client sends from
    pub fn from_number(&self) -> &str {
        &self.config.from_number
    }

    /// Send one SMS
    ///
    /// A single attempt; the caller decides what a failure means.
    #[instrument(skip(self, body), fields(chars = body.chars().count()))]
    pub async fn send_message(&self, to: &str, body: &str) -> Result<MessageResource, TwilioError> {
        let chars = body.chars().count();
        if chars > MAX_BODY_CHARS {
            return Err(TwilioError::BodyTooLong(chars));
        }

        let url = self.messages_url();
        debug!(url = %url, "Creating Twilio message");

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.config.account_sid,
                Some(self.config.auth_token.expose_secret()),
            )
            .form(&[
                ("To", to),
                ("From", self.config.from_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TwilioError::Timeout(self.config.timeout_secs)
                } else {
                    TwilioError::Request(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<MessageResource>()
                .await
                .map_err(|e| TwilioError::Parse(e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        let error = Self::api_error(status, &text);
        warn!(status = status.as_u16(), error = %error, "Twilio rejected message");
        Err(error)
    }

    /// Build an API error from a non-success response body
    fn api_error(status: StatusCode, body: &str) -> TwilioError {
        match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(parsed) => TwilioError::Api {
                status: status.as_u16(),
                code: parsed.code,
                message: parsed.message,
            },
            Err(_) => TwilioError::Api {
                status: status.as_u16(),
                code: None,
                message: if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("no response body")
                        .to_string()
                } else {
                    body.trim().chars().take(200).collect()
                },
            },
        }
    }
}
