//! Configuration sections: locations, Twilio, recipient, logging.

use secrecy::SecretString;
use serde::Deserialize;

// ==============================
// Locations
// ==============================

/// A named coordinate pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationConfig {
    /// Display name, e.g. "Del Mar, CA"
    pub name: String,
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl LocationConfig {
    fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }
}

/// The two places being compared
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationsConfig {
    /// The sender's location, used as the reference in the message
    #[serde(default = "default_home")]
    pub home: LocationConfig,
    /// The recipient's location
    #[serde(default = "default_away")]
    pub away: LocationConfig,
}

fn default_home() -> LocationConfig {
    LocationConfig::new("Del Mar, CA", 32.9595, -117.2653)
}

fn default_away() -> LocationConfig {
    LocationConfig::new("Boston, MA", 42.3601, -71.0589)
}

impl Default for LocationsConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            away: default_away(),
        }
    }
}

// ==============================
// Twilio
// ==============================

/// Twilio account settings
///
/// Credentials usually arrive through `TWILIO_ACCOUNT_SID`,
/// `TWILIO_AUTH_TOKEN` and `TWILIO_PHONE_NUMBER`.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioAppConfig {
    /// Account SID (`AC...`)
    #[serde(default)]
    pub account_sid: Option<String>,

    /// Auth token
    #[serde(default)]
    pub auth_token: Option<SecretString>,

    /// Sender number in E.164 format
    #[serde(default)]
    pub from_number: Option<String>,

    /// API base URL
    #[serde(default = "default_twilio_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_twilio_timeout")]
    pub timeout_secs: u64,
}

fn default_twilio_base_url() -> String {
    integration_twilio::TwilioConfig::DEFAULT_BASE_URL.to_string()
}

const fn default_twilio_timeout() -> u64 {
    10
}

impl Default for TwilioAppConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from_number: None,
            base_url: default_twilio_base_url(),
            timeout_secs: default_twilio_timeout(),
        }
    }
}

// ==============================
// Recipient
// ==============================

/// Who receives the text
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipientConfig {
    /// Recipient number in E.164 format (`FRIEND_PHONE_NUMBER`)
    #[serde(default)]
    pub phone_number: Option<String>,
}

// ==============================
// Logging
// ==============================

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}
