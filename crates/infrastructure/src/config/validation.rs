//! Start-up validation
//!
//! Turns the loose, string-typed [`AppConfig`] into the typed values a run
//! needs. Missing credentials only matter when a text is actually sent, but
//! any phone number that is present must be valid in every mode.

use domain::{Location, PhoneNumber};
use integration_twilio::TwilioConfig;
use secrecy::{ExposeSecret, SecretString};

use super::{AppConfig, ConfigError, LocationConfig};

/// Environment variables that supply delivery settings
const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
const FROM_NUMBER_VAR: &str = "TWILIO_PHONE_NUMBER";
const RECIPIENT_VAR: &str = "FRIEND_PHONE_NUMBER";

/// Validated SMS provider credentials
pub struct ProviderCredentials {
    pub account_sid: String,
    pub auth_token: SecretString,
    pub from_number: PhoneNumber,
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[REDACTED]")
            .field("from_number", &self.from_number.masked())
            .finish()
    }
}

/// Everything needed to send a text
#[derive(Debug)]
pub struct DeliverySettings {
    pub credentials: ProviderCredentials,
    pub recipient: PhoneNumber,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl DeliverySettings {
    /// Client configuration for the Twilio integration
    pub fn twilio_config(&self) -> TwilioConfig {
        TwilioConfig::new(
            self.credentials.account_sid.clone(),
            self.credentials.auth_token.clone(),
            self.credentials.from_number.as_str(),
        )
        .with_base_url(self.base_url.clone())
        .with_timeout_secs(self.timeout_secs)
    }
}

/// Typed settings for one run
#[derive(Debug)]
pub struct RunSettings {
    pub home: Location,
    pub away: Location,
    /// `None` for dry runs
    pub delivery: Option<DeliverySettings>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn location(section: &str, config: &LocationConfig) -> Result<Location, ConfigError> {
    Location::new(config.name.trim(), config.latitude, config.longitude)
        .map_err(|e| ConfigError::Invalid(format!("locations.{section}: {e}")))
}

fn phone(field: &str, value: &str) -> Result<PhoneNumber, ConfigError> {
    PhoneNumber::new(value).map_err(|e| ConfigError::Invalid(format!("{field}: {e}")))
}

impl AppConfig {
    /// Validate the configuration for a run
    ///
    /// `sending` is false for dry runs, which need no credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for bad locations, phone numbers or
    /// timeouts, and `ConfigError::MissingCredentials` naming every absent
    /// variable when sending.
    pub fn validate(&self, sending: bool) -> Result<RunSettings, ConfigError> {
        let home = location("home", &self.locations.home)?;
        let away = location("away", &self.locations.away)?;

        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "weather.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.twilio.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "twilio.timeout_secs must be greater than zero".to_string(),
            ));
        }

        let account_sid = non_empty(self.twilio.account_sid.as_deref());
        let auth_token = self
            .twilio
            .auth_token
            .as_ref()
            .filter(|token| !token.expose_secret().trim().is_empty());
        let from_number = non_empty(self.twilio.from_number.as_deref())
            .map(|n| phone("twilio.from_number", n))
            .transpose()?;
        let recipient = non_empty(self.recipient.phone_number.as_deref())
            .map(|n| phone("recipient.phone_number", n))
            .transpose()?;

        if !sending {
            return Ok(RunSettings {
                home,
                away,
                delivery: None,
            });
        }

        let mut missing = Vec::new();
        if account_sid.is_none() {
            missing.push(ACCOUNT_SID_VAR);
        }
        if auth_token.is_none() {
            missing.push(AUTH_TOKEN_VAR);
        }
        if from_number.is_none() {
            missing.push(FROM_NUMBER_VAR);
        }
        if recipient.is_none() {
            missing.push(RECIPIENT_VAR);
        }

        match (account_sid, auth_token, from_number, recipient) {
            (Some(account_sid), Some(auth_token), Some(from_number), Some(recipient)) => {
                Ok(RunSettings {
                    home,
                    away,
                    delivery: Some(DeliverySettings {
                        credentials: ProviderCredentials {
                            account_sid: account_sid.to_string(),
                            auth_token: auth_token.clone(),
                            from_number,
                        },
                        recipient,
                        base_url: self.twilio.base_url.clone(),
                        timeout_secs: self.twilio.timeout_secs,
                    }),
                })
            },
            _ => Err(ConfigError::MissingCredentials(missing.join(", "))),
        }
    }
}
