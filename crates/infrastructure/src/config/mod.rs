//! Application configuration
//!
//! Split into focused sub-modules:
//! - `sections`: locations, Twilio, recipient and logging settings
//! - `validation`: start-up checks producing typed run settings
//!
//! Sources are layered, later ones winning:
//! 1. built-in defaults
//! 2. a TOML file (`--config`, else `weather-texter.toml` if present)
//! 3. `WEATHER_TEXTER__<SECTION>__<KEY>` environment variables
//! 4. `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`, `TWILIO_PHONE_NUMBER`
//!    and `FRIEND_PHONE_NUMBER`

mod sections;
mod validation;

use std::path::Path;

use integration_weather::WeatherConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub use sections::{
    LocationConfig, LocationsConfig, LogFormat, LoggingConfig, RecipientConfig, TwilioAppConfig,
};
pub use validation::{DeliverySettings, ProviderCredentials, RunSettings};

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "WEATHER_TEXTER";

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_NAME: &str = "weather-texter";

/// Flat environment variables mapped onto config keys
const LEGACY_ENV_OVERRIDES: [(&str, &str); 4] = [
    ("TWILIO_ACCOUNT_SID", "twilio.account_sid"),
    ("TWILIO_AUTH_TOKEN", "twilio.auth_token"),
    ("TWILIO_PHONE_NUMBER", "twilio.from_number"),
    ("FRIEND_PHONE_NUMBER", "recipient.phone_number"),
];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Sending requires credentials that were not provided
    #[error("Missing required environment variables: {0}")]
    MissingCredentials(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Home and away locations
    #[serde(default)]
    pub locations: LocationsConfig,

    /// Twilio account settings
    #[serde(default)]
    pub twilio: TwilioAppConfig,

    /// Recipient settings
    #[serde(default)]
    pub recipient: RecipientConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a file is unreadable or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, std::env::vars())
    }

    /// Load configuration with an explicit set of environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a file is unreadable or a value has the wrong type.
    pub fn load_with_env<I>(path: Option<&Path>, env: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env: ::config::Map<String, String> = env.into_iter().collect();

        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                ::config::File::from(path).required(true)
            },
            None => ::config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let mut builder = ::config::Config::builder()
            // Start with defaults
            .set_default("weather.provider", "open_meteo")?
            .set_default("logging.format", "text")?
            .add_source(file)
            // Phone numbers must keep their leading '+', so no type guessing
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(false)
                    .source(Some(env.clone())),
            );

        for (var, key) in LEGACY_ENV_OVERRIDES {
            let value = env
                .get(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            if value.is_some() {
                debug!(var, key, "Applying environment override");
            }
            builder = builder.set_override_option(key, value)?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            provider = %config.weather.provider,
            home = %config.locations.home.name,
            away = %config.locations.away.name,
            "Configuration loaded"
        );
        Ok(config)
    }
}
