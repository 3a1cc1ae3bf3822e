//! Weather client contract
//!
//! Errors, configuration and the trait shared by every provider client.

use std::time::Duration;

use async_trait::async_trait;
use domain::TemperatureUnit;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CurrentConditions;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Supported weather data sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherProvider {
    /// Open-Meteo Forecast API
    #[default]
    #[serde(alias = "open-meteo")]
    OpenMeteo,
    /// wttr.in JSON format (`format=j1`)
    #[serde(alias = "wttr.in")]
    Wttr,
}

impl WeatherProvider {
    /// Public endpoint used when no base URL is configured
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::OpenMeteo => "https://api.open-meteo.com/v1",
            Self::Wttr => "https://wttr.in",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenMeteo => "open-meteo",
            Self::Wttr => "wttr.in",
        }
    }
}

impl std::fmt::Display for WeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for WeatherProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open_meteo" | "open-meteo" | "openmeteo" => Ok(Self::OpenMeteo),
            "wttr" | "wttr.in" | "wttr_in" => Ok(Self::Wttr),
            other => Err(format!(
                "Unknown weather provider: {other}. Use 'open_meteo' or 'wttr'"
            )),
        }
    }
}

/// Weather client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Which provider to query
    #[serde(default)]
    pub provider: WeatherProvider,

    /// API base URL; the provider's public endpoint when unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit temperatures are requested in
    #[serde(default)]
    pub unit: TemperatureUnit,
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            provider: WeatherProvider::default(),
            base_url: None,
            timeout_secs: default_timeout(),
            unit: TemperatureUnit::default(),
        }
    }
}

impl WeatherConfig {
    /// Default configuration for a provider
    #[must_use]
    pub fn for_provider(provider: WeatherProvider) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }

    /// Effective base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(self.provider.default_base_url())
            .trim_end_matches('/')
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync + std::fmt::Debug {
    /// Get current conditions (plus today's high/low when available)
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError>;

    /// Provider this client talks to
    fn provider(&self) -> WeatherProvider;
}

/// Build the shared reqwest client with the configured timeout
pub(crate) fn http_client(config: &WeatherConfig) -> Result<Client, WeatherError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("weather-texter/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))
}

pub(crate) fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(WeatherError::InvalidCoordinates);
    }
    Ok(())
}

/// Map a transport-level reqwest error
pub(crate) fn map_send_error(error: &reqwest::Error, timeout_secs: u64) -> WeatherError {
    if error.is_timeout() {
        WeatherError::Timeout(timeout_secs)
    } else if error.is_connect() {
        WeatherError::ConnectionFailed(error.to_string())
    } else {
        WeatherError::RequestFailed(error.to_string())
    }
}

/// Map a non-success HTTP status
pub(crate) fn check_status(status: StatusCode) -> Result<(), WeatherError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(WeatherError::RateLimitExceeded);
    }
    if status.is_server_error() {
        return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
    }
    if !status.is_success() {
        return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
    }
    Ok(())
}

/// Reject temperatures the domain cannot represent
pub(crate) fn finite(value: f64, field: &str) -> Result<f64, WeatherError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WeatherError::ParseError(format!("{field} is not a finite number")))
    }
}
