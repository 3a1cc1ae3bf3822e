//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Forecast API.

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use domain::WeatherCondition;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::client::{
    WeatherClient, WeatherConfig, WeatherError, WeatherProvider, check_status, finite,
    http_client, map_send_error, validate_coordinates,
};
use crate::models::{CurrentConditions, OpenMeteoResponse};

const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,weather_code";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min";

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = http_client(&config)?;
        Ok(Self { client, config })
    }

    /// Build the API URL for a current-conditions request
    fn build_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={latitude}&longitude={longitude}&current={CURRENT_FIELDS}\
             &daily={DAILY_FIELDS}&temperature_unit={}&timezone=auto&forecast_days=1",
            self.config.base_url(),
            self.config.unit.api_name(),
        )
    }

    /// Convert the raw response into provider-neutral conditions
    fn parse_response(&self, response: OpenMeteoResponse) -> Result<CurrentConditions, WeatherError> {
        let current = response.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        let temperature = current.temperature_2m.ok_or_else(|| {
            WeatherError::ParseError("Missing current temperature_2m".to_string())
        })?;
        let temperature = finite(temperature, "temperature_2m")?;

        let condition = current
            .weather_code
            .map_or(WeatherCondition::Unknown, WeatherCondition::from_wmo_code);

        let (high, low) = response.daily.map_or((None, None), |daily| {
            (
                daily.temperature_2m_max.first().copied().flatten(),
                daily.temperature_2m_min.first().copied().flatten(),
            )
        });

        Ok(CurrentConditions {
            temperature,
            apparent_temperature: current.apparent_temperature.filter(|t| t.is_finite()),
            high: high.filter(|t| t.is_finite()),
            low: low.filter(|t| t.is_finite()),
            condition,
            description: condition.description().to_string(),
            unit: self.config.unit,
            observed_at: Self::parse_local_time(&current.time, response.utc_offset_seconds),
        })
    }

    /// Parse the local observation time (`timezone=auto`) back to UTC
    fn parse_local_time(s: &str, utc_offset_seconds: i32) -> Option<DateTime<Utc>> {
        let local = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .ok()?;
        let utc = local - Duration::seconds(i64::from(utc_offset_seconds));
        Some(utc.and_utc())
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        validate_coordinates(latitude, longitude)?;

        let url = self.build_url(latitude, longitude);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_send_error(&e, self.config.timeout_secs))?;

        check_status(response.status())?;

        let api_response: OpenMeteoResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        self.parse_response(api_response)
    }

    fn provider(&self) -> WeatherProvider {
        WeatherProvider::OpenMeteo
    }
}
