//! wttr.in weather client
//!
//! Uses the `format=j1` JSON output, where every numeric field is a string.

use async_trait::async_trait;
use domain::{TemperatureUnit, WeatherCondition};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::client::{
    WeatherClient, WeatherConfig, WeatherError, WeatherProvider, check_status, finite,
    http_client, map_send_error, validate_coordinates,
};
use crate::models::{CurrentConditions, WttrResponse};

/// wttr.in HTTP client implementation
#[derive(Debug)]
pub struct WttrClient {
    client: Client,
    config: WeatherConfig,
}

impl WttrClient {
    /// Create a new wttr.in client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = http_client(&config)?;
        Ok(Self { client, config })
    }

    fn build_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/{latitude},{longitude}?format=j1",
            self.config.base_url()
        )
    }

    fn parse_response(&self, response: WttrResponse) -> Result<CurrentConditions, WeatherError> {
        let current = response.current_condition.into_iter().next().ok_or_else(|| {
            WeatherError::ParseError("No current_condition in response".to_string())
        })?;
        let today = response.weather.into_iter().next();

        let fahrenheit = self.config.unit == TemperatureUnit::Fahrenheit;
        let pick = |f: Option<String>, c: Option<String>| if fahrenheit { f } else { c };

        let (temp_field, raw_temp) = if fahrenheit {
            ("temp_F", current.temp_F)
        } else {
            ("temp_C", current.temp_C)
        };
        let raw_temp = raw_temp
            .ok_or_else(|| WeatherError::ParseError(format!("Missing {temp_field}")))?;
        let temperature = finite(parse_number(&raw_temp, temp_field)?, temp_field)?;

        let apparent_temperature = pick(current.FeelsLikeF, current.FeelsLikeC)
            .and_then(|v| parse_number(&v, "FeelsLike").ok())
            .filter(|v| v.is_finite());

        let (high, low) = today.map_or((None, None), |day| {
            (
                pick(day.maxtempF, day.maxtempC).and_then(|v| parse_number(&v, "maxtemp").ok()),
                pick(day.mintempF, day.mintempC).and_then(|v| parse_number(&v, "mintemp").ok()),
            )
        });

        let description = current
            .weatherDesc
            .into_iter()
            .next()
            .map(|d| d.value.trim().to_string())
            .filter(|d| !d.is_empty());
        let condition = description
            .as_deref()
            .map_or(WeatherCondition::Unknown, WeatherCondition::from_description);

        Ok(CurrentConditions {
            temperature,
            apparent_temperature,
            high: high.filter(|v| v.is_finite()),
            low: low.filter(|v| v.is_finite()),
            condition,
            description: description.unwrap_or_else(|| condition.description().to_string()),
            unit: self.config.unit,
            observed_at: None,
        })
    }
}

fn parse_number(raw: &str, field: &str) -> Result<f64, WeatherError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| WeatherError::ParseError(format!("{field} is not numeric: {raw:?}")))
}

#[async_trait]
impl WeatherClient for WttrClient {
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

        let body: WttrResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        self.parse_response(body)
    }

    fn provider(&self) -> WeatherProvider {
        WeatherProvider::Wttr
    }
}
