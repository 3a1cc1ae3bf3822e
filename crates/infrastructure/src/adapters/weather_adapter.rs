//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{Location, WeatherReading};
use integration_weather::{
    CurrentConditions, WeatherClient, WeatherConfig, WeatherError, build_client,
};
use tracing::{debug, instrument};

/// Adapter for the configured weather provider
pub struct WeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("provider", &self.client.provider())
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter for the provider named in `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = build_client(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn from_client(client: Box<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(location: &Location, err: &WeatherError) -> ApplicationError {
        let reason = match err {
            WeatherError::RateLimitExceeded => "provider rate limit exceeded".to_string(),
            other => other.to_string(),
        };
        ApplicationError::weather_fetch(location.name(), reason)
    }

    /// Convert provider conditions into a domain reading
    fn to_reading(
        location: &Location,
        conditions: CurrentConditions,
    ) -> Result<WeatherReading, ApplicationError> {
        let reading = WeatherReading::new(
            location.clone(),
            conditions.temperature,
            conditions.unit,
            conditions.condition,
        )
        .map_err(|e| ApplicationError::weather_fetch(location.name(), e.to_string()))?
        .with_high_low(conditions.high, conditions.low)
        .with_feels_like(conditions.apparent_temperature)
        .with_description(conditions.description);

        Ok(match conditions.observed_at {
            Some(observed_at) => reading.with_observed_at(observed_at),
            None => reading,
        })
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(location = %location.name(), provider = %self.client.provider()))]
    async fn current_weather(
        &self,
        location: &Location,
    ) -> Result<WeatherReading, ApplicationError> {
        let result = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await;

        match result {
            Ok(conditions) => {
                debug!(
                    temperature = conditions.temperature,
                    condition = %conditions.condition,
                    "Retrieved current weather"
                );
                Self::to_reading(location, conditions)
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
                Err(Self::map_error(location, &e))
            },
        }
    }

    fn provider_name(&self) -> &'static str {
        self.client.provider().name()
    }
}
