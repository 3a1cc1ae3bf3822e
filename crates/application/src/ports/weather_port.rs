//! Weather service port
//!
//! Defines the interface for current-conditions retrieval.

use async_trait::async_trait;
use domain::{Location, WeatherReading};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a location
    ///
    /// Implementations return a reading with a finite temperature or an
    /// `ApplicationError::WeatherFetch` naming the location.
    async fn current_weather(&self, location: &Location)
    -> Result<WeatherReading, ApplicationError>;

    /// Short provider label for logs and summaries
    fn provider_name(&self) -> &'static str {
        "weather"
    }
}
