//! Weather reading entity
//!
//! A snapshot of current conditions at one location, created fresh on every
//! run and consumed by the message composer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::DomainError;
use crate::value_objects::{Location, TemperatureUnit, WeatherCondition};

/// Largest magnitude accepted for any temperature, in either unit
pub const MAX_ABS_TEMPERATURE: f64 = 150.0;

fn plausible(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_ABS_TEMPERATURE
}

/// Current weather at a single location
///
/// The temperature is always finite and within
/// ±[`MAX_ABS_TEMPERATURE`] of zero; optional extras outside that band are
/// dropped rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    location: Location,
    temperature: f64,
    unit: TemperatureUnit,
    condition: WeatherCondition,
    description: String,
    high: Option<f64>,
    low: Option<f64>,
    feels_like: Option<f64>,
    observed_at: DateTime<Utc>,
}

impl WeatherReading {
    /// Create a reading from a current temperature and condition
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTemperature` if the temperature is NaN,
    /// infinite or beyond ±[`MAX_ABS_TEMPERATURE`].
    pub fn new(
        location: Location,
        temperature: f64,
        unit: TemperatureUnit,
        condition: WeatherCondition,
    ) -> Result<Self, DomainError> {
        if !plausible(temperature) {
            let shown = if temperature.abs() < 1e6 {
                format!("{temperature}")
            } else {
                format!("{temperature:e}")
            };
            return Err(DomainError::InvalidTemperature(format!(
                "{shown}{} reported for {}",
                unit.symbol(),
                location.name()
            )));
        }

        Ok(Self {
            location,
            temperature,
            unit,
            condition,
            description: condition.description().to_string(),
            high: None,
            low: None,
            feels_like: None,
            observed_at: Utc::now(),
        })
    }

    /// Attach today's high and low
    #[must_use]
    pub fn with_high_low(mut self, high: Option<f64>, low: Option<f64>) -> Self {
        self.high = high.filter(|v| plausible(*v));
        self.low = low.filter(|v| plausible(*v));
        self
    }

    /// Attach the apparent ("feels like") temperature
    #[must_use]
    pub fn with_feels_like(mut self, feels_like: Option<f64>) -> Self {
        self.feels_like = feels_like.filter(|v| plausible(*v));
        self
    }

    /// Replace the condition text with the provider's own wording
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.trim().is_empty() {
            self.description = description.trim().to_string();
        }
        self
    }

    /// Set the observation time reported by the provider
    #[must_use]
    pub const fn with_observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = observed_at;
        self
    }

    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Current temperature in `unit()`
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub const fn condition(&self) -> WeatherCondition {
        self.condition
    }

    /// Provider wording for the condition (e.g. "Light snow")
    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn high(&self) -> Option<f64> {
        self.high
    }

    pub const fn low(&self) -> Option<f64> {
        self.low
    }

    pub const fn feels_like(&self) -> Option<f64> {
        self.feels_like
    }

    pub const fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    /// Temperature rounded to whole degrees
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // finite and far inside i64 range
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature.round() as i64
    }

    /// Feels-like temperature rounded to whole degrees
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_feels_like(&self) -> Option<i64> {
        self.feels_like.map(|v| v.round() as i64)
    }

    /// Rounded temperature with unit, e.g. "68°F"
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}{}", self.rounded_temperature(), self.unit.symbol())
    }
}
