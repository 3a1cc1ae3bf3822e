//! Weather data models
//!
//! The provider-neutral [`CurrentConditions`] plus the raw response shapes of
//! Open-Meteo and wttr.in.

use chrono::{DateTime, Utc};
use domain::{TemperatureUnit, WeatherCondition};
use serde::{Deserialize, Serialize};

/// Current conditions as reported by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Current temperature in `unit`
    pub temperature: f64,
    /// Apparent ("feels like") temperature
    pub apparent_temperature: Option<f64>,
    /// Today's maximum
    pub high: Option<f64>,
    /// Today's minimum
    pub low: Option<f64>,
    /// Normalized condition
    pub condition: WeatherCondition,
    /// Provider wording (e.g. "Light snow"), or the condition description
    pub description: String,
    /// Unit of all temperatures above
    pub unit: TemperatureUnit,
    /// Observation time, when the provider reports one
    pub observed_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Open-Meteo
// ---------------------------------------------------------------------------

/// Raw Open-Meteo forecast response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenMeteoResponse {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    pub current: Option<OpenMeteoCurrent>,
    pub daily: Option<OpenMeteoDaily>,
}

/// `current` block; values may be `null` for stations without data
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenMeteoCurrent {
    pub time: String,
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<u8>,
}

/// `daily` block, one entry per forecast day
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenMeteoDaily {
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// wttr.in (format=j1); every number arrives as a string
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WttrResponse {
    #[serde(default)]
    pub current_condition: Vec<WttrCurrent>,
    #[serde(default)]
    pub weather: Vec<WttrDay>,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct WttrCurrent {
    pub temp_F: Option<String>,
    pub temp_C: Option<String>,
    pub FeelsLikeF: Option<String>,
    pub FeelsLikeC: Option<String>,
    #[serde(default)]
    pub weatherDesc: Vec<WttrText>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WttrText {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct WttrDay {
    pub maxtempF: Option<String>,
    pub mintempF: Option<String>,
    pub maxtempC: Option<String>,
    pub mintempC: Option<String>,
}
