//! Temperature unit value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit in which temperatures are requested and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit
    #[default]
    Fahrenheit,
    /// Degrees Celsius
    Celsius,
}

impl TemperatureUnit {
    /// Display suffix, e.g. "°F"
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }

    /// Lowercase unit name as used by weather APIs
    #[must_use]
    pub const fn api_name(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "fahrenheit",
            Self::Celsius => "celsius",
        }
    }

    /// Express a temperature difference in Fahrenheit degrees
    #[must_use]
    pub fn delta_in_fahrenheit(&self, delta: f64) -> f64 {
        match self {
            Self::Fahrenheit => delta,
            Self::Celsius => delta * 9.0 / 5.0,
        }
    }

    /// Convert a temperature expressed in this unit into `target`
    #[must_use]
    pub fn convert(&self, value: f64, target: Self) -> f64 {
        match (self, target) {
            (Self::Fahrenheit, Self::Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Self::Celsius, Self::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            _ => value,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fahrenheit" | "f" => Ok(Self::Fahrenheit),
            "celsius" | "c" => Ok(Self::Celsius),
            _ => Err(format!(
                "Invalid temperature unit: {s}. Use 'fahrenheit' or 'celsius'"
            )),
        }
    }
}
