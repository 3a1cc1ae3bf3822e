//! Weather condition value object
//!
//! Conditions are derived either from WMO weather codes (Open-Meteo) or from
//! free-text descriptions (wttr.in).

use serde::{Deserialize, Serialize};

/// Weather condition derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Fog (WMO 45, 48)
    Fog,
    /// Drizzle (WMO 51, 53, 55)
    Drizzle,
    /// Freezing drizzle (WMO 56, 57)
    FreezingDrizzle,
    /// Rain (WMO 61, 63, 65)
    Rain,
    /// Freezing rain (WMO 66, 67)
    FreezingRain,
    /// Snow (WMO 71, 73, 75)
    Snow,
    /// Snow grains (WMO 77)
    SnowGrains,
    /// Rain showers (WMO 80, 81, 82)
    RainShowers,
    /// Snow showers (WMO 85, 86)
    SnowShowers,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Thunderstorm with hail (WMO 96, 99)
    ThunderstormWithHail,
    /// Unknown condition
    Unknown,
}

impl WeatherCondition {
    /// Convert WMO weather code to `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for WMO code reference
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Classify a free-text description such as "Light snow" or "Partly cloudy"
    ///
    /// Thunder is checked first so "Light rain with thunder" is a storm.
    #[must_use]
    pub fn from_description(description: &str) -> Self {
        let text = description.to_lowercase();
        let has = |needle: &str| text.contains(needle);

        if has("thunder") {
            if has("hail") {
                Self::ThunderstormWithHail
            } else {
                Self::Thunderstorm
            }
        } else if has("freezing drizzle") {
            Self::FreezingDrizzle
        } else if has("freezing rain") {
            Self::FreezingRain
        } else if has("snow grains") {
            Self::SnowGrains
        } else if has("snow") && has("shower") {
            Self::SnowShowers
        } else if has("snow") || has("sleet") || has("blizzard") {
            Self::Snow
        } else if has("rain") && has("shower") {
            Self::RainShowers
        } else if has("drizzle") {
            Self::Drizzle
        } else if has("rain") {
            Self::Rain
        } else if has("fog") || has("mist") {
            Self::Fog
        } else if has("partly") {
            Self::PartlyCloudy
        } else if has("overcast") || has("cloudy") {
            Self::Overcast
        } else if has("sunny") || has("clear") {
            Self::ClearSky
        } else {
            Self::Unknown
        }
    }

    /// Get a human-readable description of the weather condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow grains",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with hail",
            Self::Unknown => "Unknown",
        }
    }

    /// Get an emoji representation of the weather condition
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::MainlyClear => "🌤️",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁️",
            Self::Fog => "🌫️",
            Self::Drizzle | Self::Rain | Self::RainShowers => "🌧️",
            Self::FreezingDrizzle | Self::FreezingRain => "🌨️",
            Self::Snow | Self::SnowGrains | Self::SnowShowers => "❄️",
            Self::Thunderstorm | Self::ThunderstormWithHail => "⛈️",
            Self::Unknown => "❓",
        }
    }

    /// Any kind of falling snow
    #[must_use]
    pub const fn is_snowy(&self) -> bool {
        matches!(self, Self::Snow | Self::SnowGrains | Self::SnowShowers)
    }

    /// Rain or drizzle, frozen or not, thunderstorms included
    #[must_use]
    pub const fn is_rainy(&self) -> bool {
        matches!(
            self,
            Self::Drizzle
                | Self::FreezingDrizzle
                | Self::Rain
                | Self::FreezingRain
                | Self::RainShowers
                | Self::Thunderstorm
                | Self::ThunderstormWithHail
        )
    }

    /// Some or full cloud cover without precipitation
    #[must_use]
    pub const fn is_cloudy(&self) -> bool {
        matches!(self, Self::PartlyCloudy | Self::Overcast)
    }

    /// Clear or mainly clear sky
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        matches!(self, Self::ClearSky | Self::MainlyClear)
    }

    #[must_use]
    pub const fn is_partly_cloudy(&self) -> bool {
        matches!(self, Self::PartlyCloudy)
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
