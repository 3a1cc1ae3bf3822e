//! Weather integrations
//!
//! Current-conditions clients for the Open-Meteo Forecast API
//! (<https://open-meteo.com>) and wttr.in (<https://wttr.in>). Neither
//! requires an API key. One provider is chosen per run; there is no
//! fallback between them.

pub mod client;
mod models;
mod open_meteo;
mod wttr;

pub use client::{WeatherClient, WeatherConfig, WeatherError, WeatherProvider};
pub use models::CurrentConditions;
pub use open_meteo::OpenMeteoClient;
pub use wttr::WttrClient;

/// Build the client for the configured provider
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialized.
pub fn build_client(config: WeatherConfig) -> Result<Box<dyn WeatherClient>, WeatherError> {
    Ok(match config.provider {
        WeatherProvider::OpenMeteo => Box::new(OpenMeteoClient::new(config)?),
        WeatherProvider::Wttr => Box::new(WttrClient::new(config)?),
    })
}
