//! Adapters - Implementations of application ports

mod disabled_sms_adapter;
mod twilio_sms_adapter;
mod weather_adapter;

pub use disabled_sms_adapter::DisabledSmsAdapter;
pub use twilio_sms_adapter::TwilioSmsAdapter;
pub use weather_adapter::WeatherAdapter;
