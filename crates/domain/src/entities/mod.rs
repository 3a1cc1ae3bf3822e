//! Domain entities - Values produced and consumed within a single run

mod comparison_message;
mod delivery_result;
mod weather_reading;

pub use comparison_message::ComparisonMessage;
pub use delivery_result::DeliveryResult;
pub use weather_reading::{MAX_ABS_TEMPERATURE, WeatherReading};
