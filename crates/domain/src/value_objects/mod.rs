//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod location;
mod phone_number;
mod temperature_unit;
mod weather_condition;

pub use geo_location::GeoLocation;
pub use location::Location;
pub use phone_number::PhoneNumber;
pub use temperature_unit::TemperatureUnit;
pub use weather_condition::WeatherCondition;
