//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! weather and Twilio integration crates, and owns configuration loading
//! and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, ConfigError, DeliverySettings, LogFormat, ProviderCredentials, RunSettings,
};
pub use telemetry::{TelemetryError, default_filter, init_tracing};
