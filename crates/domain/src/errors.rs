//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid phone number format
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Temperature is NaN or infinite
    #[error("Invalid temperature: {0}")]
    InvalidTemperature(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
