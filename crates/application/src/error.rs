//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every variant is terminal for the current run; nothing is retried.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Weather could not be fetched or parsed for a location
    #[error("Weather fetch failed for {location}: {reason}")]
    WeatherFetch {
        /// Location the request was made for
        location: String,
        /// What went wrong
        reason: String,
    },

    /// Message could not be composed
    #[error("Composition error: {0}")]
    Composition(String),

    /// SMS provider rejected the message or was unreachable
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Build a fetch error for a named location
    pub fn weather_fetch(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WeatherFetch {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_fetch_names_location() {
        let err = ApplicationError::weather_fetch("Boston, MA", "timed out");
        assert_eq!(
            err.to_string(),
            "Weather fetch failed for Boston, MA: timed out"
        );
    }

    #[test]
    fn domain_errors_are_transparent() {
        let err: ApplicationError =
            DomainError::InvalidPhoneNumber("Phone number must start with +".into()).into();
        assert!(err.to_string().contains("must start with +"));
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn composition_and_delivery_messages() {
        assert_eq!(
            ApplicationError::Composition("missing reading".into()).to_string(),
            "Composition error: missing reading"
        );
        assert_eq!(
            ApplicationError::Delivery("21211".into()).to_string(),
            "Delivery error: 21211"
        );
    }
}
