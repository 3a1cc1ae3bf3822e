//! Named location value object

use serde::Serialize;

use super::GeoLocation;
use crate::errors::DomainError;

/// A named place whose weather is compared
///
/// Immutable once created; the coordinates are validated on construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    name: String,
    coordinates: GeoLocation,
}

impl Location {
    /// Create a new named location
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the coordinates are out of range.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Location name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            coordinates: GeoLocation::new(latitude, longitude)?,
        })
    }

    /// Del Mar, California
    #[must_use]
    pub fn del_mar() -> Self {
        Self {
            name: "Del Mar, CA".to_string(),
            coordinates: GeoLocation::new_unchecked(32.9595, -117.2653),
        }
    }

    /// Boston, Massachusetts
    #[must_use]
    pub fn boston() -> Self {
        Self {
            name: "Boston, MA".to_string(),
            coordinates: GeoLocation::new_unchecked(42.3601, -71.0589),
        }
    }

    /// Full display name (e.g. "Del Mar, CA")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without the region suffix (e.g. "Del Mar")
    pub fn short_name(&self) -> &str {
        self.name
            .split_once(',')
            .map_or(self.name.as_str(), |(head, _)| head.trim())
    }

    /// Validated coordinates
    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        self.coordinates
    }

    /// Latitude in degrees
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    /// Longitude in degrees
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.coordinates)
    }
}
