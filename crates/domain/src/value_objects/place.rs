//! Resolved trip endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geo_location::GeoLocation;

/// A resolved trip endpoint: display name plus coordinates
///
/// Produced by geocoding a free-text query or taken directly from a
/// client-supplied coordinate pair. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    name: String,
    location: GeoLocation,
}

impl Place {
    /// Create a place from a display name and a location
    #[must_use]
    pub fn new(name: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// Create a place whose name is the coordinate rendering
    ///
    /// Used when no display name could be resolved for a coordinate pair.
    #[must_use]
    pub fn unnamed(location: GeoLocation) -> Self {
        Self {
            name: location.to_string(),
            location,
        }
    }

    /// Display name of the place
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coordinates of the place
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}
