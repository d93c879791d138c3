//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// # Safety
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Calculate approximate distance to another location in kilometers
    ///
    /// Uses the Haversine formula for great-circle distance
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
            (delta_lon / 2.0).sin().powi(2),
            (delta_lat / 2.0).sin().powi(2),
        );
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Common locations for defaults and tests
impl GeoLocation {
    /// Seoul City Hall
    #[must_use]
    pub const fn seoul_city_hall() -> Self {
        Self::new_unchecked(37.5663, 126.9779)
    }

    /// Gangnam Station, Seoul
    #[must_use]
    pub const fn gangnam_station() -> Self {
        Self::new_unchecked(37.4979, 127.0276)
    }

    /// Incheon International Airport
    #[must_use]
    pub const fn incheon_airport() -> Self {
        Self::new_unchecked(37.4602, 126.4407)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(37.5663, 126.9779).expect("valid coordinates");
        assert!((loc.latitude() - 37.5663).abs() < f64::EPSILON);
        assert!((loc.longitude() - 126.9779).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(37.5663, 126.9779).expect("valid");
        let display = format!("{loc}");
        assert!(display.contains("37.5663"));
        assert!(display.contains("126.9779"));
    }

    #[test]
    fn test_distance_same_location() {
        let loc = GeoLocation::seoul_city_hall();
        assert!(loc.distance_km(&loc).abs() < 0.001);
    }

    #[test]
    fn test_distance_city_hall_gangnam() {
        let city_hall = GeoLocation::seoul_city_hall();
        let gangnam = GeoLocation::gangnam_station();
        let distance = city_hall.distance_km(&gangnam);
        // City Hall to Gangnam Station is approximately 8.8km
        assert!((distance - 8.8).abs() < 0.5);
    }

    #[test]
    fn test_distance_city_hall_incheon_airport() {
        let city_hall = GeoLocation::seoul_city_hall();
        let airport = GeoLocation::incheon_airport();
        let distance = city_hall.distance_km(&airport);
        // City Hall to Incheon Airport is approximately 49km
        assert!((distance - 48.8).abs() < 2.0);
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::new(37.5663, 126.9779).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("37.5663"));
        assert!(json.contains("126.9779"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }

    #[test]
    fn test_common_locations() {
        assert!((GeoLocation::seoul_city_hall().latitude() - 37.5663).abs() < 0.01);
        assert!((GeoLocation::gangnam_station().latitude() - 37.4979).abs() < 0.01);
        assert!((GeoLocation::incheon_airport().longitude() - 126.4407).abs() < 0.01);
    }

    proptest::proptest! {
        #[test]
        fn new_accepts_exactly_the_wgs84_range(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            proptest::prop_assert!(GeoLocation::new(lat, lon).is_ok());
        }

        #[test]
        fn new_rejects_out_of_range_latitude(lat in 90.0001f64..1000.0, lon in -180.0f64..=180.0) {
            proptest::prop_assert!(GeoLocation::new(lat, lon).is_err());
            proptest::prop_assert!(GeoLocation::new(-lat, lon).is_err());
        }
    }
}
