//! TMap data models
//!
//! Typed representations of POI search hits and taxi route estimates as
//! returned by the TMap open API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point of interest returned by keyword search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Poi {
    /// Display name of the place
    pub name: String,
    /// WGS84 latitude
    pub latitude: f64,
    /// WGS84 longitude
    pub longitude: f64,
}

impl fmt::Display for Poi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.6}, {:.6})", self.name, self.latitude, self.longitude)
    }
}

/// A taxi route estimate between two points
///
/// Duration is already converted from provider seconds to whole minutes
/// (round half up).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEstimate {
    /// Estimated travel time in minutes
    pub duration_minutes: u32,
    /// Estimated taxi fare in won
    pub fare_amount: u32,
    /// Route distance in meters
    pub distance_meters: u32,
}
