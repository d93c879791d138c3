//! ODSay data models
//!
//! Typed representations of public transit paths as returned by the
//! ODSay path search API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport kind of one path leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    /// Walking transfer
    Walk,
    /// City bus
    Bus,
    /// Subway / metro
    Subway,
}

impl LegKind {
    /// Map an ODSay `trafficType` code to a leg kind
    ///
    /// Codes: 1 = subway, 2 = bus; anything else is treated as walking.
    #[must_use]
    pub const fn from_traffic_type(code: u32) -> Self {
        match code {
            1 => Self::Subway,
            2 => Self::Bus,
            _ => Self::Walk,
        }
    }

    /// Whether this leg rides a vehicle
    #[must_use]
    pub const fn is_transit(self) -> bool {
        matches!(self, Self::Bus | Self::Subway)
    }
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Walk => "walk",
            Self::Bus => "bus",
            Self::Subway => "subway",
        };
        write!(f, "{label}")
    }
}

/// One leg of a transit path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathLeg {
    /// Transport kind
    pub kind: LegKind,
    /// Leg duration in minutes
    pub duration_minutes: u32,
    /// Number of stations or stops passed (0 for walking legs)
    pub station_count: u32,
    /// Boarding station or stop name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_name: Option<String>,
    /// Line identifier (subway line name, or bus route number)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,
}

/// A complete transit path from origin to destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitPath {
    /// Individual legs in travel order
    pub legs: Vec<PathLeg>,
    /// Total travel time in minutes
    pub total_duration_minutes: u32,
    /// Total fare in won
    pub total_fare: u32,
    /// Number of bus boardings
    pub bus_transfer_count: u32,
    /// Number of subway boardings
    pub subway_transfer_count: u32,
}
