//! Transit itineraries as returned by the itinerary provider
//!
//! A [`TransitItinerary`] is one candidate path between two points,
//! ordered from origin to destination. Candidates arrive ranked by the
//! provider (index 0 = first recommendation) and are immutable once
//! received. The anchor/lead-in accessors exist for the hybrid synthesis
//! pass, which replaces everything before the anchor segment with a taxi
//! jump.

use serde::{Deserialize, Serialize};

/// Travel mode of a single itinerary leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentMode {
    Walk,
    Bus,
    Subway,
}

impl SegmentMode {
    /// Whether this leg rides a vehicle (bus or subway)
    #[must_use]
    pub const fn is_transit(self) -> bool {
        matches!(self, Self::Bus | Self::Subway)
    }
}

/// One leg of a transit itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitSegment {
    /// Travel mode of this leg
    pub mode: SegmentMode,
    /// Subway line name (e.g. "2호선") or bus route number (e.g. "146");
    /// `None` for walks and for legs the provider left unnamed
    pub line_name: Option<String>,
    /// Name of the station or stop where this leg starts
    pub start_station: Option<String>,
    /// Number of stations/stops passed, 0 for walks
    pub station_count: u32,
    /// Leg duration in whole minutes
    pub duration_minutes: u32,
}

impl TransitSegment {
    /// Rider-facing name of this leg, derived from structured fields only
    ///
    /// Subway legs show the line name, bus legs the route number, walks a
    /// fixed walk label. Unnamed transit legs fall back to the bare mode
    /// label.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.mode {
            SegmentMode::Walk => "도보".to_string(),
            SegmentMode::Subway => self
                .line_name
                .clone()
                .unwrap_or_else(|| "지하철".to_string()),
            SegmentMode::Bus => self
                .line_name
                .as_ref()
                .map_or_else(|| "버스".to_string(), |no| format!("{no}번 버스")),
        }
    }

    /// Rider-facing description of this leg
    #[must_use]
    pub fn display_description(&self) -> String {
        match self.mode {
            SegmentMode::Walk => format!("약 {}분 소요", self.duration_minutes),
            SegmentMode::Subway => format!("{}개 역 이동", self.station_count),
            SegmentMode::Bus => format!("{}개 정류장 이동", self.station_count),
        }
    }
}

/// One candidate transit path between origin and destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitItinerary {
    /// Legs in travel order, origin to destination
    pub segments: Vec<TransitSegment>,
    /// Provider-reported total travel time in minutes
    pub total_duration_minutes: u32,
    /// Provider-reported total fare in currency units (won)
    pub total_fare: u32,
    /// Number of bus boardings on this path
    pub bus_transfer_count: u32,
    /// Number of subway boardings on this path
    pub subway_transfer_count: u32,
}

impl TransitItinerary {
    /// Combined bus and subway boarding count
    #[must_use]
    pub const fn combined_transfer_count(&self) -> u32 {
        self.bus_transfer_count + self.subway_transfer_count
    }

    /// Index of the anchor segment: the last bus-or-subway leg
    ///
    /// The anchor is the trunk leg assumed to run closest to the
    /// destination. `None` when the itinerary has no transit leg at all.
    #[must_use]
    pub fn anchor_index(&self) -> Option<usize> {
        self.segments.iter().rposition(|s| s.mode.is_transit())
    }

    /// Total minutes spent on all segments strictly before the anchor
    ///
    /// `None` when there is no anchor segment.
    #[must_use]
    pub fn lead_in_minutes(&self) -> Option<u32> {
        let anchor = self.anchor_index()?;
        Some(
            self.segments[..anchor]
                .iter()
                .map(|s| s.duration_minutes)
                .sum(),
        )
    }
}
