//! Transit adapter - Implements TransitPort using integration_odsay

use std::{fmt, sync::Arc};

use application::error::ApplicationError;
use application::ports::TransitPort;
use async_trait::async_trait;
use domain::{GeoLocation, SegmentMode, TransitItinerary, TransitSegment};
use integration_odsay::{LegKind, OdsayClient, PathLeg, TransitPath};
use tracing::instrument;

use super::map_odsay_error;

/// Adapter searching transit itineraries via the ODSay path API
pub struct OdsayTransitAdapter {
    client: Arc<dyn OdsayClient>,
}

impl fmt::Debug for OdsayTransitAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OdsayTransitAdapter").finish_non_exhaustive()
    }
}

impl OdsayTransitAdapter {
    /// Create a new transit adapter
    pub fn new(client: Arc<dyn OdsayClient>) -> Self {
        Self { client }
    }

    /// Convert an integration leg kind to the domain segment mode
    const fn convert_mode(kind: LegKind) -> SegmentMode {
        match kind {
            LegKind::Walk => SegmentMode::Walk,
            LegKind::Bus => SegmentMode::Bus,
            LegKind::Subway => SegmentMode::Subway,
        }
    }

    /// Convert an integration leg to a domain segment
    fn convert_leg(leg: PathLeg) -> TransitSegment {
        TransitSegment {
            mode: Self::convert_mode(leg.kind),
            line_name: leg.line_name,
            start_station: leg.start_name,
            station_count: leg.station_count,
            duration_minutes: leg.duration_minutes,
        }
    }

    /// Convert an integration path to a domain itinerary
    fn convert_path(path: TransitPath) -> TransitItinerary {
        TransitItinerary {
            segments: path.legs.into_iter().map(Self::convert_leg).collect(),
            total_duration_minutes: path.total_duration_minutes,
            total_fare: path.total_fare,
            bus_transfer_count: path.bus_transfer_count,
            subway_transfer_count: path.subway_transfer_count,
        }
    }
}

#[async_trait]
impl TransitPort for OdsayTransitAdapter {
    #[instrument(skip(self))]
    async fn find_itineraries(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Vec<TransitItinerary>, ApplicationError> {
        let paths = self
            .client
            .search_paths(
                origin.latitude(),
                origin.longitude(),
                destination.latitude(),
                destination.longitude(),
            )
            .await
            .map_err(map_odsay_error)?;

        Ok(paths.into_iter().map(Self::convert_path).collect())
    }
}
