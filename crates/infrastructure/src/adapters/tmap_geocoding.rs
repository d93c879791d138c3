//! Geocoding adapter - Implements GeocodingPort using integration_tmap

use std::{fmt, sync::Arc};

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{GeoLocation, Place};
use integration_tmap::{Poi, TmapClient};
use tracing::{instrument, warn};

use super::map_tmap_error;

/// Adapter resolving place queries via the TMap POI and reverse
/// geocoding endpoints
pub struct TmapGeocodingAdapter {
    client: Arc<dyn TmapClient>,
}

impl fmt::Debug for TmapGeocodingAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmapGeocodingAdapter")
            .finish_non_exhaustive()
    }
}

impl TmapGeocodingAdapter {
    /// Create a new geocoding adapter
    pub fn new(client: Arc<dyn TmapClient>) -> Self {
        Self { client }
    }

    /// Convert a POI hit to a domain place
    ///
    /// POIs with out-of-range coordinates count as misses. A nameless
    /// POI falls back to the original query text.
    fn convert_poi(poi: Poi, query: &str) -> Option<Place> {
        match GeoLocation::new(poi.latitude, poi.longitude) {
            Ok(location) => {
                let name = if poi.name.trim().is_empty() {
                    query.to_string()
                } else {
                    poi.name
                };
                Some(Place::new(name, location))
            }
            Err(e) => {
                warn!(query, error = %e, "POI has invalid coordinates, treating as miss");
                None
            }
        }
    }
}

#[async_trait]
impl GeocodingPort for TmapGeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve_place(&self, query: &str) -> Result<Option<Place>, ApplicationError> {
        let poi = self
            .client
            .search_poi(query)
            .await
            .map_err(map_tmap_error)?;

        Ok(poi.and_then(|poi| Self::convert_poi(poi, query)))
    }

    #[instrument(skip(self))]
    async fn describe_location(
        &self,
        location: &GeoLocation,
    ) -> Result<Option<String>, ApplicationError> {
        self.client
            .reverse_geocode(location.latitude(), location.longitude())
            .await
            .map_err(map_tmap_error)
    }
}
