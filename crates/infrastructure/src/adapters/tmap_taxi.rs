//! Taxi adapter - Implements TaxiPort using integration_tmap

use std::{fmt, sync::Arc};

use application::error::ApplicationError;
use application::ports::TaxiPort;
use async_trait::async_trait;
use domain::{GeoLocation, TaxiEstimate};
use integration_tmap::TmapClient;
use tracing::instrument;

use super::map_tmap_error;

/// Adapter estimating taxi rides via the TMap route endpoint
pub struct TmapTaxiAdapter {
    client: Arc<dyn TmapClient>,
}

impl fmt::Debug for TmapTaxiAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmapTaxiAdapter").finish_non_exhaustive()
    }
}

impl TmapTaxiAdapter {
    /// Create a new taxi adapter
    pub fn new(client: Arc<dyn TmapClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaxiPort for TmapTaxiAdapter {
    #[instrument(skip(self))]
    async fn estimate_ride(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Option<TaxiEstimate>, ApplicationError> {
        let estimate = self
            .client
            .estimate_route(
                origin.latitude(),
                origin.longitude(),
                destination.latitude(),
                destination.longitude(),
            )
            .await
            .map_err(map_tmap_error)?;

        Ok(estimate.map(|e| TaxiEstimate::new(e.duration_minutes, e.fare_amount, e.distance_meters)))
    }
}

#[cfg(test)]
mod tests {
    use integration_tmap::{Poi, RouteEstimate, TmapError};
    use mockall::mock;

    use super::*;

    mock! {
        Tmap {}

        #[async_trait]
        impl TmapClient for Tmap {
            async fn search_poi(&self, keyword: &str) -> Result<Option<Poi>, TmapError>;
            async fn estimate_route(
                &self,
                from_lat: f64,
                from_lon: f64,
                to_lat: f64,
                to_lon: f64,
            ) -> Result<Option<RouteEstimate>, TmapError>;
            async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Option<String>, TmapError>;
        }
    }

    #[tokio::test]
    async fn estimate_converts_to_domain_type() {
        let mut client = MockTmap::new();
        client.expect_estimate_route().returning(|_, _, _, _| {
            Ok(Some(RouteEstimate {
                duration_minutes: 20,
                fare_amount: 15000,
                distance_meters: 9800,
            }))
        });

        let adapter = TmapTaxiAdapter::new(Arc::new(client));
        let estimate = adapter
            .estimate_ride(
                &GeoLocation::seoul_city_hall(),
                &GeoLocation::gangnam_station(),
            )
            .await
            .unwrap();

        assert_eq!(estimate, Some(TaxiEstimate::new(20, 15000, 9800)));
    }

    #[tokio::test]
    async fn no_route_passes_through_as_none() {
        let mut client = MockTmap::new();
        client
            .expect_estimate_route()
            .returning(|_, _, _, _| Ok(None));

        let adapter = TmapTaxiAdapter::new(Arc::new(client));
        let estimate = adapter
            .estimate_ride(
                &GeoLocation::seoul_city_hall(),
                &GeoLocation::incheon_airport(),
            )
            .await
            .unwrap();
        assert!(estimate.is_none());
    }

    #[tokio::test]
    async fn timeout_maps_to_external_service() {
        let mut client = MockTmap::new();
        client
            .expect_estimate_route()
            .returning(|_, _, _, _| Err(TmapError::Timeout { timeout_secs: 10 }));

        let adapter = TmapTaxiAdapter::new(Arc::new(client));
        let err = adapter
            .estimate_ride(
                &GeoLocation::seoul_city_hall(),
                &GeoLocation::gangnam_station(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}
