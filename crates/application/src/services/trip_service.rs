//! Trip planning orchestration
//!
//! Drives one request end to end: resolve both endpoints, fetch the taxi
//! estimate and the transit itineraries concurrently, run the synthesis
//! engine, and assemble the option list. Provider failures after
//! resolution degrade to missing data instead of failing the request;
//! only validation and resolution failures abort it.

use std::{fmt, sync::Arc};

use domain::{GeoLocation, Place, RouteOption, TaxiEstimate, TransitItinerary};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, TaxiPort, TransitPort},
    services::{SynthesisEngine, assemble_options},
};

/// One trip endpoint as given by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceQuery {
    /// Free-text place query, resolved via geocoding
    Text(String),
    /// Client-supplied coordinates, optionally already named
    Coordinates {
        location: GeoLocation,
        name: Option<String>,
    },
}

impl PlaceQuery {
    /// Free-text query from anything stringy
    pub fn text(query: impl Into<String>) -> Self {
        Self::Text(query.into())
    }

    /// Short description for error messages and logs
    fn describe(&self) -> String {
        match self {
            Self::Text(query) => query.clone(),
            Self::Coordinates { location, .. } => location.to_string(),
        }
    }
}

/// The planned trip: both resolved endpoints plus the option list
///
/// `options` may be empty; that is the "no route available" outcome and
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    pub origin: Place,
    pub destination: Place,
    pub options: Vec<RouteOption>,
}

/// Orchestrates one trip-planning request
pub struct TripService {
    geocoding: Arc<dyn GeocodingPort>,
    taxi: Arc<dyn TaxiPort>,
    transit: Arc<dyn TransitPort>,
    engine: SynthesisEngine,
}

impl fmt::Debug for TripService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripService")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl TripService {
    /// Create a new trip service
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        taxi: Arc<dyn TaxiPort>,
        transit: Arc<dyn TransitPort>,
        engine: SynthesisEngine,
    ) -> Self {
        Self {
            geocoding,
            taxi,
            transit,
            engine,
        }
    }

    /// Plan a trip between two endpoints
    ///
    /// Both endpoints must resolve to coordinates; a miss aborts with
    /// [`ApplicationError::LocationNotFound`] before any routing call.
    /// The taxi and transit fetches run concurrently and degrade
    /// independently.
    #[instrument(skip(self))]
    pub async fn plan_trip(
        &self,
        origin: PlaceQuery,
        destination: PlaceQuery,
    ) -> Result<TripPlan, ApplicationError> {
        let (origin, destination) = tokio::join!(
            self.resolve_endpoint(&origin),
            self.resolve_endpoint(&destination),
        );
        let origin = origin?;
        let destination = destination?;

        debug!(origin = %origin, destination = %destination, "Endpoints resolved");

        let (taxi, itineraries) = tokio::join!(
            self.fetch_taxi_estimate(&origin, &destination),
            self.fetch_itineraries(&origin, &destination),
        );

        let synthesis = self.engine.synthesize(&itineraries, taxi.as_ref());
        let options = assemble_options(synthesis, taxi.as_ref());

        debug!(
            option_count = options.len(),
            itinerary_count = itineraries.len(),
            taxi_available = taxi.is_some(),
            "Trip planned"
        );

        Ok(TripPlan {
            origin,
            destination,
            options,
        })
    }

    /// Resolve one endpoint to a named place
    ///
    /// Text queries must geocode; both a provider miss and a provider
    /// error abort with "location not found" (the error additionally
    /// logged). Bare coordinates are named via reverse geocoding, falling
    /// back to the coordinate rendering; that lookup never fails the
    /// request.
    async fn resolve_endpoint(&self, query: &PlaceQuery) -> Result<Place, ApplicationError> {
        match query {
            PlaceQuery::Text(text) => match self.geocoding.resolve_place(text).await {
                Ok(Some(place)) => Ok(place),
                Ok(None) => Err(ApplicationError::LocationNotFound(text.clone())),
                Err(e) => {
                    warn!(query = %text, error = %e, "Geocoding failed");
                    Err(ApplicationError::LocationNotFound(text.clone()))
                }
            },
            PlaceQuery::Coordinates {
                location,
                name: Some(name),
            } => Ok(Place::new(name.clone(), *location)),
            PlaceQuery::Coordinates {
                location,
                name: None,
            } => match self.geocoding.describe_location(location).await {
                Ok(Some(address)) => Ok(Place::new(address, *location)),
                Ok(None) => Ok(Place::unnamed(*location)),
                Err(e) => {
                    warn!(location = %location, error = %e, "Reverse geocoding failed");
                    Ok(Place::unnamed(*location))
                }
            },
        }
    }

    /// Fetch the taxi estimate, degrading failures to "taxi unavailable"
    async fn fetch_taxi_estimate(
        &self,
        origin: &Place,
        destination: &Place,
    ) -> Option<TaxiEstimate> {
        match self
            .taxi
            .estimate_ride(&origin.location(), &destination.location())
            .await
        {
            Ok(estimate) => estimate,
            Err(e) => {
                warn!(error = %e, "Taxi estimate failed, continuing without taxi data");
                None
            }
        }
    }

    /// Fetch transit itineraries, degrading failures to "no path found"
    async fn fetch_itineraries(
        &self,
        origin: &Place,
        destination: &Place,
    ) -> Vec<TransitItinerary> {
        match self
            .transit
            .find_itineraries(&origin.location(), &destination.location())
            .await
        {
            Ok(itineraries) => itineraries,
            Err(e) => {
                warn!(error = %e, "Transit search failed, continuing without itineraries");
                Vec::new()
            }
        }
    }
}
