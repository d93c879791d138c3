//! Public transit itinerary port

use async_trait::async_trait;
use domain::{GeoLocation, TransitItinerary};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for public-transit itinerary search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitPort: Send + Sync {
    /// Find candidate itineraries between two points
    ///
    /// Candidates come back in provider rank order (index 0 = first
    /// recommendation). An empty list means "no path found" and is a
    /// valid outcome, not a failure.
    async fn find_itineraries(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Vec<TransitItinerary>, ApplicationError>;
}
