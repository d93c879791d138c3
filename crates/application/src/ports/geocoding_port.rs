//! Geocoding port
//!
//! Resolves free-text place queries to named coordinates and coordinates
//! back to human-readable addresses. Adapters in the infrastructure layer
//! implement this port on top of the geocoding provider.

use async_trait::async_trait;
use domain::{GeoLocation, Place};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-text query to a named place
    ///
    /// `Ok(None)` means the provider has no match for the query; callers
    /// surface this as "location not found".
    async fn resolve_place(&self, query: &str) -> Result<Option<Place>, ApplicationError>;

    /// Describe coordinates as a human-readable address
    ///
    /// `Ok(None)` means the provider has no address for the point.
    async fn describe_location(
        &self,
        location: &GeoLocation,
    ) -> Result<Option<String>, ApplicationError>;
}
