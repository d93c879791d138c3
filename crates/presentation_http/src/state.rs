//! Application state shared across HTTP handlers

use std::sync::Arc;

use application::{TripService, ports::GeocodingPort};
use infrastructure::AppConfig;

/// Shared application state
///
/// Cloned per request; all fields are cheap Arc handles.
#[derive(Clone)]
pub struct AppState {
    /// Trip planning orchestration
    pub trip_service: Arc<TripService>,
    /// Direct geocoding access for the reverse-geocode endpoint
    pub geocoding: Arc<dyn GeocodingPort>,
    /// Loaded configuration, used by readiness checks
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("trip_service", &self.trip_service)
            .finish_non_exhaustive()
    }
}
