//! Port adapters over the integration clients

mod odsay_transit;
mod tmap_geocoding;
mod tmap_taxi;

pub use odsay_transit::OdsayTransitAdapter;
pub use tmap_geocoding::TmapGeocodingAdapter;
pub use tmap_taxi::TmapTaxiAdapter;

use application::error::ApplicationError;
use integration_odsay::OdsayError;
use integration_tmap::TmapError;

/// Map a TMap client error into an application error
fn map_tmap_error(e: TmapError) -> ApplicationError {
    match e {
        TmapError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

/// Map an ODSay client error into an application error
fn map_odsay_error(e: OdsayError) -> ApplicationError {
    match e {
        OdsayError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limits_map_to_rate_limited() {
        let err = map_tmap_error(TmapError::RateLimitExceeded {
            retry_after_secs: Some(30),
        });
        assert!(matches!(err, ApplicationError::RateLimited));

        let err = map_odsay_error(OdsayError::RateLimitExceeded {
            retry_after_secs: None,
        });
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn other_errors_map_to_external_service() {
        let err = map_tmap_error(TmapError::Timeout { timeout_secs: 10 });
        assert!(matches!(err, ApplicationError::ExternalService(_)));

        let err = map_odsay_error(OdsayError::ParseError("bad json".to_string()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}
