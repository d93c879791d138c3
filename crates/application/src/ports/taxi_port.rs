//! Taxi estimation port

use async_trait::async_trait;
use domain::{GeoLocation, TaxiEstimate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for point-to-point taxi time/fare estimation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaxiPort: Send + Sync {
    /// Estimate a door-to-door taxi ride
    ///
    /// `Ok(None)` means the provider produced no route for this pair.
    /// Provider failures surface as errors; the orchestration layer
    /// degrades both cases to "taxi unavailable".
    async fn estimate_ride(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Option<TaxiEstimate>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TaxiPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TaxiPort>();
    }

    #[tokio::test]
    async fn mock_returns_estimate() {
        let mut mock = MockTaxiPort::new();
        mock.expect_estimate_ride()
            .returning(|_, _| Ok(Some(TaxiEstimate::new(20, 15000, 9800))));

        let estimate = mock
            .estimate_ride(
                &GeoLocation::seoul_city_hall(),
                &GeoLocation::gangnam_station(),
            )
            .await
            .unwrap();
        assert_eq!(estimate, Some(TaxiEstimate::new(20, 15000, 9800)));
    }
}
