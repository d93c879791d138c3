//! Ports - Interfaces implemented by infrastructure adapters

mod geocoding_port;
mod taxi_port;
mod transit_port;

pub use geocoding_port::GeocodingPort;
pub use taxi_port::TaxiPort;
pub use transit_port::TransitPort;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use taxi_port::MockTaxiPort;
#[cfg(test)]
pub use transit_port::MockTransitPort;
