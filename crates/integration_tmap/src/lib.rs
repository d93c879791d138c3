//! TMap integration for tripweaver
//!
//! Provides POI keyword search, reverse geocoding, and taxi route
//! estimation via the [TMap open API](https://apis.openapi.sk.com)
//! (SK open API platform).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`TmapClient`] defines the interface, implemented
//! by [`TmapApiClient`]. Successful POI lookups are cached per keyword
//! with a configurable TTL.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_tmap::{TmapApiClient, TmapClient, TmapConfig};
//!
//! let config = TmapConfig::default();
//! let client = TmapApiClient::new(&config)?;
//!
//! let poi = client.search_poi("강남역").await?;
//! let estimate = client.estimate_route(37.5663, 126.9779, 37.4979, 127.0276).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{TmapApiClient, TmapClient};
pub use config::TmapConfig;
pub use error::TmapError;
pub use models::{Poi, RouteEstimate};
