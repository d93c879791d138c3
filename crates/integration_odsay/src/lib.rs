//! ODSay integration for tripweaver
//!
//! Provides public transit path search via the
//! [ODSay API](https://api.odsay.com), covering Korean bus and subway
//! networks.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`OdsayClient`] defines the interface, implemented
//! by [`OdsayApiClient`]. Provider failures reported in-band (HTTP 200
//! with an `error` object) surface as an empty path list, matching the
//! "no path found" outcome.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_odsay::{OdsayApiClient, OdsayClient, OdsayConfig};
//!
//! let config = OdsayConfig::default();
//! let client = OdsayApiClient::new(&config)?;
//!
//! let paths = client.search_paths(37.5663, 126.9779, 37.4979, 127.0276).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OdsayApiClient, OdsayClient};
pub use config::OdsayConfig;
pub use error::OdsayError;
pub use models::{LegKind, PathLeg, TransitPath};
