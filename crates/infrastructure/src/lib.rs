//! Infrastructure layer for tripweaver
//!
//! Implements the application ports over the integration clients and
//! owns process configuration:
//!
//! - [`adapters`]: [`TmapGeocodingAdapter`](adapters::TmapGeocodingAdapter),
//!   [`TmapTaxiAdapter`](adapters::TmapTaxiAdapter), and
//!   [`OdsayTransitAdapter`](adapters::OdsayTransitAdapter) translate
//!   between provider models and domain types and map provider errors
//!   into [`application::error::ApplicationError`].
//! - [`config`]: [`AppConfig`](config::AppConfig) loaded from defaults,
//!   an optional `config.toml`, and `TRIPWEAVER_*` environment overrides.

pub mod adapters;
pub mod config;

pub use adapters::{OdsayTransitAdapter, TmapGeocodingAdapter, TmapTaxiAdapter};
pub use config::{AppConfig, ServerConfig, SynthesisConfig};
