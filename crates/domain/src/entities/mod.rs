//! Domain entities - provider-derived route data and user-facing options

mod route_option;
mod taxi_estimate;
mod transit;

pub use route_option::{DisplayStep, RouteKind, RouteOption, StepMode};
pub use taxi_estimate::TaxiEstimate;
pub use transit::{SegmentMode, TransitItinerary, TransitSegment};
