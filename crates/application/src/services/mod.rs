//! Application services

mod jump_policy;
mod option_assembler;
mod synthesis_engine;
mod trip_service;

pub use jump_policy::JumpPolicy;
pub use option_assembler::assemble_options;
pub use synthesis_engine::{SynthesisEngine, SynthesisResult};
pub use trip_service::{PlaceQuery, TripPlan, TripService};
