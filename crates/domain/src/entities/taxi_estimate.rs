//! Point-to-point taxi estimate

use serde::{Deserialize, Serialize};

/// A taxi time/cost estimate for one origin/destination pair
///
/// Produced once per request by the taxi routing provider and never
/// mutated afterwards. The absence of an estimate means "taxi
/// unavailable", which downstream logic treats as a valid outcome, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiEstimate {
    /// Door-to-door travel time in whole minutes
    pub duration_minutes: u32,
    /// Estimated metered fare in currency units (won)
    pub fare_amount: u32,
    /// Route length in meters
    pub distance_meters: u32,
}

impl TaxiEstimate {
    /// Create a new estimate
    #[must_use]
    pub const fn new(duration_minutes: u32, fare_amount: u32, distance_meters: u32) -> Self {
        Self {
            duration_minutes,
            fare_amount,
            distance_meters,
        }
    }
}
