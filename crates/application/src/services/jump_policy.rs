//! Taxi-jump estimation policy
//!
//! The SMART option replaces the lead-in portion of a transit itinerary
//! with a taxi ride whose time and fare are estimated in closed form, not
//! by a second routing call. Every calibration knob of those estimates
//! lives here so the heuristics can be re-tuned without touching the
//! synthesis engine.

/// Calibration constants for the synthesized taxi jump
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpPolicy {
    /// Fraction of the transit lead-in time the taxi is assumed to need
    pub time_factor: f64,
    /// Fixed boarding/alighting buffer added to every jump, in minutes
    pub buffer_minutes: u32,
    /// Fixed surcharge added to every jump fare, in currency units (won)
    pub fare_surcharge: u32,
    /// Minimum lead-in worth replacing with a taxi, in minutes
    pub min_lead_in_minutes: u32,
    /// How many provider-ranked candidates to scan for a jump point
    pub max_candidates: usize,
}

impl Default for JumpPolicy {
    fn default() -> Self {
        Self {
            time_factor: 0.5,
            buffer_minutes: 3,
            fare_surcharge: 3000,
            min_lead_in_minutes: 10,
            max_candidates: 5,
        }
    }
}

impl JumpPolicy {
    /// Whether a lead-in is long enough to be worth a taxi jump
    ///
    /// Short lead-ins would synthesize degenerate "taxi from the station
    /// to itself" rides.
    #[must_use]
    pub const fn is_eligible_lead_in(&self, lead_in_minutes: u32) -> bool {
        lead_in_minutes >= self.min_lead_in_minutes
    }

    /// Estimated jump duration in minutes
    ///
    /// The taxi is assumed to cover the lead-in ground in `time_factor`
    /// of the transit time, plus the fixed buffer. Rounding is half-up,
    /// the same convention as every other rounding in the engine.
    #[must_use]
    pub fn jump_duration_minutes(&self, lead_in_minutes: u32) -> u32 {
        let scaled = (f64::from(lead_in_minutes) * self.time_factor).round();
        scaled as u32 + self.buffer_minutes
    }

    /// Estimated jump fare in currency units
    ///
    /// A share of the full point-to-point taxi fare proportional to the
    /// lead-in's share of total transit time, plus the fixed surcharge.
    /// Returns `None` when `total_duration_minutes` is 0, in which case
    /// the candidate cannot be priced and must be skipped.
    #[must_use]
    pub fn jump_fare(
        &self,
        taxi_fare: u32,
        lead_in_minutes: u32,
        total_duration_minutes: u32,
    ) -> Option<u32> {
        if total_duration_minutes == 0 {
            return None;
        }
        let share = f64::from(taxi_fare) * f64::from(lead_in_minutes)
            / f64::from(total_duration_minutes);
        Some(share.round() as u32 + self.fare_surcharge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_constants() {
        let policy = JumpPolicy::default();
        assert!((policy.time_factor - 0.5).abs() < f64::EPSILON);
        assert_eq!(policy.buffer_minutes, 3);
        assert_eq!(policy.fare_surcharge, 3000);
        assert_eq!(policy.min_lead_in_minutes, 10);
        assert_eq!(policy.max_candidates, 5);
    }

    #[test]
    fn eligibility_threshold_is_inclusive() {
        let policy = JumpPolicy::default();
        assert!(!policy.is_eligible_lead_in(9));
        assert!(policy.is_eligible_lead_in(10));
        assert!(policy.is_eligible_lead_in(25));
    }

    #[test]
    fn jump_duration_rounds_half_up() {
        let policy = JumpPolicy::default();
        // 25 * 0.5 = 12.5 rounds to 13, plus the 3 minute buffer
        assert_eq!(policy.jump_duration_minutes(25), 16);
        // 15 * 0.5 = 7.5 rounds to 8
        assert_eq!(policy.jump_duration_minutes(15), 11);
        // 20 * 0.5 = 10 exactly
        assert_eq!(policy.jump_duration_minutes(20), 13);
    }

    #[test]
    fn jump_fare_prorates_and_adds_surcharge() {
        let policy = JumpPolicy::default();
        // round(15000 * 25 / 45) = 8333, plus 3000
        assert_eq!(policy.jump_fare(15000, 25, 45), Some(11333));
    }

    #[test]
    fn jump_fare_refuses_zero_total_duration() {
        let policy = JumpPolicy::default();
        assert_eq!(policy.jump_fare(15000, 25, 0), None);
    }

    #[test]
    fn jump_fare_with_zero_lead_in_is_just_the_surcharge() {
        let policy = JumpPolicy::default();
        assert_eq!(policy.jump_fare(15000, 0, 45), Some(3000));
    }

    proptest::proptest! {
        #[test]
        fn jump_duration_is_at_least_the_buffer(lead_in in 0u32..10_000) {
            let policy = JumpPolicy::default();
            proptest::prop_assert!(policy.jump_duration_minutes(lead_in) >= policy.buffer_minutes);
        }

        #[test]
        fn jump_duration_is_monotonic_in_lead_in(lead_in in 0u32..10_000) {
            let policy = JumpPolicy::default();
            proptest::prop_assert!(
                policy.jump_duration_minutes(lead_in + 1) >= policy.jump_duration_minutes(lead_in)
            );
        }

        #[test]
        fn jump_fare_never_exceeds_full_fare_plus_surcharge(
            fare in 0u32..1_000_000,
            lead_in in 0u32..500,
            extra in 0u32..500,
        ) {
            let policy = JumpPolicy::default();
            let total = lead_in + extra + 1;
            let jump = policy.jump_fare(fare, lead_in, total).expect("total > 0");
            // lead_in < total, so the prorated share stays below the full fare
            // (allowing 1 for rounding)
            proptest::prop_assert!(jump <= fare + policy.fare_surcharge + 1);
        }
    }
}
