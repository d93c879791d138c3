//! Hybrid synthesis tuning configuration.

use application::services::JumpPolicy;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the hybrid route synthesis engine
///
/// Defaults match [`JumpPolicy::default`]; every knob can be
/// recalibrated from the `[synthesis]` config section without touching
/// the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Fraction of the replaced lead-in time the taxi jump takes
    #[serde(default = "default_time_factor")]
    pub time_factor: f64,

    /// Fixed buffer added to every jump duration, in minutes
    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: u32,

    /// Fixed surcharge added to every jump fare, in won
    #[serde(default = "default_fare_surcharge")]
    pub fare_surcharge: u32,

    /// Minimum lead-in duration for a candidate to be worth a jump
    #[serde(default = "default_min_lead_in_minutes")]
    pub min_lead_in_minutes: u32,

    /// How many top-ranked itineraries to scan for a jump candidate
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

const fn default_time_factor() -> f64 {
    0.5
}

const fn default_buffer_minutes() -> u32 {
    3
}

const fn default_fare_surcharge() -> u32 {
    3000
}

const fn default_min_lead_in_minutes() -> u32 {
    10
}

const fn default_max_candidates() -> usize {
    5
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            time_factor: default_time_factor(),
            buffer_minutes: default_buffer_minutes(),
            fare_surcharge: default_fare_surcharge(),
            min_lead_in_minutes: default_min_lead_in_minutes(),
            max_candidates: default_max_candidates(),
        }
    }
}

impl SynthesisConfig {
    /// Build the engine policy from this configuration
    #[must_use]
    pub const fn to_jump_policy(&self) -> JumpPolicy {
        JumpPolicy {
            time_factor: self.time_factor,
            buffer_minutes: self.buffer_minutes,
            fare_surcharge: self.fare_surcharge,
            min_lead_in_minutes: self.min_lead_in_minutes,
            max_candidates: self.max_candidates,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.time_factor.is_finite() || self.time_factor <= 0.0 || self.time_factor > 1.0 {
            return Err("time_factor must be in (0, 1]".to_string());
        }

        if self.max_candidates == 0 {
            return Err("max_candidates must be greater than 0".to_string());
        }

        Ok(())
    }
}
