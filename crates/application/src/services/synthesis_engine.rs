//! Hybrid route synthesis engine
//!
//! Produces the SAVER (best transit-only) option and, when a worthwhile
//! jump point exists, the SMART (taxi-then-transit) option from one
//! itinerary set and one taxi estimate. Pure and deterministic: the same
//! inputs always yield the same options.

use domain::{DisplayStep, RouteKind, RouteOption, TaxiEstimate, TransitItinerary, TransitSegment};

use super::jump_policy::JumpPolicy;

/// Outcome of one synthesis pass
#[derive(Debug, Clone, Default)]
pub struct SynthesisResult {
    /// Best transit-only option, present whenever at least one itinerary exists
    pub saver: Option<RouteOption>,
    /// Synthesized hybrid option, present when a candidate was eligible
    pub smart: Option<RouteOption>,
}

/// Derives SAVER and SMART options from provider data
#[derive(Debug, Clone, Default)]
pub struct SynthesisEngine {
    policy: JumpPolicy,
}

impl SynthesisEngine {
    /// Create an engine with the given jump policy
    #[must_use]
    pub const fn new(policy: JumpPolicy) -> Self {
        Self { policy }
    }

    /// The active jump policy
    #[must_use]
    pub const fn policy(&self) -> &JumpPolicy {
        &self.policy
    }

    /// Produce the SAVER and, when feasible, the SMART option
    ///
    /// SAVER always comes from the rank-0 itinerary. SMART scans the top
    /// candidates in provider order and takes the first one with a
    /// worthwhile lead-in; a missing taxi estimate, an ineligible lead-in
    /// on every candidate, or unpriceable candidate data all simply leave
    /// SMART out, never failing the pass.
    #[must_use]
    pub fn synthesize(
        &self,
        itineraries: &[TransitItinerary],
        taxi: Option<&TaxiEstimate>,
    ) -> SynthesisResult {
        let saver = itineraries.first().map(Self::build_saver);
        let smart = taxi.and_then(|estimate| {
            itineraries
                .iter()
                .take(self.policy.max_candidates)
                .find_map(|candidate| self.build_smart(candidate, estimate))
        });
        SynthesisResult { saver, smart }
    }

    /// Best transit-only option: rank-0 totals verbatim
    fn build_saver(itinerary: &TransitItinerary) -> RouteOption {
        let steps = convert_segments(&itinerary.segments, itinerary.total_fare);
        RouteOption::new(
            RouteKind::Saver,
            itinerary.total_duration_minutes,
            itinerary.total_fare,
            "최저가 이동",
            format!("환승 {}회", itinerary.combined_transfer_count()),
        )
        .with_steps(steps)
    }

    /// Try to synthesize a SMART option from one candidate
    ///
    /// `None` when the candidate has no anchor, its lead-in is too short,
    /// or its jump cannot be priced; the caller then moves on to the next
    /// candidate.
    fn build_smart(
        &self,
        itinerary: &TransitItinerary,
        taxi: &TaxiEstimate,
    ) -> Option<RouteOption> {
        let anchor = itinerary.anchor_index()?;
        let lead_in = itinerary.lead_in_minutes()?;
        if !self.policy.is_eligible_lead_in(lead_in) {
            return None;
        }

        let jump_duration = self.policy.jump_duration_minutes(lead_in);
        let jump_fare =
            self.policy
                .jump_fare(taxi.fare_amount, lead_in, itinerary.total_duration_minutes)?;

        // Remaining portion: anchor segment to the end, anchor inclusive.
        // The rider still pays the full transit fare for the shortened ride.
        let remaining = &itinerary.segments[anchor..];
        let mut transit_steps = convert_segments(remaining, itinerary.total_fare);
        if let Some(first) = transit_steps.first_mut() {
            *first = DisplayStep::transfer_hub(&remaining[0], first.fare_amount);
        }

        let remaining_minutes: u32 = remaining.iter().map(|s| s.duration_minutes).sum();
        let duration = jump_duration + remaining_minutes;
        let fare = jump_fare + itinerary.total_fare;

        let mut steps = Vec::with_capacity(transit_steps.len() + 1);
        steps.push(DisplayStep::taxi(jump_duration, jump_fare));
        steps.extend(transit_steps);

        let skipped_transfers = itinerary.combined_transfer_count().saturating_sub(1);
        let anchor_name = itinerary.segments[anchor].display_name();
        let mut option = RouteOption::new(
            RouteKind::Smart,
            duration,
            fare,
            format!("환승 {skipped_transfers}회 생략"),
            format!("택시({jump_duration}분) + {anchor_name}"),
        )
        .with_steps(steps);

        let saved = itinerary.total_duration_minutes.saturating_sub(duration);
        if saved > 0 {
            option = option.with_badge(format!("{saved}분 단축"));
        }

        Some(option)
    }
}

/// Convert segments to display steps with one-shot fare attribution
///
/// The itinerary's flat total fare goes to the first bus-or-subway step;
/// every later transit step rides on the same fare and walks always cost
/// 0. Implemented as a fold carrying an `assigned` flag.
fn convert_segments(segments: &[TransitSegment], total_fare: u32) -> Vec<DisplayStep> {
    let (steps, _) = segments.iter().fold(
        (Vec::with_capacity(segments.len()), false),
        |(mut steps, fare_assigned), segment| {
            let attribute_here = segment.mode.is_transit() && !fare_assigned;
            let fare = if attribute_here { total_fare } else { 0 };
            steps.push(DisplayStep::from_segment(segment, fare));
            (steps, fare_assigned || attribute_here)
        },
    );
    steps
}
