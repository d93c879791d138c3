//! Route option assembly
//!
//! Combines the synthesized SAVER and SMART options with the taxi-only
//! VIP option into the final presentation list. Options that could not
//! be produced are simply omitted; an empty list is a valid outcome the
//! caller reports as "no route available".

use domain::{DisplayStep, RouteKind, RouteOption, TaxiEstimate};

use super::synthesis_engine::SynthesisResult;

/// Assemble the final option list in presentation order: SAVER, SMART, VIP
///
/// VIP is derived from the taxi estimate alone; the synthesis result
/// contributes the two transit-based options. At most one option of each
/// kind is ever present.
#[must_use]
pub fn assemble_options(
    synthesis: SynthesisResult,
    taxi: Option<&TaxiEstimate>,
) -> Vec<RouteOption> {
    let vip = taxi.map(build_vip);
    [synthesis.saver, synthesis.smart, vip]
        .into_iter()
        .flatten()
        .collect()
}

/// Taxi-only option: one step spanning the whole trip
fn build_vip(taxi: &TaxiEstimate) -> RouteOption {
    RouteOption::new(
        RouteKind::Vip,
        taxi.duration_minutes,
        taxi.fare_amount,
        "프라이빗하고 편안한 이동",
        format!("택시 이동 약 {}분", taxi.duration_minutes),
    )
    .with_steps(vec![DisplayStep::taxi(
        taxi.duration_minutes,
        taxi.fare_amount,
    )])
}
