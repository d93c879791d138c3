//! User-facing route options
//!
//! A [`RouteOption`] is one priced and timed way to make the trip. At
//! most three are produced per request: SAVER (cheapest transit-only),
//! SMART (taxi jump + remaining transit), VIP (taxi-only). Options are
//! constructed fresh per request and never persisted server-side.

use serde::{Deserialize, Serialize};

use super::transit::{SegmentMode, TransitSegment};

/// Fallback label for a transfer hub the provider left unnamed
const UNNAMED_TRANSFER_HUB: &str = "환승 정류장";

/// The three route option kinds, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Saver,
    Smart,
    Vip,
}

impl RouteKind {
    /// Short product label shown on the option card
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Saver => "Saver",
            Self::Smart => "Smart",
            Self::Vip => "VIP",
        }
    }

    /// Personality tag shown next to the label
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Saver => "지갑 수호자",
            Self::Smart => "가성비 전술가",
            Self::Vip => "리치 모드",
        }
    }
}

/// Travel mode of one displayed step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StepMode {
    Walk,
    Bus,
    Subway,
    Taxi,
}

impl From<SegmentMode> for StepMode {
    fn from(mode: SegmentMode) -> Self {
        match mode {
            SegmentMode::Walk => Self::Walk,
            SegmentMode::Bus => Self::Bus,
            SegmentMode::Subway => Self::Subway,
        }
    }
}

/// One leg of a route option as shown to the rider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStep {
    pub mode: StepMode,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    /// Fare attributed to this step; the itinerary total is attributed to
    /// exactly one transit step, every other step carries 0
    pub fare_amount: u32,
    /// Marks the stop where a SMART rider leaves the taxi and boards transit
    pub is_transfer_hub: bool,
}

impl DisplayStep {
    /// Build a step from a transit segment with an attributed fare
    #[must_use]
    pub fn from_segment(segment: &TransitSegment, fare_amount: u32) -> Self {
        Self {
            mode: segment.mode.into(),
            name: segment.display_name(),
            description: segment.display_description(),
            duration_minutes: segment.duration_minutes,
            fare_amount,
            is_transfer_hub: false,
        }
    }

    /// Build a taxi step (the SMART jump or the whole VIP ride)
    #[must_use]
    pub fn taxi(duration_minutes: u32, fare_amount: u32) -> Self {
        Self {
            mode: StepMode::Taxi,
            name: "택시로 이동".to_string(),
            description: format!("약 {duration_minutes}분 소요"),
            duration_minutes,
            fare_amount,
            is_transfer_hub: false,
        }
    }

    /// Build the transfer-hub step from the anchor segment
    ///
    /// Named after the station where the rider leaves the taxi; the line
    /// being boarded moves into the description.
    #[must_use]
    pub fn transfer_hub(segment: &TransitSegment, fare_amount: u32) -> Self {
        let name = segment
            .start_station
            .clone()
            .unwrap_or_else(|| UNNAMED_TRANSFER_HUB.to_string());
        Self {
            mode: segment.mode.into(),
            name,
            description: format!("{} 탑승", segment.display_name()),
            duration_minutes: segment.duration_minutes,
            fare_amount,
            is_transfer_hub: true,
        }
    }
}

/// One priced and timed route option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    pub kind: RouteKind,
    pub label: String,
    pub tag: String,
    /// Time-saved callout, present only when there is time to save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub duration_minutes: u32,
    pub fare_amount: u32,
    pub summary: String,
    pub detail: String,
    pub steps: Vec<DisplayStep>,
}

impl RouteOption {
    /// Create an option of the given kind with its fixed label and tag
    #[must_use]
    pub fn new(
        kind: RouteKind,
        duration_minutes: u32,
        fare_amount: u32,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            tag: kind.tag().to_string(),
            badge: None,
            duration_minutes,
            fare_amount,
            summary: summary.into(),
            detail: detail.into(),
            steps: Vec::new(),
        }
    }

    /// Attach a badge
    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Attach the step breakdown
    #[must_use]
    pub fn with_steps(mut self, steps: Vec<DisplayStep>) -> Self {
        self.steps = steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subway_segment() -> TransitSegment {
        TransitSegment {
            mode: SegmentMode::Subway,
            line_name: Some("2호선".to_string()),
            start_station: Some("강남역".to_string()),
            station_count: 6,
            duration_minutes: 20,
        }
    }

    #[test]
    fn kinds_have_fixed_labels_and_tags() {
        assert_eq!(RouteKind::Saver.label(), "Saver");
        assert_eq!(RouteKind::Saver.tag(), "지갑 수호자");
        assert_eq!(RouteKind::Smart.label(), "Smart");
        assert_eq!(RouteKind::Smart.tag(), "가성비 전술가");
        assert_eq!(RouteKind::Vip.label(), "VIP");
        assert_eq!(RouteKind::Vip.tag(), "리치 모드");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&RouteKind::Saver).expect("serialize");
        assert_eq!(json, "\"saver\"");
    }

    #[test]
    fn step_mode_converts_from_segment_mode() {
        assert_eq!(StepMode::from(SegmentMode::Walk), StepMode::Walk);
        assert_eq!(StepMode::from(SegmentMode::Bus), StepMode::Bus);
        assert_eq!(StepMode::from(SegmentMode::Subway), StepMode::Subway);
    }

    #[test]
    fn from_segment_carries_display_texts_and_fare() {
        let step = DisplayStep::from_segment(&subway_segment(), 1500);
        assert_eq!(step.mode, StepMode::Subway);
        assert_eq!(step.name, "2호선");
        assert_eq!(step.description, "6개 역 이동");
        assert_eq!(step.duration_minutes, 20);
        assert_eq!(step.fare_amount, 1500);
        assert!(!step.is_transfer_hub);
    }

    #[test]
    fn taxi_step_has_fixed_name_and_duration_description() {
        let step = DisplayStep::taxi(16, 11333);
        assert_eq!(step.mode, StepMode::Taxi);
        assert_eq!(step.name, "택시로 이동");
        assert_eq!(step.description, "약 16분 소요");
        assert_eq!(step.fare_amount, 11333);
        assert!(!step.is_transfer_hub);
    }

    #[test]
    fn transfer_hub_is_named_after_the_start_station() {
        let step = DisplayStep::transfer_hub(&subway_segment(), 1500);
        assert_eq!(step.name, "강남역");
        assert_eq!(step.description, "2호선 탑승");
        assert!(step.is_transfer_hub);
        assert_eq!(step.fare_amount, 1500);
    }

    #[test]
    fn transfer_hub_falls_back_when_station_is_unnamed() {
        let segment = TransitSegment {
            start_station: None,
            ..subway_segment()
        };
        let step = DisplayStep::transfer_hub(&segment, 0);
        assert_eq!(step.name, "환승 정류장");
    }

    #[test]
    fn new_option_derives_label_and_tag_from_kind() {
        let option = RouteOption::new(RouteKind::Vip, 20, 15000, "프라이빗하고 편안한 이동", "택시 이동 약 20분");
        assert_eq!(option.label, "VIP");
        assert_eq!(option.tag, "리치 모드");
        assert!(option.badge.is_none());
        assert!(option.steps.is_empty());
    }

    #[test]
    fn with_badge_and_steps_attach_fields() {
        let option = RouteOption::new(RouteKind::Smart, 36, 12833, "환승 1회 생략", "택시(16분) + 2호선")
            .with_badge("9분 단축")
            .with_steps(vec![DisplayStep::taxi(16, 11333)]);
        assert_eq!(option.badge.as_deref(), Some("9분 단축"));
        assert_eq!(option.steps.len(), 1);
    }

    #[test]
    fn badge_is_omitted_from_json_when_absent() {
        let option = RouteOption::new(RouteKind::Saver, 45, 1500, "최저가 이동", "환승 2회");
        let json = serde_json::to_string(&option).expect("serialize");
        assert!(!json.contains("badge"));
        assert!(json.contains("\"kind\":\"saver\""));
        assert!(json.contains("\"durationMinutes\":45"));
    }

    #[test]
    fn steps_serialize_camel_case() {
        let step = DisplayStep::taxi(10, 5000);
        let json = serde_json::to_string(&step).expect("serialize");
        assert!(json.contains("\"mode\":\"TAXI\""));
        assert!(json.contains("\"isTransferHub\":false"));
        assert!(json.contains("\"fareAmount\":5000"));
    }
}
