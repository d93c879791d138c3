//! Trip search handler

use axum::{Json, extract::State};
use domain::{GeoLocation, Place, RouteOption};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use application::PlaceQuery;

use crate::{error::ApiError, state::AppState};

/// Client-supplied coordinate pair, optionally already named
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatePayload {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Trip search request body
///
/// Each endpoint needs a free-text name or a coordinate pair; the name
/// wins when both are given.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSearchRequest {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub origin_coordinates: Option<CoordinatePayload>,
    #[serde(default)]
    pub destination_coordinates: Option<CoordinatePayload>,
}

/// One resolved endpoint in the response
#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Place> for PlaceResponse {
    fn from(place: &Place) -> Self {
        Self {
            name: place.name().to_string(),
            latitude: place.location().latitude(),
            longitude: place.location().longitude(),
        }
    }
}

/// Trip search response body
///
/// `options` is empty when no route could be produced; that is a valid
/// 200 response, not an error.
#[derive(Debug, Serialize)]
pub struct TripSearchResponse {
    pub origin: PlaceResponse,
    pub destination: PlaceResponse,
    pub options: Vec<RouteOption>,
}

/// Turn one endpoint's request fields into a place query
///
/// Rejected before any upstream call when neither a name nor a valid
/// coordinate pair is present.
fn to_place_query(
    field: &str,
    text: Option<String>,
    coordinates: Option<CoordinatePayload>,
) -> Result<PlaceQuery, ApiError> {
    if let Some(text) = text {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return Ok(PlaceQuery::text(trimmed));
        }
    }

    if let Some(payload) = coordinates {
        let location = GeoLocation::new(payload.latitude, payload.longitude)
            .map_err(|e| ApiError::BadRequest(format!("{field}: {e}")))?;
        return Ok(PlaceQuery::Coordinates {
            location,
            name: payload.name,
        });
    }

    Err(ApiError::BadRequest(format!(
        "{field} is required: provide a name or coordinates"
    )))
}

/// Handle a trip search request
#[instrument(skip(state, request))]
pub async fn search_trips(
    State(state): State<AppState>,
    Json(request): Json<TripSearchRequest>,
) -> Result<Json<TripSearchResponse>, ApiError> {
    let origin = to_place_query("origin", request.origin, request.origin_coordinates)?;
    let destination = to_place_query(
        "destination",
        request.destination,
        request.destination_coordinates,
    )?;

    let plan = state.trip_service.plan_trip(origin, destination).await?;

    Ok(Json(TripSearchResponse {
        origin: PlaceResponse::from(&plan.origin),
        destination: PlaceResponse::from(&plan.destination),
        options: plan.options,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_text_endpoints() {
        let json = r#"{"origin": "서울시청", "destination": "강남역"}"#;
        let request: TripSearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.origin.as_deref(), Some("서울시청"));
        assert_eq!(request.destination.as_deref(), Some("강남역"));
        assert!(request.origin_coordinates.is_none());
    }

    #[test]
    fn request_deserializes_camel_case_coordinates() {
        let json = r#"{
            "originCoordinates": {"latitude": 37.5663, "longitude": 126.9779, "name": "회사"},
            "destinationCoordinates": {"latitude": 37.4979, "longitude": 127.0276}
        }"#;
        let request: TripSearchRequest = serde_json::from_str(json).unwrap();
        let origin = request.origin_coordinates.unwrap();
        assert_eq!(origin.name.as_deref(), Some("회사"));
        assert!(request.destination_coordinates.unwrap().name.is_none());
    }

    #[test]
    fn text_wins_over_coordinates() {
        let query = to_place_query(
            "origin",
            Some("서울시청".to_string()),
            Some(CoordinatePayload {
                latitude: 37.5663,
                longitude: 126.9779,
                name: None,
            }),
        )
        .unwrap();
        assert_eq!(query, PlaceQuery::text("서울시청"));
    }

    #[test]
    fn blank_text_falls_back_to_coordinates() {
        let query = to_place_query(
            "origin",
            Some("   ".to_string()),
            Some(CoordinatePayload {
                latitude: 37.5663,
                longitude: 126.9779,
                name: Some("회사".to_string()),
            }),
        )
        .unwrap();
        assert!(matches!(query, PlaceQuery::Coordinates { name: Some(n), .. } if n == "회사"));
    }

    #[test]
    fn missing_endpoint_is_rejected() {
        let err = to_place_query("destination", None, None).unwrap_err();
        let ApiError::BadRequest(msg) = err else {
            unreachable!("Expected BadRequest");
        };
        assert!(msg.contains("destination"));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let err = to_place_query(
            "origin",
            None,
            Some(CoordinatePayload {
                latitude: 91.0,
                longitude: 126.9779,
                name: None,
            }),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn response_serializes_camel_case_options() {
        let response = TripSearchResponse {
            origin: PlaceResponse {
                name: "서울시청".to_string(),
                latitude: 37.5663,
                longitude: 126.9779,
            },
            destination: PlaceResponse {
                name: "강남역".to_string(),
                latitude: 37.4979,
                longitude: 127.0276,
            },
            options: vec![domain::RouteOption::new(
                domain::RouteKind::Vip,
                20,
                15000,
                "프라이빗하고 편안한 이동",
                "택시 이동 약 20분",
            )],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"kind\":\"vip\""));
        assert!(json.contains("\"durationMinutes\":20"));
        assert!(json.contains("\"fareAmount\":15000"));
    }
}
