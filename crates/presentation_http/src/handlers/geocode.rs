//! Reverse geocoding handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::GeoLocation;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Reverse geocode query parameters
#[derive(Debug, Deserialize)]
pub struct ReverseGeocodeParams {
    pub latitude: f64,
    pub longitude: f64,
}

/// Reverse geocode response body
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    /// Human-readable address of the coordinate pair
    pub address: String,
}

/// Resolve a coordinate pair to an address
#[instrument(skip(state))]
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(params): Query<ReverseGeocodeParams>,
) -> Result<Json<AddressResponse>, ApiError> {
    let location = GeoLocation::new(params.latitude, params.longitude)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let address = state.geocoding.describe_location(&location).await?;

    address.map_or_else(
        || Err(ApiError::NotFound(format!("No address found at {location}"))),
        |address| Ok(Json(AddressResponse { address })),
    )
}
