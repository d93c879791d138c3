//! HTTP route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/v1/trips/search", post(handlers::trips::search_trips))
        .route("/v1/geocode/reverse", get(handlers::geocode::reverse_geocode))
        .with_state(state)
}
