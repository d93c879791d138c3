//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub tmap: ProviderStatus,
    pub odsay: ProviderStatus,
}

/// Status of an upstream provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub configured: bool,
}

/// Readiness check - are both providers configured?
///
/// Credentials are the only precondition checked here; provider
/// reachability is probed per request, not at readiness time.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let tmap_configured = state.config.tmap.has_credentials();
    let odsay_configured = state.config.odsay.has_credentials();

    let ready = tmap_configured && odsay_configured;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            tmap: ProviderStatus {
                configured: tmap_configured,
            },
            odsay: ProviderStatus {
                configured: odsay_configured,
            },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_returns_ok() {
        let response = health_check().await;
        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
    }

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.2.1".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("version"));
    }

    #[test]
    fn readiness_response_serialization() {
        let resp = ReadinessResponse {
            ready: false,
            tmap: ProviderStatus { configured: true },
            odsay: ProviderStatus { configured: false },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"ready\":false"));
        assert!(json.contains("tmap"));
        assert!(json.contains("odsay"));
    }

    #[test]
    fn readiness_response_deserialization() {
        let json = r#"{"ready":true,"tmap":{"configured":true},"odsay":{"configured":true}}"#;
        let resp: ReadinessResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ready);
        assert!(resp.tmap.configured);
        assert!(resp.odsay.configured);
    }
}
