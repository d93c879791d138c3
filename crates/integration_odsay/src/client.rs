//! ODSay API client
//!
//! Searches public transit paths between two coordinate pairs using the
//! [ODSay path search API](https://api.odsay.com).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::OdsayConfig;
use crate::error::OdsayError;
use crate::models::{LegKind, PathLeg, TransitPath};

/// Trait for ODSay service clients
#[async_trait]
pub trait OdsayClient: Send + Sync {
    /// Search transit paths between two coordinate pairs
    ///
    /// Returns paths in provider rank order. An empty vec is a valid
    /// "no path found" outcome, not an error.
    async fn search_paths(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<Vec<TransitPath>, OdsayError>;
}

/// ODSay client backed by the public HTTP API
#[derive(Debug)]
pub struct OdsayApiClient {
    client: Client,
    config: OdsayConfig,
}

impl OdsayApiClient {
    /// Create a new ODSay client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OdsayConfig) -> Result<Self, OdsayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("tripweaver/1.0")
            .build()
            .map_err(|e| OdsayError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw path search response into typed paths
    ///
    /// ODSay reports failures in-band as an `error` object with HTTP 200;
    /// that and a missing `result.path` both yield an empty list.
    fn parse_paths_response(body: &str) -> Result<Vec<TransitPath>, OdsayError> {
        let raw: RawPathResponse =
            serde_json::from_str(body).map_err(|e| OdsayError::ParseError(e.to_string()))?;

        if let Some(error) = raw.error {
            warn!(?error, "ODSay reported an in-band error");
            return Ok(Vec::new());
        }

        let paths = raw
            .result
            .and_then(|r| r.path)
            .unwrap_or_default()
            .into_iter()
            .filter_map(convert_path)
            .collect();

        Ok(paths)
    }
}

#[async_trait]
impl OdsayClient for OdsayApiClient {
    #[instrument(skip(self), fields(from = %format!("{from_lat},{from_lon}"), to = %format!("{to_lat},{to_lon}")))]
    async fn search_paths(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<Vec<TransitPath>, OdsayError> {
        let url = format!("{}/v1/api/searchPubTransPathT", self.config.base_url);

        // SX/EX are longitudes, SY/EY latitudes
        let params = [
            ("apiKey", self.config.api_key.clone()),
            ("SX", from_lon.to_string()),
            ("SY", from_lat.to_string()),
            ("EX", to_lon.to_string()),
            ("EY", to_lat.to_string()),
        ];

        debug!(?url, "Searching transit paths");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OdsayError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    OdsayError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OdsayError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(OdsayError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| OdsayError::ParseError(e.to_string()))?;

        let paths = Self::parse_paths_response(&body)?;

        if paths.is_empty() {
            warn!("No transit paths found");
        }

        debug!(count = paths.len(), "Transit paths found");
        Ok(paths)
    }
}

/// Convert a raw path, dropping paths without summary info
fn convert_path(raw: RawPath) -> Option<TransitPath> {
    let info = raw.info?;
    let legs = raw
        .sub_path
        .unwrap_or_default()
        .into_iter()
        .map(convert_leg)
        .collect();

    Some(TransitPath {
        legs,
        total_duration_minutes: info.total_time.unwrap_or(0),
        total_fare: info.payment.unwrap_or(0),
        bus_transfer_count: info.bus_transit_count.unwrap_or(0),
        subway_transfer_count: info.subway_transit_count.unwrap_or(0),
    })
}

/// Convert a raw sub-path into a typed leg
fn convert_leg(raw: RawSubPath) -> PathLeg {
    let kind = LegKind::from_traffic_type(raw.traffic_type.unwrap_or(0));
    let line_name = raw
        .lane
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|lane| lane.bus_no.or(lane.name));

    PathLeg {
        kind,
        duration_minutes: raw.section_time.unwrap_or(0),
        station_count: raw.station_count.unwrap_or(0),
        start_name: raw.start_name,
        line_name,
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawPathResponse {
    result: Option<RawResult>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    path: Option<Vec<RawPath>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPath {
    info: Option<RawPathInfo>,
    sub_path: Option<Vec<RawSubPath>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPathInfo {
    total_time: Option<u32>,
    payment: Option<u32>,
    bus_transit_count: Option<u32>,
    subway_transit_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubPath {
    traffic_type: Option<u32>,
    section_time: Option<u32>,
    station_count: Option<u32>,
    start_name: Option<String>,
    lane: Option<Vec<RawLane>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLane {
    name: Option<String>,
    bus_no: Option<String>,
}
