//! TMap API client
//!
//! Provides POI keyword search, reverse geocoding, and taxi route
//! estimation against the [TMap open API](https://apis.openapi.sk.com).

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use crate::config::TmapConfig;
use crate::error::TmapError;
use crate::models::{Poi, RouteEstimate};

/// Trait for TMap service clients
#[async_trait]
pub trait TmapClient: Send + Sync {
    /// Search for the best-matching POI for a keyword
    ///
    /// Returns `None` when the provider knows no matching place.
    async fn search_poi(&self, keyword: &str) -> Result<Option<Poi>, TmapError>;

    /// Estimate a taxi ride between two coordinate pairs
    ///
    /// Returns `None` when the provider has no route for the pair.
    async fn estimate_route(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<Option<RouteEstimate>, TmapError>;

    /// Reverse-geocode a point to a road address
    ///
    /// Returns `None` when the provider knows no address for the point.
    async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Option<String>, TmapError>;
}

/// TMap client backed by the SK open API platform
#[derive(Debug)]
pub struct TmapApiClient {
    client: Client,
    config: TmapConfig,
    poi_cache: Option<Cache<String, Poi>>,
}

impl TmapApiClient {
    /// Create a new TMap client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &TmapConfig) -> Result<Self, TmapError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("tripweaver/1.0")
            .build()
            .map_err(|e| TmapError::ConnectionFailed(e.to_string()))?;

        let poi_cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1024)
                .time_to_live(Duration::from_secs(u64::from(config.cache_ttl_minutes) * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            poi_cache,
        })
    }

    /// Map a reqwest send error into a typed client error
    fn send_error(&self, e: &reqwest::Error) -> TmapError {
        if e.is_timeout() {
            TmapError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            TmapError::ConnectionFailed(e.to_string())
        }
    }

    /// Apply the common status ladder: 429 is distinguished, other
    /// non-2xx are request failures
    fn check_status(response: Response) -> Result<Response, TmapError> {
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TmapError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(TmapError::RequestFailed(format!("HTTP {status}")));
        }

        Ok(response)
    }

    /// Parse the raw POI search response, taking the first entry with
    /// usable coordinates
    fn parse_poi_response(body: &str) -> Result<Option<Poi>, TmapError> {
        let raw: RawPoiResponse =
            serde_json::from_str(body).map_err(|e| TmapError::ParseError(e.to_string()))?;

        let pois = raw
            .search_poi_info
            .and_then(|info| info.pois)
            .and_then(|pois| pois.poi)
            .unwrap_or_default();

        Ok(pois.into_iter().find_map(convert_poi))
    }

    /// Parse the raw route response into an estimate
    fn parse_route_response(body: &str) -> Result<Option<RouteEstimate>, TmapError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| TmapError::ParseError(e.to_string()))?;

        let properties = raw
            .features
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|f| f.properties);

        Ok(properties.and_then(convert_estimate))
    }

    /// Parse the raw reverse-geocoding response into a full address
    fn parse_reverse_response(body: &str) -> Result<Option<String>, TmapError> {
        let raw: RawReverseResponse =
            serde_json::from_str(body).map_err(|e| TmapError::ParseError(e.to_string()))?;

        Ok(raw
            .address_info
            .and_then(|info| info.full_address)
            .filter(|addr| !addr.trim().is_empty()))
    }
}

#[async_trait]
impl TmapClient for TmapApiClient {
    #[instrument(skip(self))]
    async fn search_poi(&self, keyword: &str) -> Result<Option<Poi>, TmapError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(None);
        }

        if let Some(cache) = &self.poi_cache
            && let Some(hit) = cache.get(keyword).await
        {
            debug!(keyword, "POI cache hit");
            return Ok(Some(hit));
        }

        let url = format!("{}/tmap/pois", self.config.base_url);
        let params = [
            ("version", "1".to_string()),
            ("searchKeyword", keyword.to_string()),
            ("count", self.config.poi_count.to_string()),
        ];

        debug!(?url, keyword, "Searching POIs");

        let response = self
            .client
            .get(&url)
            .header("appKey", &self.config.app_key)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let response = Self::check_status(response)?;
        let body = response
            .text()
            .await
            .map_err(|e| TmapError::ParseError(e.to_string()))?;

        let poi = Self::parse_poi_response(&body)?;

        if let (Some(cache), Some(poi)) = (&self.poi_cache, &poi) {
            cache.insert(keyword.to_string(), poi.clone()).await;
        }

        debug!(found = poi.is_some(), "POI search complete");
        Ok(poi)
    }

    #[instrument(skip(self), fields(from = %format!("{from_lat},{from_lon}"), to = %format!("{to_lat},{to_lon}")))]
    async fn estimate_route(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<Option<RouteEstimate>, TmapError> {
        let url = format!("{}/tmap/routes?version=1", self.config.base_url);

        // Coordinates go over the wire as decimal strings
        let body = json!({
            "startX": from_lon.to_string(),
            "startY": from_lat.to_string(),
            "endX": to_lon.to_string(),
            "endY": to_lat.to_string(),
            "totalValue": 2,
        });

        debug!(?url, "Estimating taxi route");

        let response = self
            .client
            .post(&url)
            .header("appKey", &self.config.app_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let response = Self::check_status(response)?;
        let body = response
            .text()
            .await
            .map_err(|e| TmapError::ParseError(e.to_string()))?;

        let estimate = Self::parse_route_response(&body)?;
        debug!(found = estimate.is_some(), "Route estimate complete");
        Ok(estimate)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Option<String>, TmapError> {
        let url = format!("{}/tmap/geo/reversegeocoding", self.config.base_url);
        let params = [
            ("version", "1".to_string()),
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("coordType", "WGS84GEO".to_string()),
            ("addressType", "A10".to_string()),
        ];

        debug!(?url, "Reverse geocoding");

        let response = self
            .client
            .get(&url)
            .header("appKey", &self.config.app_key)
            .header("Accept", "application/json")
            .query(&params)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let response = Self::check_status(response)?;
        let body = response
            .text()
            .await
            .map_err(|e| TmapError::ParseError(e.to_string()))?;

        Self::parse_reverse_response(&body)
    }
}

/// Convert a raw POI entry, dropping entries with unusable coordinates
fn convert_poi(raw: RawPoi) -> Option<Poi> {
    let latitude: f64 = raw.noor_lat?.parse().ok()?;
    let longitude: f64 = raw.noor_lon?.parse().ok()?;
    Some(Poi {
        name: raw.name.unwrap_or_default(),
        latitude,
        longitude,
    })
}

/// Convert raw route properties, rounding seconds to whole minutes
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn convert_estimate(raw: RawRouteProperties) -> Option<RouteEstimate> {
    let total_time_secs = raw.total_time?;
    Some(RouteEstimate {
        duration_minutes: (total_time_secs / 60.0).round() as u32,
        fare_amount: raw.taxi_fare.unwrap_or(0.0).round() as u32,
        distance_meters: raw.total_distance.unwrap_or(0.0).round() as u32,
    })
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPoiResponse {
    search_poi_info: Option<RawSearchPoiInfo>,
}

#[derive(Debug, Deserialize)]
struct RawSearchPoiInfo {
    pois: Option<RawPois>,
}

#[derive(Debug, Deserialize)]
struct RawPois {
    poi: Option<Vec<RawPoi>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPoi {
    name: Option<String>,
    noor_lat: Option<String>,
    noor_lon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    features: Option<Vec<RawFeature>>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    properties: Option<RawRouteProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRouteProperties {
    total_time: Option<f64>,
    taxi_fare: Option<f64>,
    total_distance: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReverseResponse {
    address_info: Option<RawAddressInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAddressInfo {
    full_address: Option<String>,
}
