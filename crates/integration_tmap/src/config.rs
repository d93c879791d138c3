//! TMap service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the TMap open API (SK open API platform)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmapConfig {
    /// Base URL for the TMap API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API credential, sent as the `appKey` request header
    #[serde(default)]
    pub app_key: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of POI candidates to request per keyword search
    #[serde(default = "default_poi_count")]
    pub poi_count: u8,

    /// POI cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,
}

fn default_base_url() -> String {
    "https://apis.openapi.sk.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_poi_count() -> u8 {
    1
}

const fn default_cache_ttl_minutes() -> u32 {
    5
}

impl Default for TmapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_key: String::new(),
            timeout_secs: default_timeout_secs(),
            poi_count: default_poi_count(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl TmapConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            app_key: "test-key".to_string(),
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Check if POI caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Check if an API credential is configured
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.app_key.trim().is_empty()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.poi_count == 0 {
            return Err("poi_count must be greater than 0".to_string());
        }

        if self.poi_count > 20 {
            return Err("poi_count must be 20 or less".to_string());
        }

        Ok(())
    }
}
