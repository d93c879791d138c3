//! ODSay service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the ODSay public transit API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdsayConfig {
    /// Base URL for the ODSay API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API credential, sent as the `apiKey` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.odsay.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for OdsayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OdsayConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Check if an API credential is configured
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty()
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

        Ok(())
    }
}
