//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `synthesis`: hybrid route synthesis tuning
//!
//! Provider sections (`[tmap]`, `[odsay]`) reuse the integration crates'
//! own config types.

mod server;
mod synthesis;

use integration_odsay::OdsayConfig;
use integration_tmap::TmapConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;
pub use synthesis::SynthesisConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// TMap configuration (geocoding + taxi estimates)
    #[serde(default)]
    pub tmap: TmapConfig,

    /// ODSay configuration (transit itineraries)
    #[serde(default)]
    pub odsay: OdsayConfig,

    /// Hybrid synthesis tuning
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Precedence, lowest to highest: built-in defaults, a `config.toml`
    /// next to the binary, then `TRIPWEAVER_*` environment variables
    /// (e.g. `TRIPWEAVER_SERVER_PORT`, `TRIPWEAVER_TMAP_APP_KEY`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("TRIPWEAVER")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.tmap.validate().map_err(|e| format!("tmap: {e}"))?;
        self.odsay.validate().map_err(|e| format!("odsay: {e}"))?;
        self.synthesis
            .validate()
            .map_err(|e| format!("synthesis: {e}"))?;
        Ok(())
    }
}
