//! API configuration

use std::path::PathBuf;

use serde::Deserialize;

use domain_claims::AssessmentConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// JSON array of claims loaded into the store at startup
    pub seed_path: Option<PathBuf>,
    /// Engine toggles and corpus policy
    pub assessment: AssessmentConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            seed_path: None,
            assessment: AssessmentConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Nested keys use a double underscore, e.g.
    /// `API_ASSESSMENT__SCORING_ENABLED=false`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("API")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
