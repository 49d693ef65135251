//! Resolver configuration.
//!
//! This configuration is designed to be easily serializable and loadable
//! from JSON or other formats while keeping complexity minimal.

use crate::error::{LocusError, Result};
use serde::{Deserialize, Serialize};

/// Geocoding resolver configuration.
///
/// The provider mode is chosen explicitly at construction time:
/// `api_key: Some(key)` selects the authenticated client, `None` the
/// default unauthenticated one.
///
/// # Example
///
/// ```rust
/// use locus::Config;
///
/// // Create default config
/// let config = Config::default();
///
/// // Load from JSON
/// let json = r#"{
///     "api_key": "secret",
///     "user_agent": "my-app/1.0"
/// }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.api_key.as_deref(), Some("secret"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provider API key (None selects the default unauthenticated mode)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Geocoding endpoint URL
    #[serde(default = "Config::default_endpoint")]
    pub endpoint: String,

    /// User-Agent header sent with geocoding requests
    #[serde(default = "Config::default_user_agent")]
    pub user_agent: String,
}

impl Config {
    fn default_endpoint() -> String {
        "https://maps.googleapis.com/maps/api/geocode/json".to_string()
    }

    fn default_user_agent() -> String {
        format!("locus/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Create a config using the authenticated provider mode.
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Override the geocoding endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(LocusError::InvalidInput(
                "geocoding endpoint must not be empty".to_string(),
            ));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(LocusError::InvalidInput(format!(
                "geocoding endpoint must be an http(s) URL, got {}",
                self.endpoint
            )));
        }

        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(LocusError::InvalidInput(
                "api_key must not be empty when present".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: Self::default_endpoint(),
            user_agent: Self::default_user_agent(),
        }
    }
}
