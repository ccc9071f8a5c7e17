//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Default schools API host used by the admin portal.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4001";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, without the `/api/...` path.
    pub api_base_url: String,
    /// How long the success screen stays up before navigating away.
    pub redirect_delay: Duration,
    /// Local storage snapshot holding the session token and group info.
    pub storage_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            redirect_delay: Duration::from_secs(2),
            storage_path: PathBuf::from("./data/session.json"),
        }
    }
}

impl ClientConfig {
    /// Build configuration from environment variables, falling back to defaults.
    ///
    /// - `CAMPUS_GRID_API_URL` — API base URL
    /// - `CAMPUS_GRID_REDIRECT_MS` — redirect delay in milliseconds
    /// - `CAMPUS_GRID_STORAGE` — path of the session storage snapshot
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = std::env::var("CAMPUS_GRID_API_URL")
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.api_base_url);
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "CAMPUS_GRID_API_URL".into(),
                message: format!("expected an http(s) URL, got '{api_base_url}'"),
            });
        }

        let redirect_delay = std::env::var("CAMPUS_GRID_REDIRECT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.redirect_delay);

        let storage_path = std::env::var("CAMPUS_GRID_STORAGE")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_path);

        Ok(Self {
            api_base_url,
            redirect_delay,
            storage_path,
        })
    }

    /// Full URL of the school-creation endpoint.
    pub fn schools_endpoint(&self) -> String {
        format!("{}/api/schools", self.api_base_url.trim_end_matches('/'))
    }
}
