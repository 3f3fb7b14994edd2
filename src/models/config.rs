//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Portal endpoints and navigation paths
    #[serde(default)]
    pub portal: PortalConfig,

    /// HTTP client behavior settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Loading animation settings
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.client.user_agent.trim().is_empty() {
            return Err(AppError::validation("client.user_agent is empty"));
        }
        if self.client.timeout_secs == 0 {
            return Err(AppError::validation("client.timeout_secs must be > 0"));
        }
        if self.animation.tick_ms == 0 {
            return Err(AppError::validation("animation.tick_ms must be > 0"));
        }
        if Url::parse(&self.portal.base_url).is_err() {
            return Err(AppError::validation(format!(
                "portal.base_url is not a valid URL: {}",
                self.portal.base_url
            )));
        }
        for (name, path) in [
            ("portal.aggregate_path", &self.portal.aggregate_path),
            ("portal.catalog_path", &self.portal.catalog_path),
            ("portal.logout_path", &self.portal.logout_path),
            ("portal.auth_path", &self.portal.auth_path),
            ("portal.search_path", &self.portal.search_path),
        ] {
            if !path.starts_with('/') {
                return Err(AppError::validation(format!("{name} must start with '/'")));
            }
        }
        Ok(())
    }
}

/// Portal endpoints and navigation paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the portal (endpoints are resolved against it)
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the external aggregate-count endpoint
    #[serde(default = "defaults::aggregate_path")]
    pub aggregate_path: String,

    /// Path of the local catalog listing endpoint
    #[serde(default = "defaults::catalog_path")]
    pub catalog_path: String,

    /// Path of the logout endpoint
    #[serde(default = "defaults::logout_path")]
    pub logout_path: String,

    /// Path users are redirected to after logout
    #[serde(default = "defaults::auth_path")]
    pub auth_path: String,

    /// Path prefix for search navigation targets
    #[serde(default = "defaults::search_path")]
    pub search_path: String,
}

impl PortalConfig {
    /// Parse the configured base URL.
    pub fn base(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Resolve a portal path against the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base()?.join(path)?)
    }

    /// Full URL of the aggregate-count endpoint.
    pub fn aggregate_url(&self) -> Result<Url> {
        self.resolve(&self.aggregate_path)
    }

    /// Full URL of the catalog listing endpoint.
    pub fn catalog_url(&self) -> Result<Url> {
        self.resolve(&self.catalog_path)
    }

    /// Full URL of the logout endpoint.
    pub fn logout_url(&self) -> Result<Url> {
        self.resolve(&self.logout_path)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            aggregate_path: defaults::aggregate_path(),
            catalog_path: defaults::catalog_path(),
            logout_path: defaults::logout_path(),
            auth_path: defaults::auth_path(),
            search_path: defaults::search_path(),
        }
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Loading animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Placeholder refresh period in milliseconds
    #[serde(default = "defaults::tick_ms")]
    pub tick_ms: u64,

    /// Whether the loading animation is shown at all
    #[serde(default = "defaults::animation_enabled")]
    pub enabled: bool,
}

impl AnimationConfig {
    /// Tick period as a `Duration`.
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: defaults::tick_ms(),
            enabled: defaults::animation_enabled(),
        }
    }
}

mod defaults {
    // Portal defaults
    pub fn base_url() -> String {
        "http://localhost:3000".into()
    }
    pub fn aggregate_path() -> String {
        "/api/doaj-stats".into()
    }
    pub fn catalog_path() -> String {
        "/api/journal".into()
    }
    pub fn logout_path() -> String {
        "/api/logout".into()
    }
    pub fn auth_path() -> String {
        "/auth".into()
    }
    pub fn search_path() -> String {
        "/search".into()
    }

    // Client defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; portico/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Animation defaults
    pub fn tick_ms() -> u64 {
        150
    }
    pub fn animation_enabled() -> bool {
        true
    }
}
