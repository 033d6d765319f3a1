//! Settings structures for the Guides searcher

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub upstream: UpstreamSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    ///
    /// The upstream variables keep the names the service has always used
    /// (`LIBAPPS_BASE`, `SITE_ID`, ...); server tuning uses a `GUIDES_`
    /// prefix. Environment values win over file values.
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("GUIDES_DEBUG") {
            self.server.debug = is_truthy(&val);
        }
        if let Ok(val) = std::env::var("GUIDES_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("GUIDES_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("GUIDES_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
        if let Ok(val) = std::env::var("LIBAPPS_BASE") {
            self.upstream.base_url = val;
        }
        if let Ok(val) = std::env::var("SITE_ID") {
            self.upstream.site_id = val;
        }
        if let Ok(val) = std::env::var("GUIDES_API_KEY") {
            self.upstream.api_key = val;
        }
        if let Ok(val) = std::env::var("NO_RESULTS_URL") {
            self.upstream.no_results_url = val;
        }
        if let Ok(val) = std::env::var("MODULE_URL") {
            self.upstream.module_url = val;
        }
    }

    /// Check that every required upstream value is present and usable
    ///
    /// The process must not come up without them; this is the only fatal
    /// configuration failure.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("LIBAPPS_BASE", &self.upstream.base_url),
            ("SITE_ID", &self.upstream.site_id),
            ("GUIDES_API_KEY", &self.upstream.api_key),
            ("NO_RESULTS_URL", &self.upstream.no_results_url),
            ("MODULE_URL", &self.upstream.module_url),
        ];

        for (name, value) in required {
            if value.is_empty() {
                anyhow::bail!("Missing environment variable: {}", name);
            }
        }

        Url::parse(&self.upstream.base_url).with_context(|| {
            format!("LIBAPPS_BASE is not a valid URL: {}", self.upstream.base_url)
        })?;

        Ok(())
    }
}

fn is_truthy(val: &str) -> bool {
    !val.is_empty() && val != "0" && !val.eq_ignore_ascii_case("false")
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Enable debug logging
    pub debug: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "0.0.0.0".to_string(),
            debug: false,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Upstream request timeout in seconds
    pub request_timeout: f64,
    /// Pool max size
    pub pool_maxsize: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
        }
    }
}

/// Upstream Guides API settings
///
/// All fields are required at startup; see [`Settings::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Base URL of the Guides search endpoint
    pub base_url: String,
    /// Site identifier sent with every search
    pub site_id: String,
    /// API key sent with every search
    pub api_key: String,
    /// Redirect hint returned when a search matches nothing
    pub no_results_url: String,
    /// Base URL the module link is built from
    pub module_url: String,
}
