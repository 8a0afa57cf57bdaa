//! Client configuration.
//!
//! Layered as defaults, then an optional TOML file, then environment
//! variables. The CLI applies its own flags last.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Default analysis service URL.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

pub const ENV_API_URL: &str = "PHISHNET_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "PHISHNET_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Scheme and host of the service, without a trailing slash.
    pub base_url: String,
    /// Request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// Ask the corpus to anonymize uploaded samples.
    pub anonymize: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
            anonymize: true,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> ClientResult<Self> {
        let mut config: Self =
            toml::from_str(s).map_err(|e| ClientError::Config(e.to_string()))?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> ClientResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.apply_env(|key| std::env::var(key).ok())?;
        debug!(base_url = %config.base_url, timeout_secs = ?config.timeout_secs, "Client configuration loaded");
        Ok(config)
    }

    /// Override fields from environment-style lookups.
    pub fn apply_env<F>(mut self, lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, secs))
            })?;
            self.timeout_secs = Some(secs);
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn http_client(&self) -> reqwest::Client {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build().unwrap_or_default()
    }
}
