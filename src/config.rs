//! Explorer configuration.
//!
//! Values are layered: built-in defaults, then the optional JSON file at
//! `<config_dir>/pixora/config.json`, then `PIXORA_*` environment variables.
//! Command-line flags are applied last by the binary through the `with_*`
//! builder methods.
//!
//! # Example
//!
//! ```ignore
//! use pixora::config::ExplorerConfig;
//!
//! let config = ExplorerConfig::load()?
//!     .with_api_base_url("http://photos.local:8000");
//! ```

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URL;

pub const APP_DIR: &str = "pixora";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "pixora.log";

pub const ENV_API_URL: &str = "PIXORA_API_URL";
pub const ENV_ASSET_URL: &str = "PIXORA_ASSET_URL";
pub const ENV_LOG: &str = "PIXORA_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Base URL of the image API
    pub api_base_url: String,
    /// Base URL for relative image locators; the API base when unset
    pub asset_base_url: Option<String>,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// `tracing` filter directive for the log file
    pub log_filter: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            asset_base_url: None,
            request_timeout_secs: 30,
            log_filter: "info".to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_base_url = Some(url.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Base URL that relative locators are joined onto.
    pub fn asset_base(&self) -> &str {
        self.asset_base_url.as_deref().unwrap_or(&self.api_base_url)
    }

    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Default location of the log file.
    pub fn log_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join(LOG_FILE)
    }

    /// Load the file at the default path (if any) and apply the environment.
    pub fn load() -> Result<Self> {
        let config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.apply_env())
    }

    /// Load from `path`. A missing file yields the defaults; a malformed one
    /// is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .wrap_err_with(|| format!("failed to parse config file {}", path.display()))
    }

    /// Override fields from the `PIXORA_*` environment variables.
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable lookup. Empty values are
    /// ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(url) = get(ENV_ASSET_URL) {
            self.asset_base_url = Some(url);
        }
        if let Some(filter) = get(ENV_LOG) {
            self.log_filter = filter;
        }
        self
    }
}
