//! Application configuration
//!
//! Read from `config.toml` in the platform config directory; every key is
//! optional and falls back to the defaults below.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "DOCSHELF_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin; the document endpoint lives under `/api/documents`
    pub api_base_url: String,
    /// Quiet period before a typed search query is sent
    pub search_debounce_ms: u64,
    /// Pause between reloading the list and opening a newly created document
    pub detail_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            search_debounce_ms: 300,
            detail_delay_ms: 500,
        }
    }
}

impl AppConfig {
    /// Default config file location, `<config dir>/docshelf/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docshelf").join("config.toml"))
    }

    /// Load from the default location, then apply environment overrides
    pub fn load() -> anyhow::Result<Self> {
        Self::load_layered(
            Self::default_path().as_deref(),
            std::env::var(API_URL_ENV).ok(),
        )
    }

    /// Defaults, then the file at `path` if any, then the API URL override
    fn load_layered(path: Option<&Path>, api_url: Option<String>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        config.apply_env_override(api_url);
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn detail_delay(&self) -> Duration {
        Duration::from_millis(self.detail_delay_ms)
    }
}
