use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::holding::Holding;

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
pub const DEFAULT_LOGO_BASE_URL: &str =
    "https://static2.finnhub.io/file/publicdatany/finnhubimage/stock_logo";
pub const DEFAULT_PLACEHOLDER_LOGO_URL: &str = "https://via.placeholder.com";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub logo_base_url: String,
    pub placeholder_logo_url: String,
    pub timeout_secs: u64,
    pub retries: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            logo_base_url: DEFAULT_LOGO_BASE_URL.to_string(),
            placeholder_logo_url: DEFAULT_PLACEHOLDER_LOGO_URL.to_string(),
            timeout_secs: 10,
            retries: 0,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    pub quote_ttl_secs: u64,
    pub symbol_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            quote_ttl_secs: 5 * 60,
            symbol_ttl_secs: 24 * 60 * 60,
        }
    }
}

impl CacheConfig {
    pub fn quote_ttl(&self) -> Duration {
        Duration::from_secs(self.quote_ttl_secs)
    }

    pub fn symbol_ttl(&self) -> Duration {
        Duration::from_secs(self.symbol_ttl_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub holdings: Vec<Holding>,
}

impl AppConfig {
    /// Loads the default config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        debug!("No config at {}, using defaults", config_path.display());
        Ok(Self::default().with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "quotedesk", "quotedesk")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Applies `FINNHUB_*` and `PLACEHOLDER_LOGO_URL` variables over the file values.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("FINNHUB_API_KEY") {
            self.provider.api_key = key;
        }
        if let Some(url) = non_empty("FINNHUB_BASE_URL") {
            self.provider.base_url = url;
        }
        if let Some(url) = non_empty("FINNHUB_LOGO_BASE_URL") {
            self.provider.logo_base_url = url;
        }
        if let Some(url) = non_empty("PLACEHOLDER_LOGO_URL") {
            self.provider.placeholder_logo_url = url;
        }
        self
    }
}
