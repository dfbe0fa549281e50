//! Configuration management for Corkboard.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// This is loaded from `~/.config/corkboard/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search defaults
    pub search: SearchConfig,
    /// HTTP client settings
    pub http: HttpConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `CORKBOARD_LOCATION`: Override the site base URL
    /// - `CORKBOARD_CATEGORY`: Override the default category code
    /// - `CORKBOARD_MAX_PAGES`: Override the crawl page limit
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        // Override from environment
        if let Ok(val) = std::env::var("CORKBOARD_LOCATION") {
            tracing::debug!("Override search.location from env: {}", val);
            config.search.location = val;
        }

        if let Ok(val) = std::env::var("CORKBOARD_CATEGORY") {
            tracing::debug!("Override search.category from env: {}", val);
            config.search.category = val;
        }

        if let Ok(val) = std::env::var("CORKBOARD_MAX_PAGES") {
            if let Ok(pages) = val.parse() {
                config.search.max_pages = Some(pages);
                tracing::debug!("Override search.max_pages from env: {}", pages);
            }
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/corkboard/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("dev", "corkboard", "corkboard").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Search defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Site base URL searches run against
    pub location: String,
    /// Category code used when none is given on the command line
    pub category: String,
    /// Crawl page limit; absent means follow pagination to the end
    pub max_pages: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            location: "https://portland.craigslist.org/".to_string(),
            category: "sss".to_string(),
            max_pages: None,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "Corkboard/0.1.0 (+https://github.com/corkboard-dev/corkboard)"
                .to_string(),
        }
    }
}
