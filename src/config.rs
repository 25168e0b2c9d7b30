//! Configuration loading
//!
//! Settings live in `~/.config/moji/config.toml`. A missing or unreadable
//! file yields the defaults, and every loaded config is clamped to usable
//! ranges before use.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MojiResult;
use crate::services::catalog::Platform;
use crate::services::images::ImageSource;
use crate::services::search_index::SearchOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub images: ImageSource,
    pub search: SearchOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Only emoji with artwork for this platform are indexed
    pub platform: Platform,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("moji")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match Self::read(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    /// Strict read, surfacing IO and parse errors
    pub fn read(path: &Path) -> MojiResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and clamp; an uncompilable separator pattern is an error here
    pub fn from_toml(content: &str) -> MojiResult<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.validate();
        config.search.separator_regex()?;
        Ok(config)
    }

    /// Validate and clamp config values to acceptable ranges
    pub fn validate(&mut self) {
        self.search.validate();
        self.images.validate();
    }

    /// Save config to the default path
    pub fn save(&self) -> MojiResult<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> MojiResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}
