use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json";

/// Environment variable overriding `api_key`
pub const ENV_API_KEY: &str = "RECIPE_TUI_API_KEY";
/// Environment variable overriding `api_base_url`
pub const ENV_API_BASE_URL: &str = "RECIPE_TUI_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Access token for the latest and random-selection endpoints
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout; requests wait indefinitely when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".recipe-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, falling back to defaults when it doesn't exist
    pub fn load() -> Result<Config, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoHomeDir)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides
    pub fn with_env(self) -> Config {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup; blank values are ignored
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Config {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = value(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = value(ENV_API_BASE_URL) {
            self.api_base_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Save the config to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_dir = Self::config_dir().ok_or(ConfigError::NoHomeDir)?;
        self.save_to(&config_dir.join("config.json"))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
