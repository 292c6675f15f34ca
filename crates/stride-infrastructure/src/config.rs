//! Client configuration.
//!
//! Reads `~/.config/stride/config.toml` when present and honors the
//! `STRIDE_BASE_URL` environment override. A missing file is not an
//! error; a malformed one is.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use stride_core::{CoachError, Result};

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "STRIDE_BASE_URL";

/// On-disk configuration shape.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    base_url: Option<String>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the coach backend.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the config file and environment.
    ///
    /// Precedence: `STRIDE_BASE_URL` > config file > default.
    pub fn load() -> Result<Self> {
        let file = match config_path() {
            Ok(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                Some(toml::from_str(&content)?)
            }
            _ => None,
        };
        Ok(Self::resolve(file, std::env::var(BASE_URL_ENV).ok()))
    }

    fn resolve(file: Option<ConfigFile>, env_override: Option<String>) -> Self {
        let base_url = env_override
            .filter(|v| !v.trim().is_empty())
            .or(file.and_then(|f| f.base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

/// Returns the path to the configuration file: ~/.config/stride/config.toml
fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CoachError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("stride").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = ClientConfig::resolve(None, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn file_value_is_used_when_present() {
        let file: ConfigFile = toml::from_str("base_url = \"http://coach.local:9000\"").unwrap();
        let config = ClientConfig::resolve(Some(file), None);
        assert_eq!(config.base_url, "http://coach.local:9000");
    }

    #[test]
    fn env_override_wins_over_the_file() {
        let file: ConfigFile = toml::from_str("base_url = \"http://coach.local:9000\"").unwrap();
        let config = ClientConfig::resolve(Some(file), Some("http://staging:8080".to_string()));
        assert_eq!(config.base_url, "http://staging:8080");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let config = ClientConfig::resolve(None, Some("   ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn empty_file_falls_back_to_default() {
        let file: ConfigFile = toml::from_str("").unwrap();
        let config = ClientConfig::resolve(Some(file), None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
