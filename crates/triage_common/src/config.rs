//! Triage configuration.
//!
//! Configuration lives in /etc/triage/config.toml, with a per-user file
//! taking precedence and `$TRIAGE_API_ENDPOINT` winning over both.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// System configuration directory
pub const SYSTEM_CONFIG_DIR: &str = "/etc/triage";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Diagnostics API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the diagnostics service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.triagehub.io/rs".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration with the discovery chain, then apply env overrides.
    ///
    /// A missing or malformed file falls back to defaults; configuration
    /// problems must never abort a diagnose invocation.
    pub fn load() -> Self {
        let mut config = Self::load_file().unwrap_or_default();
        if let Ok(endpoint) = std::env::var("TRIAGE_API_ENDPOINT") {
            config.api.endpoint = endpoint;
        }
        config
    }

    fn load_file() -> Option<Self> {
        let path = Self::discover_config_path()?;
        let raw = fs::read_to_string(&path).ok()?;
        match toml::from_str(&raw) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config file");
                None
            }
        }
    }

    /// Discover config file path with fallback chain
    ///
    /// Priority:
    /// 1. $TRIAGE_CONFIG environment variable (explicit override)
    /// 2. $XDG_CONFIG_HOME/triage/config.toml (or ~/.config/triage/config.toml)
    /// 3. /etc/triage/config.toml
    fn discover_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("TRIAGE_CONFIG") {
            return Some(PathBuf::from(path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("triage").join(CONFIG_FILE);
            if user_path.exists() {
                return Some(user_path);
            }
        }

        let system_path = PathBuf::from(SYSTEM_CONFIG_DIR).join(CONFIG_FILE);
        if system_path.exists() {
            return Some(system_path);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let config = Config::default();
        assert_eq!(config.api.endpoint, "https://api.triagehub.io/rs");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.endpoint, default_endpoint());
        assert_eq!(config.api.timeout_secs, default_timeout());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let config: Config =
            toml::from_str("[api]\nendpoint = \"http://localhost:8089/rs\"\n").unwrap();
        assert_eq!(config.api.endpoint, "http://localhost:8089/rs");
        assert_eq!(config.api.timeout_secs, 30);
    }
}
