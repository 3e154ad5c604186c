//! BaristaMsg configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::MessageError;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace prepended to every template name, e.g. `acme`
    #[serde(rename = "service-instance-prefix")]
    pub service_instance_prefix: String,

    /// Log level for the `bm` binary
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Content API configuration
    pub content: ContentConfig,
}

impl Config {
    /// Load configuration with fallback chain, then apply environment overrides
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::load_file(config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Read only the log level, without logging
    ///
    /// Runs before the subscriber is installed so the full [`Config::load`]
    /// can report fallback problems. Follows the same chain and returns the
    /// level of the first file that parses.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::candidate_paths(config_path)
            .into_iter()
            .filter(|path| path.exists())
            .find_map(|path| {
                let content = fs::read_to_string(&path).ok()?;
                serde_yaml::from_str::<Self>(&content).ok()
            })
            .and_then(|config| config.log_level)
    }

    /// Config files in priority order: explicit path, or project-local then user config
    fn candidate_paths(config_path: Option<&PathBuf>) -> Vec<PathBuf> {
        if let Some(path) = config_path {
            return vec![path.clone()];
        }

        let mut paths = vec![PathBuf::from("baristamsg.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("baristamsg").join("baristamsg.yml"));
        }
        paths
    }

    fn load_file(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config, then ~/.config/baristamsg/baristamsg.yml
        for path in Self::candidate_paths(None) {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Let `SERVICE_INSTANCE_PREFIX` override the configured prefix
    pub fn apply_env_overrides(&mut self) {
        if let Ok(prefix) = std::env::var(crate::PREFIX_ENV) {
            debug!(%prefix, "apply_env_overrides: prefix from environment");
            self.service_instance_prefix = prefix;
        }
    }
}

/// Content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Environment variable containing the API key (basic auth user)
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// Environment variable containing the API secret (basic auth password)
    #[serde(rename = "api-secret-env")]
    pub api_secret_env: String,

    /// Request timeout in milliseconds; unset waits indefinitely
    #[serde(rename = "timeout-ms", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_CONTENT_BASE_URL.to_string(),
            api_key_env: "TWILIO_API_KEY".to_string(),
            api_secret_env: "TWILIO_API_SECRET".to_string(),
            timeout_ms: None,
        }
    }
}

impl ContentConfig {
    /// Read the `(key, secret)` credential pair from the environment
    pub fn credentials(&self) -> Result<(String, String), MessageError> {
        let key = read_env(&self.api_key_env)?;
        let secret = read_env(&self.api_secret_env)?;
        Ok((key, secret))
    }
}

fn read_env(name: &str) -> Result<String, MessageError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => {
            debug!(%name, "read_env: not set");
            Err(MessageError::Config(format!(
                "Content API credential not found. Set the {} environment variable.",
                name
            )))
        }
    }
}
