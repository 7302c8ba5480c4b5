//! Configuration management for Userdesk

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST API (create/update/delete)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// URL of the GraphQL endpoint serving the user listing
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// UI tick interval in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// How long toasts stay on screen, in milliseconds
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_graphql_url() -> String {
    "http://localhost:5000/graphql".to_string()
}

const fn default_request_timeout() -> u64 {
    10_000
}

const fn default_poll_interval() -> u64 {
    100
}

const fn default_toast_duration() -> u64 {
    3_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            graphql_url: default_graphql_url(),
            request_timeout_ms: default_request_timeout(),
            poll_interval_ms: default_poll_interval(),
            toast_duration_ms: default_toast_duration(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to the defaults when
    /// the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("userdesk")
            .join("config.json")
    }
}
