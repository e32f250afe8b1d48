// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration and on-disk state.
//!
//! Configuration is stored in `config.toml` under the config directory and
//! includes:
//! - `api_url`: base URL of the maintenance backend
//! - `timeout_secs`: per-request timeout
//! - `refresh_delay_ms`: delay before the post-report refresh
//!
//! The signed-in user is persisted as `session.json` in the state directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use fx_core::User;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "fixit";
const CONFIG_FILE_NAME: &str = "config.toml";
const SESSION_FILE_NAME: &str = "session.json";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend (e.g. "https://fix.example.com").
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Delay before the single refresh scheduled after a report, in milliseconds.
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_refresh_delay_ms() -> u64 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            refresh_delay_ms: default_refresh_delay_ms(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from `dir`, falling back to defaults when absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration and applies environment overrides.
    pub fn resolve() -> Result<Self> {
        let config = Config::load(&config_dir())?;
        Ok(config.with_api_url_override(env::api_url()))
    }

    /// Writes the configuration to `config.toml` in `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_url must start with http:// or https:// (got '{}')",
                self.api_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Directory holding `config.toml`.
///
/// `FIXIT_CONFIG_DIR`, else the platform config dir.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = env::config_dir() {
        return dir;
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Directory holding `session.json`.
///
/// Checks `FIXIT_STATE_DIR`, then `$XDG_STATE_HOME/fixit`, then the platform
/// state dir, falling back to `~/.local/state/fixit`.
pub fn state_dir() -> PathBuf {
    if let Some(dir) = env::state_dir() {
        return dir;
    }
    if let Some(xdg) = env::xdg_state_home() {
        return xdg.join(APP_DIR_NAME);
    }
    if let Some(dir) = dirs::state_dir() {
        return dir.join(APP_DIR_NAME);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".local")
        .join("state")
        .join(APP_DIR_NAME)
}

/// Path of the config file inside `dir`.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Persists the signed-in user.
pub fn save_session(dir: &Path, user: &User) -> Result<()> {
    fs::create_dir_all(dir)?;
    let content = serde_json::to_string_pretty(user)?;
    fs::write(dir.join(SESSION_FILE_NAME), content)?;
    Ok(())
}

/// Reads the persisted user, if any.
pub fn load_session(dir: &Path) -> Result<Option<User>> {
    let path = dir.join(SESSION_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Removes the persisted user. Returns true if one was stored.
pub fn clear_session(dir: &Path) -> Result<bool> {
    let path = dir.join(SESSION_FILE_NAME);
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    Ok(true)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
