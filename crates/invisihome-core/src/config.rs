//! Application configuration management.
//!
//! Configuration is read from `~/.config/invisihome/config.json` (or the
//! platform equivalent). A missing file means defaults. Environment
//! variables override individual fields after the file is read.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "invisihome";

/// Config file name
const CONFIG_FILE: &str = "config.json";

const DEFAULT_AUTH_DELAY_MS: u64 = 1000;
const DEFAULT_PROCESSING_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated round-trip for login and signup
    pub auth_delay_ms: u64,
    /// Simulated model run time
    pub processing_delay_ms: u64,
    /// Where exported CSV files go; current directory when unset
    pub export_dir: Option<PathBuf>,
    /// Pre-filled email on the login form, updated after each sign-in
    pub last_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_delay_ms: DEFAULT_AUTH_DELAY_MS,
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            export_dir: None,
            last_email: None,
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::path()?)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Record `email` as the pre-filled login email in the file at `path`.
    ///
    /// Only `last_email` changes. The file is re-read first so environment
    /// overrides applied to the running config never end up on disk.
    pub fn remember_email(path: &Path, email: &str) -> Result<()> {
        let mut on_disk = Self::load_from(path)?;
        on_disk.last_email = Some(email.to_string());
        on_disk.save_to(path)
    }

    /// Apply `INVISIHOME_*` overrides using the given lookup.
    /// Unparseable numbers are ignored with a warning.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("INVISIHOME_AUTH_DELAY_MS") {
            match value.trim().parse() {
                Ok(ms) => self.auth_delay_ms = ms,
                Err(_) => warn!(value = %value, "Ignoring invalid INVISIHOME_AUTH_DELAY_MS"),
            }
        }
        if let Some(value) = lookup("INVISIHOME_PROCESSING_DELAY_MS") {
            match value.trim().parse() {
                Ok(ms) => self.processing_delay_ms = ms,
                Err(_) => warn!(value = %value, "Ignoring invalid INVISIHOME_PROCESSING_DELAY_MS"),
            }
        }
        if let Some(dir) = lookup("INVISIHOME_EXPORT_DIR").filter(|d| !d.is_empty()) {
            self.export_dir = Some(PathBuf::from(dir));
        }
        if let Some(email) = lookup("INVISIHOME_EMAIL").filter(|e| !e.is_empty()) {
            self.last_email = Some(email);
        }
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Default config file location
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for log files
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}
