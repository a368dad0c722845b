//! Settings file: image origin, storage location, history depth, log level

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::config::{APP_DIR, DEFAULT_ORIGIN, FILENAME};
use crate::constants::history::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::persistence::FileStore;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderSettings {
    /// Prefix for exported image `src` attributes
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Saved designs directory; defaults to the platform data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Used when `LOG_LEVEL` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            storage_dir: None,
            history_limit: default_history_limit(),
            log_level: default_log_level(),
        }
    }
}

impl BuilderSettings {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// Load from the default location, creating it with defaults if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Settings file not found, creating defaults");
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let mut settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings JSON from {:?}", path))?;
        settings.validate_and_clamp();

        info!(path = %path.display(), history_limit = settings.history_limit, "Loaded settings");
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json).with_context(|| format!("Failed to write settings to {:?}", path))?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    fn validate_and_clamp(&mut self) {
        if self.history_limit == 0 {
            warn!(history_limit = 0, using = 1, "history_limit below minimum, clamping");
            self.history_limit = 1;
        } else if self.history_limit > MAX_LIMIT {
            warn!(history_limit = self.history_limit, max = MAX_LIMIT, "history_limit exceeds maximum, clamping");
            self.history_limit = MAX_LIMIT;
        }

        let level = self.log_level.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            self.log_level = level;
        } else {
            warn!(log_level = %self.log_level, using = "info", "Unknown log_level, using default");
            self.log_level = default_log_level();
        }
    }

    /// Directory the design library stores its files in
    pub fn storage_root(&self) -> PathBuf {
        self.storage_dir.clone().unwrap_or_else(FileStore::default_root)
    }
}
