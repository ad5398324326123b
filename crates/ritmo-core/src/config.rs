use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

const DEFAULT_INTERVAL_SECONDS: u64 = 20 * 60;
const DEFAULT_MESSAGE: &str = "Time to take a break. Look away from the screen.";
const DEFAULT_CONFIRM_WORD: &str = "ok";

/// Get the configuration directory for ritmo.
///
/// # Errors
///
/// Returns an error if the platform config directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf> {
    let mut path =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Failed to get config dir"))?;
    path.push("ritmo");
    Ok(path)
}

/// Settings for the break reminder loop.
///
/// Loaded from `<config_dir>/ritmo/config.toml` when present; every field
/// falls back to its default when missing, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Seconds between reminders.
    pub interval_seconds: u64,
    /// Message shown on each reminder.
    pub message: String,
    /// Word the user must type to dismiss a reminder.
    pub confirm_word: String,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
            message: DEFAULT_MESSAGE.to_string(),
            confirm_word: DEFAULT_CONFIRM_WORD.to_string(),
        }
    }
}

impl ReminderConfig {
    /// Load the config from the default location, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = get_config_dir()?.join("config.toml");
        Self::load_from(&path)
    }

    /// Load the config from an explicit path, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Interval between reminders as a [`Duration`].
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}
