//! Configuration management
//!
//! Settings live in `settings.json` inside the roster directory:
//! ```json
//! {
//!   "app": { "userCount": 100, "seed": 42, "unemployedLabel": "Unemployed" }
//! }
//! ```
//! Fields this crate does not know about are kept when saving.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::result::{Error, Result};
use crate::services::DEFAULT_UNEMPLOYED_LABEL;

/// Number of users generated when nothing else is configured
pub const DEFAULT_USER_COUNT: usize = 100;

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unemployed_label: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Roster configuration (resolved view of settings and environment)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub user_count: usize,
    pub seed: Option<u64>,
    pub unemployed_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            seed: None,
            unemployed_label: DEFAULT_UNEMPLOYED_LABEL.to_string(),
        }
    }
}

impl Config {
    /// Load config from the roster directory
    ///
    /// A missing file yields defaults. `ROSTER_USER_COUNT` and `ROSTER_SEED`
    /// override the file.
    pub fn load(roster_dir: &Path) -> Result<Self> {
        let raw = read_settings(roster_dir)?;
        let mut config = Self::default();

        if let Some(count) = raw.app.user_count {
            config.user_count = count;
        }
        config.seed = raw.app.seed;
        if let Some(label) = raw.app.unemployed_label.filter(|l| !l.trim().is_empty()) {
            config.unemployed_label = label;
        }

        if let Ok(value) = std::env::var("ROSTER_USER_COUNT") {
            config.user_count = value.trim().parse().map_err(|_| {
                Error::config(format!(
                    "ROSTER_USER_COUNT must be a non-negative integer, got '{}'",
                    value
                ))
            })?;
        }
        if let Ok(value) = std::env::var("ROSTER_SEED") {
            config.seed = Some(value.trim().parse().map_err(|_| {
                Error::config(format!("ROSTER_SEED must be an unsigned integer, got '{}'", value))
            })?);
        }

        Ok(config)
    }

    /// Save config to the roster directory
    /// Preserves other settings that this crate doesn't manage
    pub fn save(&self, roster_dir: &Path) -> Result<()> {
        let mut settings = read_settings(roster_dir)?;

        settings.app.user_count = Some(self.user_count);
        settings.app.seed = self.seed;
        settings.app.unemployed_label = Some(self.unemployed_label.clone());

        std::fs::create_dir_all(roster_dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(roster_dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }
}

fn read_settings(roster_dir: &Path) -> Result<SettingsFile> {
    let settings_path = roster_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)?;
    match serde_json::from_str(&content) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!(path = %settings_path.display(), error = %e, "ignoring unreadable settings file");
            Ok(SettingsFile::default())
        }
    }
}
