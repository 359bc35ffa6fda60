use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::LinkKeeperError;

const SETTINGS_DIR: &str = "link_keeper";
const SETTINGS_FILE: &str = "settings.json";
const DEFAULT_LINK_FILE: &str = "etl.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// The file where the links are saved.
    pub filepath: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            filepath: dirs::home_dir().unwrap_or_default().join(DEFAULT_LINK_FILE),
        }
    }
}

pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join(SETTINGS_DIR)
        .join(SETTINGS_FILE)
}

/// Stored settings laid over the defaults. No file means defaults.
#[tracing::instrument]
pub async fn load_settings(path: &Path) -> Result<Settings, LinkKeeperError> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("No settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(err) => return Err(LinkKeeperError::Settings(err.to_string())),
    };
    if text.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings =
        serde_json::from_str(&text).map_err(|err| LinkKeeperError::Settings(err.to_string()))?;
    tracing::debug!("Loaded {:?}", settings);
    Ok(settings)
}

#[tracing::instrument(skip(settings))]
pub async fn save_settings(path: &Path, settings: &Settings) -> Result<(), LinkKeeperError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|err| LinkKeeperError::Settings(err.to_string()))?;
    }
    let text = serde_json::to_string_pretty(settings)
        .map_err(|err| LinkKeeperError::Settings(err.to_string()))?;
    fs::write(path, text)
        .await
        .map_err(|err| LinkKeeperError::Settings(err.to_string()))?;
    tracing::info!("Saved settings");
    Ok(())
}
