//! Host-side persistence of the card configuration.
//!
//! The card itself never touches disk; this module is the glue a host (or
//! the preview binary) uses to keep the configuration across runs.

use anyhow::Result;
use linien_card_types::CardConfig;
use std::path::{Path, PathBuf};

/// Path of the persisted configuration file.
pub fn config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("io", "linien-card", "linien-card")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(dirs.config_dir().join("config.json"))
}

/// Load the persisted configuration, falling back to an empty one when no
/// file exists yet.
pub fn load_config() -> Result<CardConfig> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(CardConfig::new());
    }

    load_config_from_path(&path)
}

/// Save the configuration to the default location.
pub fn save_config(config: &CardConfig) -> Result<()> {
    save_config_to_path(config, &config_path()?)
}

/// Load a configuration from a specific file path.
pub fn load_config_from_path(path: &Path) -> Result<CardConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save a configuration to a specific file path.
pub fn save_config_to_path(config: &CardConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
