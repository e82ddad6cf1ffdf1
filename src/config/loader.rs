//! Configuration file discovery and loading.

use crate::config::schema::LeelaConfig;
use crate::error::{LeelaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LEELA_CONFIG";

/// Find the config file to load.
///
/// `$LEELA_CONFIG` wins when set (even if the file is missing, so the
/// mistake surfaces). Otherwise `~/.leela/config.yml` is used if present.
pub fn find_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }

    let path = dirs::home_dir()?.join(".leela").join("config.yml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load the tool configuration, falling back to defaults.
pub fn load_config() -> Result<LeelaConfig> {
    match find_config_path() {
        Some(path) => load_config_file(&path),
        None => Ok(LeelaConfig::default()),
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `Config` if the file can't be read or the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LeelaConfig> {
    let content = fs::read_to_string(path).map_err(|e| LeelaError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`LeelaConfig`].
pub fn parse_config(content: &str, source_path: &Path) -> Result<LeelaConfig> {
    if content.trim().is_empty() {
        return Ok(LeelaConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LeelaError::Config {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
