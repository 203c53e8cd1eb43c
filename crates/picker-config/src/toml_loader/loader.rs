//! Reading the config file, and writing the default one when it is missing.

use std::path::{Path, PathBuf};

use picker_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::schema::PickerConfig;

const APP_DIR: &str = "hsb-picker";
const FILE_NAME: &str = "config.toml";

fn io_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
}

/// `<config_dir>/hsb-picker/config.toml`, e.g. `~/.config/hsb-picker/config.toml`
/// on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", path, e))?;

    info!(path = %path.display(), "created default config");
    Ok(())
}

/// Parse the TOML file at `path`. Missing fields take their defaults.
///
/// No validation happens here; `load_config_from` is the checked entry point.
pub fn load_from_path(path: &Path) -> Result<PickerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;
    let config: PickerConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load from [`default_config_path`], writing the default file first if
/// there is none.
pub fn load_default() -> Result<PickerConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config found, creating default");
            create_default_config(&path)?;
            Ok(PickerConfig::default())
        }
        other => other,
    }
}
