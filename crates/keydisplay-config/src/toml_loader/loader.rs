//! Core TOML config loading: from a string, a path, or the platform default.

use crate::schema::FormatConfig;
use crate::validation;
use keydisplay_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::default_config_path;

/// Parse a config from TOML text. Missing fields take their defaults.
pub fn load_from_str(content: &str) -> Result<FormatConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is. Use
/// [`crate::load_config_from`] for a strict load.
pub fn load_from_path(path: &Path) -> Result<FormatConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = load_from_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}, using parsed config with potentially invalid values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, returning defaults when the file is missing.
pub fn load_or_default(path: &Path) -> Result<FormatConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(FormatConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// A missing file is not an error: defaults are returned.
pub fn load_default() -> Result<FormatConfig, ConfigError> {
    load_or_default(&default_config_path()?)
}
