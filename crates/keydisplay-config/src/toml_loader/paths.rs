//! Config path resolution.

use keydisplay_common::ConfigError;
use std::path::PathBuf;

/// Get the platform-specific default config file path.
///
/// On macOS: `~/Library/Application Support/keydisplay/config.toml`
/// On Linux: `~/.config/keydisplay/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("keydisplay").join("config.toml"))
}
