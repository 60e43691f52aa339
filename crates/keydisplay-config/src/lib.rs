//! Keydisplay configuration.
//!
//! A small TOML file selects the default escape mode and toggles the
//! optional formatter behaviours. All fields have defaults so a partial
//! (or absent) config works out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FormatConfig, DEFAULT_MULTIBYTE_MARKER};
pub use toml_loader::{
    default_config_path, load_default, load_from_path, load_from_str, load_or_default,
};

use keydisplay_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Unlike [`load_from_path`], validation failures are returned as errors.
pub fn load_config() -> Result<FormatConfig, ConfigError> {
    load_config_from(&default_config_path()?)
}

/// Load config from `path` (defaults if missing) and validate it.
pub fn load_config_from(path: &Path) -> Result<FormatConfig, ConfigError> {
    let config = toml_loader::load_or_default(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FormatConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
