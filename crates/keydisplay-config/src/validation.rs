//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` rather than stopping
//! at the first one.

use crate::schema::FormatConfig;
use keydisplay_common::ConfigError;

/// Longest marker accepted; markers are short escape prefixes.
const MAX_MARKER_LEN: usize = 4;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FormatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_marker(&mut errors, &config.multibyte_marker);

    into_result(errors)
}

/// Validate a readline multi-byte marker on its own.
pub fn validate_multibyte_marker(marker: &str) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    validate_marker(&mut errors, marker);
    into_result(errors)
}

fn into_result(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_marker(errors: &mut Vec<String>, marker: &str) {
    if marker.is_empty() {
        errors.push("multibyte_marker must not be empty".into());
        return;
    }
    if !marker.starts_with('\\') {
        errors.push(format!(
            "multibyte_marker = {marker:?} must start with a backslash"
        ));
    }
    if marker.chars().count() > MAX_MARKER_LEN {
        errors.push(format!(
            "multibyte_marker = {marker:?} is longer than {MAX_MARKER_LEN} characters"
        ));
    }
    if marker.chars().any(char::is_control) {
        errors.push(format!(
            "multibyte_marker = {marker:?} contains control characters"
        ));
    }
}
