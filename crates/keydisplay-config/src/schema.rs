//! Formatter configuration types.

use keydisplay_common::EscapeMode;
use serde::{Deserialize, Serialize};

/// Marker placed before each byte when readline mode expands a character
/// above U+00FF into its UTF-8 bytes.
///
/// Existing consumers expect `\c` here even though readline itself reads
/// `\c` as a control prefix; set `\x` for output readline actually accepts.
///
/// The expansion is over UTF-8 bytes, so U+0100 renders as `\cC4\c80`.
/// Output generated from UTF-16 code units instead would read `\c100` for
/// the same character; only the marker, not that unit choice, is kept
/// compatible.
pub const DEFAULT_MULTIBYTE_MARKER: &str = r"\c";

/// Key formatter configuration.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Escaping convention used when no mode is passed explicitly.
    pub mode: EscapeMode,
    /// Consult the fish literal map (named escapes and shell
    /// metacharacters) before the numeric rules in fish mode.
    pub use_literal_map: bool,
    /// Per-byte marker for readline multi-byte expansion.
    pub multibyte_marker: String,
    /// Key `\f`, `\n`, `\r` and `\v` at FF, LF, CR and VT in the literal
    /// maps. Off by default, which keys them at 0x12, 0x10, 0x13 and 0x11
    /// like previously generated output.
    pub corrected_readline_keys: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            mode: EscapeMode::Fish,
            use_literal_map: false,
            multibyte_marker: DEFAULT_MULTIBYTE_MARKER.into(),
            corrected_readline_keys: false,
        }
    }
}
