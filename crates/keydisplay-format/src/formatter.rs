use std::borrow::Cow;
use std::path::Path;

use keydisplay_common::{ConfigError, EscapeMode};
use keydisplay_config::validation::{validate, validate_multibyte_marker};
use keydisplay_config::{FormatConfig, DEFAULT_MULTIBYTE_MARKER};
use tracing::warn;

use crate::escape::{fish_char, readline_char, repr_escape};

/// Turns raw key input into escaped text for key-binding documentation.
///
/// A formatter carries only options; formatting is a pure function of the
/// input, the mode and those options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFormatter {
    mode: EscapeMode,
    use_literal_map: bool,
    multibyte_marker: Cow<'static, str>,
    corrected_readline_keys: bool,
}

impl KeyFormatter {
    pub fn new() -> Self {
        Self {
            mode: EscapeMode::default(),
            use_literal_map: false,
            multibyte_marker: Cow::Borrowed(DEFAULT_MULTIBYTE_MARKER),
            corrected_readline_keys: false,
        }
    }

    /// Build a formatter from a loaded [`FormatConfig`].
    ///
    /// The config is validated first; an invalid one is rejected.
    pub fn from_config(config: &FormatConfig) -> Result<Self, ConfigError> {
        if let Err(e) = validate(config) {
            warn!("rejecting formatter config: {e}");
            return Err(e);
        }
        Ok(Self {
            mode: config.mode,
            use_literal_map: config.use_literal_map,
            multibyte_marker: Cow::Owned(config.multibyte_marker.clone()),
            corrected_readline_keys: config.corrected_readline_keys,
        })
    }

    /// Build a formatter from the config file at the platform default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_config(&keydisplay_config::load_config()?)
    }

    /// Build a formatter from the config file at `path`.
    ///
    /// A missing file yields the default formatter.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::from_config(&keydisplay_config::load_config_from(path)?)
    }

    /// Mode used by [`KeyFormatter::display`].
    pub fn with_mode(mut self, mode: EscapeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Consult the fish literal map before the numeric rules in fish mode.
    pub fn with_literal_map(mut self, enabled: bool) -> Self {
        self.use_literal_map = enabled;
        self
    }

    /// Per-byte marker for readline multi-byte expansion.
    ///
    /// Fails on markers a config file would also reject (empty, no leading
    /// backslash, too long, or containing control characters).
    pub fn with_multibyte_marker(
        mut self,
        marker: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ConfigError> {
        let marker = marker.into();
        validate_multibyte_marker(&marker)?;
        self.multibyte_marker = marker;
        Ok(self)
    }

    /// Key `\f`, `\n`, `\r` and `\v` at FF, LF, CR and VT in the literal
    /// maps instead of at 0x12, 0x10, 0x13 and 0x11.
    pub fn with_corrected_readline_keys(mut self, enabled: bool) -> Self {
        self.corrected_readline_keys = enabled;
        self
    }

    pub fn mode(&self) -> EscapeMode {
        self.mode
    }

    pub fn uses_literal_map(&self) -> bool {
        self.use_literal_map
    }

    pub fn multibyte_marker(&self) -> &str {
        &self.multibyte_marker
    }

    pub fn uses_corrected_readline_keys(&self) -> bool {
        self.corrected_readline_keys
    }

    /// Format `chars` in the formatter's own mode.
    pub fn display(&self, chars: Option<&str>) -> Option<String> {
        self.format(chars, self.mode)
    }

    /// Format `chars` in `mode`.
    ///
    /// `None` means no key was captured and is passed through as `None`.
    /// Readline output is wrapped in double quotes; the other modes are not.
    pub fn format(&self, chars: Option<&str>, mode: EscapeMode) -> Option<String> {
        let chars = chars?;

        let body = match mode {
            EscapeMode::Repr => return Some(repr_escape(chars)),
            EscapeMode::Fish => chars
                .chars()
                .map(|ch| fish_char(ch, self.use_literal_map, self.corrected_readline_keys))
                .collect::<String>(),
            EscapeMode::Readline => chars
                .chars()
                .map(|ch| readline_char(ch, &self.multibyte_marker, self.corrected_readline_keys))
                .collect::<String>(),
        };

        if mode.is_quoted() {
            Some(format!("\"{body}\""))
        } else {
            Some(body)
        }
    }

    /// Format a single character in `mode`, without readline quoting.
    pub fn format_char(&self, ch: char, mode: EscapeMode) -> String {
        match mode {
            EscapeMode::Repr => {
                let mut buf = [0u8; 4];
                repr_escape(ch.encode_utf8(&mut buf))
            }
            EscapeMode::Fish => fish_char(ch, self.use_literal_map, self.corrected_readline_keys),
            EscapeMode::Readline => readline_char(ch, &self.multibyte_marker, self.corrected_readline_keys),
        }
    }
}

impl Default for KeyFormatter {
    fn default() -> Self {
        Self::new()
    }
}
