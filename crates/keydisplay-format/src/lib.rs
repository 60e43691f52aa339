//! Escaped, human-readable rendering of raw key input.
//!
//! Given the characters a terminal sends for a key press, produce the text
//! a user would write in a fish `bind` command, a readline `inputrc`
//! binding, or a plain JSON-style escaped string.
//!
//! ```
//! use keydisplay_format::{displayable_key, EscapeMode};
//!
//! assert_eq!(displayable_key(Some("\x03"), EscapeMode::Fish).as_deref(), Some(r"\cc"));
//! assert_eq!(displayable_key(Some("\x03"), EscapeMode::Readline).as_deref(), Some(r#""\C-c""#));
//! ```

pub mod escape;
mod formatter;


pub use formatter::KeyFormatter;
pub use keydisplay_common::{ConfigError, EscapeMode, FormatError};

/// Format `chars` in `mode` with default options.
///
/// `None` (no key captured) yields `None`.
pub fn displayable_key(chars: Option<&str>, mode: EscapeMode) -> Option<String> {
    KeyFormatter::new().format(chars, mode)
}

/// Like [`displayable_key`], with the mode given by name.
///
/// Unknown mode names are rejected even when `chars` is `None`.
pub fn displayable_key_named(chars: Option<&str>, mode: &str) -> Result<Option<String>, FormatError> {
    let mode: EscapeMode = mode.parse()?;
    Ok(displayable_key(chars, mode))
}
