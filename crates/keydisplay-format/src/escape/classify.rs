use super::charmap::{fish_literal, readline_literal};
use super::codes::{
    control_code, hex_code, is_control_byte, is_ctrl_letter, multibyte_hex_code, unicode_code,
};

/// Render one character the way fish's `bind` expects it.
///
/// Rules, first match wins:
/// 0. with `use_literal_map`, an entry of the fish literal map
/// 1. Ctrl-A..Ctrl-Z as `\ca`..`\cz`
/// 2. remaining controls and DEL as `\xHH`
/// 3. above U+FFFF as `\UHHHHHHHH`
/// 4. above U+00FF as `\uHHHH`
/// 5. anything else unchanged
pub fn fish_char(ch: char, use_literal_map: bool, corrected_keys: bool) -> String {
    if use_literal_map {
        if let Some(escaped) = fish_literal(ch, corrected_keys) {
            return escaped.to_string();
        }
    }

    let code = u32::from(ch);
    if is_ctrl_letter(code) {
        control_code(code, r"\c")
    } else if is_control_byte(code) {
        hex_code(code, r"\x")
    } else if code > 0xffff {
        unicode_code(code, r"\U", 8)
    } else if code > 0xff {
        unicode_code(code, r"\u", 4)
    } else {
        ch.to_string()
    }
}

/// Render one character the way readline's `inputrc` expects it, without
/// the surrounding quotes.
///
/// Rules, first match wins:
/// 1. an entry of the readline literal map
/// 2. Ctrl-A..Ctrl-Z as `\C-a`..`\C-z`
/// 3. remaining controls and DEL as `\xHH`
/// 4. above U+00FF as each UTF-8 byte behind `multibyte_marker`
/// 5. anything else unchanged
pub fn readline_char(ch: char, multibyte_marker: &str, corrected_keys: bool) -> String {
    if let Some(escaped) = readline_literal(ch, corrected_keys) {
        return escaped.to_string();
    }

    let code = u32::from(ch);
    if is_ctrl_letter(code) {
        control_code(code, r"\C-")
    } else if is_control_byte(code) {
        hex_code(code, r"\x")
    } else if code > 0xff {
        multibyte_hex_code(ch, multibyte_marker)
    } else {
        ch.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fish_ctrl_letters() {
        for code in 0x01u32..=0x1a {
            let ch = char::from_u32(code).unwrap();
            let letter = char::from_u32(code + 96).unwrap();
            assert_eq!(fish_char(ch, false, false), format!(r"\c{letter}"));
        }
    }

    #[test]
    fn fish_other_controls_are_hex() {
        assert_eq!(fish_char('\0', false, false), r"\x00");
        assert_eq!(fish_char('\x1b', false, false), r"\x1B");
        assert_eq!(fish_char('\x1f', false, false), r"\x1F");
        assert_eq!(fish_char('\x7f', false, false), r"\x7F");
        assert_eq!(fish_char('\u{80}', false, false), r"\x80");
        assert_eq!(fish_char('\u{9f}', false, false), r"\x9F");
    }

    #[test]
    fn fish_unicode_escapes() {
        assert_eq!(fish_char('\u{100}', false, false), r"\u0100");
        assert_eq!(fish_char('\u{20ac}', false, false), r"\u20AC");
        assert_eq!(fish_char('\u{ffff}', false, false), r"\uFFFF");
        assert_eq!(fish_char('\u{10000}', false, false), r"\U00010000");
        assert_eq!(fish_char('\u{1f600}', false, false), r"\U0001F600");
    }

    #[test]
    fn fish_passthrough() {
        assert_eq!(fish_char('A', false, false), "A");
        assert_eq!(fish_char(' ', false, false), " ");
        assert_eq!(fish_char('$', false, false), "$");
        assert_eq!(fish_char('\u{a0}', false, false), "\u{a0}");
        assert_eq!(fish_char('\u{ff}', false, false), "\u{ff}");
    }

    #[test]
    fn fish_literal_map_takes_precedence() {
        assert_eq!(fish_char('\x1b', true, false), r"\e");
        assert_eq!(fish_char('\t', true, false), r"\t");
        assert_eq!(fish_char(' ', true, false), "' '");
        assert_eq!(fish_char('$', true, false), r"\$");
        // Characters outside the map still use the numeric rules.
        assert_eq!(fish_char('\x01', true, false), r"\ca");
        assert_eq!(fish_char('\u{100}', true, false), r"\u0100");
        assert_eq!(fish_char('A', true, false), "A");
    }

    #[test]
    fn readline_literal_map_always_applies() {
        assert_eq!(readline_char('\x1b', r"\c", false), r"\e");
        assert_eq!(readline_char('\t', r"\c", false), r"\t");
        assert_eq!(readline_char('"', r"\c", false), r#"\""#);
        assert_eq!(readline_char('\\', r"\c", false), r"\\");
    }

    #[test]
    fn readline_legacy_keys_shadow_ctrl_letters() {
        assert_eq!(readline_char('\n', r"\c", false), r"\C-j");
        assert_eq!(readline_char('\r', r"\c", false), r"\C-m");
        assert_eq!(readline_char('\x10', r"\c", false), r"\n");
        assert_eq!(readline_char('\x13', r"\c", false), r"\r");
    }

    #[test]
    fn readline_corrected_keys() {
        assert_eq!(readline_char('\n', r"\c", true), r"\n");
        assert_eq!(readline_char('\r', r"\c", true), r"\r");
        assert_eq!(readline_char('\x10', r"\c", true), r"\C-p");
        assert_eq!(readline_char('\x13', r"\c", true), r"\C-s");
    }

    #[test]
    fn fish_literal_map_follows_key_correction() {
        assert_eq!(fish_char('\x10', true, false), r"\n");
        assert_eq!(fish_char('\n', true, false), r"\cj");
        assert_eq!(fish_char('\n', true, true), r"\n");
        assert_eq!(fish_char('\x10', true, true), r"\cp");
    }

    #[test]
    fn readline_ctrl_letters() {
        assert_eq!(readline_char('\x01', r"\c", false), r"\C-a");
        assert_eq!(readline_char('\x03', r"\c", false), r"\C-c");
        assert_eq!(readline_char('\x1a', r"\c", false), r"\C-z");
    }

    #[test]
    fn readline_other_controls_are_hex() {
        assert_eq!(readline_char('\0', r"\c", false), r"\x00");
        assert_eq!(readline_char('\x1c', r"\c", false), r"\x1C");
        assert_eq!(readline_char('\x7f', r"\c", false), r"\x7F");
        assert_eq!(readline_char('\u{85}', r"\c", false), r"\x85");
    }

    #[test]
    fn readline_multibyte_uses_marker() {
        assert_eq!(readline_char('\u{100}', r"\c", false), r"\cC4\c80");
        assert_eq!(readline_char('\u{100}', r"\x", false), r"\xC4\x80");
        assert_eq!(readline_char('\u{10000}', r"\x", false), r"\xF0\x90\x80\x80");
    }

    #[test]
    fn readline_passthrough() {
        assert_eq!(readline_char('A', r"\c", false), "A");
        assert_eq!(readline_char(' ', r"\c", false), " ");
        assert_eq!(readline_char('\u{e9}', r"\c", false), "\u{e9}");
    }
}
