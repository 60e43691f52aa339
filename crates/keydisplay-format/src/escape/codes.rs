//! Escape-sequence encoders shared by the fish and readline classifiers.

/// Ctrl-A through Ctrl-Z.
pub(crate) fn is_ctrl_letter(code: u32) -> bool {
    (0x01..=0x1a).contains(&code)
}

/// C0 controls, DEL, and C1 controls.
pub(crate) fn is_control_byte(code: u32) -> bool {
    code <= 0x1f || code == 0x7f || (0x80..=0x9f).contains(&code)
}

/// `prefix` followed by the letter the control code is typed with, so
/// 0x01 becomes `a` and 0x1A becomes `z`.
///
/// Only meaningful for codes accepted by [`is_ctrl_letter`].
pub(crate) fn control_code(code: u32, prefix: &str) -> String {
    let letter = char::from((code as u8).wrapping_add(0x60));
    format!("{prefix}{letter}")
}

/// `prefix` followed by two uppercase hex digits.
pub(crate) fn hex_code(code: u32, prefix: &str) -> String {
    format!("{prefix}{code:02X}")
}

/// `prefix` followed by `width` uppercase hex digits, zero padded.
pub(crate) fn unicode_code(code: u32, prefix: &str, width: usize) -> String {
    format!("{prefix}{code:0width$X}")
}

/// Every UTF-8 byte of `ch` as `prefix` plus two uppercase hex digits.
pub(crate) fn multibyte_hex_code(ch: char, prefix: &str) -> String {
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf)
        .bytes()
        .map(|byte| hex_code(u32::from(byte), prefix))
        .collect()
}
