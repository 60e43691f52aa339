/// Readline `inputrc` escapes for characters that have a named form or
/// must be backslash-escaped inside a double-quoted key sequence.
///
/// By default `\f`, `\n`, `\r` and `\v` are keyed at 0x12, 0x10, 0x13 and
/// 0x11, matching the output existing consumers were generated with. With
/// `corrected_keys` they are keyed at FF, LF, CR and VT instead.
pub fn readline_literal(ch: char, corrected_keys: bool) -> Option<&'static str> {
    match ch {
        '\x1b' => Some(r"\e"),
        '\\' => Some(r"\\"),
        '"' => Some(r#"\""#),
        '\'' => Some(r"\'"),
        '\x07' => Some(r"\a"),
        '\x08' => Some(r"\b"),
        '\t' => Some(r"\t"),
        _ if corrected_keys => match ch {
            '\x0c' => Some(r"\f"),
            '\n' => Some(r"\n"),
            '\r' => Some(r"\r"),
            '\x0b' => Some(r"\v"),
            _ => None,
        },
        '\x12' => Some(r"\f"),
        '\x10' => Some(r"\n"),
        '\x13' => Some(r"\r"),
        '\x11' => Some(r"\v"),
        _ => None,
    }
}

/// fish escapes: the readline set plus every character fish treats as
/// syntax on a `bind` command line.
pub fn fish_literal(ch: char, corrected_keys: bool) -> Option<&'static str> {
    match ch {
        ' ' => Some("' '"),
        '$' => Some(r"\$"),
        '*' => Some(r"\*"),
        '?' => Some(r"\?"),
        '~' => Some(r"\~"),
        '%' => Some(r"\%"),
        '#' => Some(r"\#"),
        '(' => Some(r"\("),
        ')' => Some(r"\)"),
        '{' => Some(r"\{"),
        '}' => Some(r"\}"),
        '[' => Some(r"\["),
        ']' => Some(r"\]"),
        '<' => Some(r"\<"),
        '>' => Some(r"\>"),
        '^' => Some(r"\^"),
        '&' => Some(r"\&"),
        ';' => Some(r"\;"),
        _ => readline_literal(ch, corrected_keys),
    }
}
