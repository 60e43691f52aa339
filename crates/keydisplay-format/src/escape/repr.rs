/// Escape `chars` as the body of a JSON string literal.
///
/// Quotes, backslash and C0 controls are escaped; everything else,
/// including DEL and non-ASCII, passes through.
pub fn repr_escape(chars: &str) -> String {
    // Serialized strings always start and end with an ASCII quote.
    serde_json::to_string(chars)
        .map(|quoted| quoted[1..quoted.len() - 1].to_string())
        .unwrap_or_else(|_| chars.escape_default().to_string())
}
