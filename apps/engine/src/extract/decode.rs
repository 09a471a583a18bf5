//! Raw-byte heuristic decoder — the last rung of every extraction fallback
//! chain.

/// Best-effort text from arbitrary bytes: strict UTF-8 first; otherwise a
/// Latin-1 mapping reduced to printable ASCII plus whitespace. (Latin-1
/// decoding is total, so the printable filter runs on its output instead of
/// being a separate unreachable fallback.)
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes
            .iter()
            .map(|&b| b as char)
            .filter(|c| c.is_ascii_graphic() || matches!(c, ' ' | '\n' | '\r' | '\t'))
            .collect(),
    }
}
