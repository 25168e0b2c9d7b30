//! Unified code-point sequences
//!
//! The dataset encodes every glyph as hyphen-joined hexadecimal code points,
//! e.g. `1F44D-1F3FB`. Decoding is plain code-point assembly with no
//! normalization.

/// Parse a unified sequence into its code points.
/// Returns None if any segment is empty, not hexadecimal, or not a scalar value.
pub fn parse_unified(unified: &str) -> Option<Vec<char>> {
    let unified = unified.trim();
    if unified.is_empty() {
        return None;
    }

    unified
        .split('-')
        .map(|segment| {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let value = u32::from_str_radix(segment, 16).ok()?;
            char::from_u32(value)
        })
        .collect()
}

/// Decode a unified sequence into the literal character sequence
pub fn unified_to_literal(unified: &str) -> Option<String> {
    parse_unified(unified).map(|chars| chars.into_iter().collect())
}
