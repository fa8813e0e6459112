//! Flag emoji derivation from ISO 3166-1 alpha-2 codes.

/// First regional indicator symbol (🇦).
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Maps a two-letter country code to its flag emoji.
///
/// Letters are case-insensitive. Returns `None` for an absent code, any other
/// length, or non-ASCII-letter input.
pub fn iso_to_flag(iso: Option<&str>) -> Option<String> {
    let iso = iso?;
    let bytes = iso.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
        return None;
    }
    bytes
        .iter()
        .map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b.to_ascii_uppercase() - b'A')))
        .collect()
}
