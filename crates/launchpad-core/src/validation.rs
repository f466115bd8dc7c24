/// Symbol acceptance check applied before a coin is created
///
/// The check is a heuristic over the first encoded byte only, not a full
/// Unicode validator: it admits plain ASCII, the 0xE2 block of 3-byte
/// sequences (arrows, symbols, dingbats) and every 4-byte sequence (emoji).
use crate::constants::{ASCII_LIMIT, MAX_SYMBOL_BYTES, UTF8_FOUR_BYTE_LEAD, UTF8_THREE_BYTE_LEAD};
use crate::errors::{LaunchpadError, LaunchpadResult};

/// Check whether a symbol may be registered
///
/// # Returns
/// * `false` for empty symbols or symbols longer than 20 encoded bytes
/// * `false` when the first byte is not ASCII, 0xE2 or 0xF0
/// * `true` otherwise
pub fn is_valid_symbol(symbol: &str) -> bool {
    let bytes = symbol.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_SYMBOL_BYTES {
        return false;
    }

    let lead = bytes[0];
    lead == UTF8_FOUR_BYTE_LEAD || lead == UTF8_THREE_BYTE_LEAD || lead < ASCII_LIMIT
}

/// Validate a symbol, mapping rejection to `InvalidSymbol`
pub fn validate_symbol(symbol: &str) -> LaunchpadResult<()> {
    if !is_valid_symbol(symbol) {
        return Err(LaunchpadError::invalid_symbol(symbol));
    }
    Ok(())
}

#[test]
fn test_ascii_symbols() {
    assert!(is_valid_symbol("A"));
    assert!(is_valid_symbol("MOON"));
    assert!(is_valid_symbol("doge-2"));
    assert!(is_valid_symbol("AAAAAAAAAAAAAAAAAAAA")); // exactly 20 bytes
}

#[test]
fn test_length_bounds() {
    assert!(!is_valid_symbol(""));
    assert!(!is_valid_symbol("AAAAAAAAAAAAAAAAAAAAA")); // 21 bytes

    // Five 4-byte emoji are exactly 20 bytes, six are too long
    assert!(is_valid_symbol("🚀🚀🚀🚀🚀"));
    assert!(!is_valid_symbol("🚀🚀🚀🚀🚀🚀"));
}

#[test]
fn test_first_byte_heuristic() {
    // 4-byte lead 0xF0
    assert!(is_valid_symbol("🚀"));
    // 3-byte sequences starting with 0xE2
    assert!(is_valid_symbol("☀"));
    assert!(is_valid_symbol("→X"));
    // 2-byte lead (é = 0xC3 0xA9)
    assert!(!is_valid_symbol("éclair"));
    // 3-byte lead other than 0xE2 (CJK starts with 0xE4..0xE9)
    assert!(!is_valid_symbol("中"));
    // Only the first byte is inspected
    assert!(is_valid_symbol("A中"));
}

#[test]
fn test_validate_symbol_error() {
    assert!(validate_symbol("MOON").is_ok());
    assert_eq!(
        validate_symbol("中"),
        Err(LaunchpadError::InvalidSymbol("中".to_string()))
    );
}
