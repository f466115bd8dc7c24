//! # Launchpad Constants
//!
//! Default numeric parameters for coin creation and the bonding curve:
//! - Creation fee and initial reserves
//! - Trade fee schedule (0.3%)
//! - Fixed-point price scale
//! - Symbol bounds and volume window

// ============================================================================
// Creation Constants
// ============================================================================

/// Minimum payment required to create a coin (base-currency units)
pub const CREATION_FEE: u64 = 100_000_000;

/// Unminted token units a freshly created coin starts with
pub const INITIAL_TOKEN_RESERVE: u64 = 1_000_000_000_000_000_000;

// ============================================================================
// Fee Structure Constants
// ============================================================================

/// Fraction of a trade kept by the trader, numerator
pub const FEE_NUMERATOR: u64 = 997;

/// Fraction of a trade kept by the trader, denominator
pub const FEE_DENOMINATOR: u64 = 1000;

// ============================================================================
// Pricing Constants
// ============================================================================

/// Scale applied to `current_price` for fixed-point display
pub const PRICE_SCALE: u64 = 1_000_000;

// ============================================================================
// Symbol Constants
// ============================================================================

/// Maximum encoded length of a symbol in bytes
pub const MAX_SYMBOL_BYTES: usize = 20;

/// Leading byte of a 4-byte UTF-8 sequence accepted as a symbol start
pub const UTF8_FOUR_BYTE_LEAD: u8 = 0xF0;

/// Leading byte of the 3-byte UTF-8 block accepted as a symbol start
pub const UTF8_THREE_BYTE_LEAD: u8 = 0xE2;

/// Bytes below this value are plain ASCII
pub const ASCII_LIMIT: u8 = 0x80;

// ============================================================================
// Volume Tracking Constants
// ============================================================================

/// Length of the rolling volume window (24 hours)
pub const VOLUME_WINDOW_MS: u64 = 86_400_000;
