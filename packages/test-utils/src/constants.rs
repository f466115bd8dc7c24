use launchpad_core::Address;

pub const CREATOR: Address = Address::new([0xC0; 32]);
pub const ALICE: Address = Address::new([0xA1; 32]);
pub const BOB: Address = Address::new([0xB0; 32]);

/// Timestamp every fresh `TestContext` starts at
pub const GENESIS_MS: u64 = 1_700_000_000_000;

pub const ROCKET: &str = "🚀";
pub const REFERENCE_BUY: u64 = 1_000_000;
/// Tokens minted by `REFERENCE_BUY` against a fresh default-config coin
pub const REFERENCE_TOKENS_OUT: u64 = 9_871_580_343_970_613;
/// Base currency returned by selling `REFERENCE_TOKENS_OUT` straight back
pub const REFERENCE_SELL_PROCEEDS: u64 = 994_038;
