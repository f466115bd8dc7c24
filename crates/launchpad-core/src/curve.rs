//! # Constant-Product Bonding Curve
//!
//! Pricing over a coin's two reserves:
//! - buys take the fee from the base-currency input before the swap
//! - sells take the fee from the base-currency output after the swap
//!
//! All division floors. Reserve products are formed in `u128`.

use tracing::debug;

use crate::config::FeeSchedule;
use crate::errors::LaunchpadResult;
use crate::math::{mul_div_u64, safe_add_u64, safe_sub_u64};

/// Tokens released for `sui_in` of base currency
///
/// Returns 0 when either reserve is empty.
pub fn quote_buy(
    sui_reserve: u64,
    token_reserve: u64,
    sui_in: u64,
    fee: &FeeSchedule,
) -> LaunchpadResult<u64> {
    if sui_reserve == 0 || token_reserve == 0 {
        return Ok(0);
    }

    let effective_in = mul_div_u64(sui_in, fee.numerator, fee.denominator)?;
    let new_sui_reserve = safe_add_u64(sui_reserve, effective_in)?;
    let new_token_reserve = mul_div_u64(sui_reserve, token_reserve, new_sui_reserve)?;
    let tokens_out = safe_sub_u64(token_reserve, new_token_reserve)?;

    debug!(sui_in, effective_in, tokens_out, "quoted buy");
    Ok(tokens_out)
}

/// Base currency paid out for `tokens_in`, after the fee
///
/// Returns 0 when either reserve is empty.
pub fn quote_sell(
    sui_reserve: u64,
    token_reserve: u64,
    tokens_in: u64,
    fee: &FeeSchedule,
) -> LaunchpadResult<u64> {
    if sui_reserve == 0 || token_reserve == 0 {
        return Ok(0);
    }

    let new_token_reserve = safe_add_u64(token_reserve, tokens_in)?;
    let new_sui_reserve = mul_div_u64(sui_reserve, token_reserve, new_token_reserve)?;
    let sui_out_before_fee = safe_sub_u64(sui_reserve, new_sui_reserve)?;
    let sui_out = mul_div_u64(sui_out_before_fee, fee.numerator, fee.denominator)?;

    debug!(tokens_in, sui_out_before_fee, sui_out, "quoted sell");
    Ok(sui_out)
}

/// `floor(sui_reserve * scale / token_reserve)`, or 0 for an empty token reserve
pub fn current_price(sui_reserve: u64, token_reserve: u64, scale: u64) -> LaunchpadResult<u64> {
    if token_reserve == 0 {
        return Ok(0);
    }
    mul_div_u64(sui_reserve, scale, token_reserve)
}
