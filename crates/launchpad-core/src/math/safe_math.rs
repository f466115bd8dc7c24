//! # Safe Math Operations
//!
//! Overflow-checked arithmetic. Reserve products are formed in `u128`, so
//! the product of two `u64` reserves can never overflow.

use crate::errors::{LaunchpadError, LaunchpadResult};

/// Macro to generate safe arithmetic functions
macro_rules! safe_arith {
    ($fn_name:ident, $type:ty, $checked_method:ident, $error:expr) => {
        /// Checked arithmetic returning an error instead of wrapping
        pub fn $fn_name(a: $type, b: $type) -> LaunchpadResult<$type> {
            a.$checked_method(b).ok_or($error)
        }
    };

    (div, $fn_name:ident, $type:ty) => {
        /// Safe division with zero check
        pub fn $fn_name(a: $type, b: $type) -> LaunchpadResult<$type> {
            if b == 0 {
                return Err(LaunchpadError::DivisionByZero);
            }
            Ok(a / b)
        }
    };
}

safe_arith!(safe_add_u64, u64, checked_add, LaunchpadError::MathOverflow);
safe_arith!(safe_sub_u64, u64, checked_sub, LaunchpadError::MathUnderflow);
safe_arith!(div, safe_div_u64, u64);

safe_arith!(div, safe_div_u128, u128);

/// Narrow a `u128` back to `u64`
pub fn safe_cast_u128_to_u64(value: u128) -> LaunchpadResult<u64> {
    u64::try_from(value).map_err(|_| LaunchpadError::MathOverflow)
}

/// `floor(a * b / denominator)` with a 128-bit intermediate
pub fn mul_div_u64(a: u64, b: u64, denominator: u64) -> LaunchpadResult<u64> {
    let product = (a as u128) * (b as u128);
    let quotient = safe_div_u128(product, denominator as u128)?;
    safe_cast_u128_to_u64(quotient)
}
