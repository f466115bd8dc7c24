//! # Base Currency Balance
//!
//! Opaque fungible container for the base currency. The engine only moves
//! value between a caller's balance and a coin's reserve; units are created
//! by the host (`Balance::new`) and never destroyed here.

use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::math::safe_add_u64;

/// An amount of base currency. Not `Clone`: value moves, it is never copied.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Balance {
    value: u64,
}

impl Balance {
    /// Wrap value handed in by the host
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Move `amount` out into a new balance
    pub fn split(&mut self, amount: u64) -> LaunchpadResult<Balance> {
        if amount > self.value {
            return Err(LaunchpadError::InsufficientBalance {
                requested: amount,
                available: self.value,
            });
        }
        self.value -= amount;
        Ok(Balance { value: amount })
    }

    /// Absorb another balance, returning the new total
    pub fn join(&mut self, other: Balance) -> LaunchpadResult<u64> {
        self.value = safe_add_u64(self.value, other.value)?;
        Ok(self.value)
    }

    /// Drain everything, leaving zero behind
    pub fn withdraw_all(&mut self) -> Balance {
        std::mem::take(self)
    }

    /// Hand the value back to the host
    pub fn into_value(self) -> u64 {
        self.value
    }
}
