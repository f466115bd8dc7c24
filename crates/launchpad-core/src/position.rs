//! # Token Positions
//!
//! A position is a holder's claim on part of a coin's circulating supply.
//! Buys create positions; sells consume one whole. Splitting and merging
//! let a holder size a position before selling it.

use serde::Serialize;

use crate::coin::TokenBalance;
use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::types::{Address, ObjectId};

#[derive(Debug, PartialEq, Eq)]
pub struct Position {
    pub id: ObjectId,
    /// Denormalized from the coin
    pub symbol: String,
    pub owner: Address,
    balance: TokenBalance,
}

/// Read-only copy of a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionInfo {
    pub id: ObjectId,
    pub coin_id: ObjectId,
    pub symbol: String,
    pub owner: Address,
    pub balance: u64,
}

impl Position {
    pub fn new(id: ObjectId, symbol: &str, owner: Address, balance: TokenBalance) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            owner,
            balance,
        }
    }

    pub fn coin_id(&self) -> ObjectId {
        self.balance.coin_id()
    }

    pub fn balance(&self) -> u64 {
        self.balance.value()
    }

    pub fn ensure_owner(&self, caller: &Address) -> LaunchpadResult<()> {
        if self.owner != *caller {
            return Err(LaunchpadError::Unauthorized);
        }
        Ok(())
    }

    /// Move `amount` into a new position `new_id` with the same owner
    pub fn split(&mut self, new_id: ObjectId, amount: u64) -> LaunchpadResult<Position> {
        let part = self.balance.split(amount)?;
        Ok(Position::new(new_id, &self.symbol, self.owner, part))
    }

    /// Absorb `other`, which must hold the same coin
    pub fn join(&mut self, other: Position) -> LaunchpadResult<()> {
        if other.coin_id() != self.coin_id() {
            return Err(LaunchpadError::PositionCoinMismatch {
                position: other.id,
                expected: self.coin_id(),
                actual: other.coin_id(),
            });
        }
        self.balance.join(other.balance)
    }

    /// Consume the position, releasing its token balance for burning
    pub fn into_balance(self) -> TokenBalance {
        self.balance
    }

    pub fn info(&self) -> PositionInfo {
        PositionInfo {
            id: self.id,
            coin_id: self.coin_id(),
            symbol: self.symbol.clone(),
            owner: self.owner,
            balance: self.balance(),
        }
    }
}
