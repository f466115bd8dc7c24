//! # Coin
//!
//! The economic object behind a symbol: base-currency reserve, unminted token
//! reserve, circulating supply and the exclusive mint/burn capability.
//!
//! Trades are applied in two steps. `plan_buy` / `plan_sell` run every
//! check and compute the post-trade state without touching the coin;
//! `commit_buy` / `commit_sell` then apply a plan. A rejected plan leaves the
//! coin untouched.

use serde::Serialize;

use crate::balance::Balance;
use crate::config::{FeeSchedule, LaunchpadConfig};
use crate::curve;
use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::math::{safe_add_u64, safe_sub_u64};
use crate::types::{Address, ObjectId};

/// Minted units of one coin. Only that coin's [`TreasuryCap`] creates or
/// destroys them.
#[derive(Debug, PartialEq, Eq)]
pub struct TokenBalance {
    coin_id: ObjectId,
    value: u64,
}

impl TokenBalance {
    pub fn zero(coin_id: ObjectId) -> Self {
        Self { coin_id, value: 0 }
    }

    pub fn coin_id(&self) -> ObjectId {
        self.coin_id
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn split(&mut self, amount: u64) -> LaunchpadResult<TokenBalance> {
        if amount > self.value {
            return Err(LaunchpadError::InsufficientBalance {
                requested: amount,
                available: self.value,
            });
        }
        self.value -= amount;
        Ok(TokenBalance {
            coin_id: self.coin_id,
            value: amount,
        })
    }

    pub fn join(&mut self, other: TokenBalance) -> LaunchpadResult<()> {
        if other.coin_id != self.coin_id {
            return Err(LaunchpadError::PositionCoinMismatch {
                position: other.coin_id,
                expected: self.coin_id,
                actual: other.coin_id,
            });
        }
        self.value = safe_add_u64(self.value, other.value)?;
        Ok(())
    }
}

/// Exclusive mint/burn authority, owned by exactly one coin and never shared
#[derive(Debug, PartialEq, Eq)]
pub struct TreasuryCap {
    coin_id: ObjectId,
    supply: u64,
}

impl TreasuryCap {
    pub(crate) fn new(coin_id: ObjectId) -> Self {
        Self { coin_id, supply: 0 }
    }

    pub fn coin_id(&self) -> ObjectId {
        self.coin_id
    }

    /// Units minted and not yet burned
    pub fn supply(&self) -> u64 {
        self.supply
    }

    pub fn mint(&mut self, amount: u64) -> LaunchpadResult<TokenBalance> {
        self.supply = safe_add_u64(self.supply, amount)?;
        Ok(TokenBalance {
            coin_id: self.coin_id,
            value: amount,
        })
    }

    pub fn burn(&mut self, balance: TokenBalance) -> LaunchpadResult<u64> {
        if balance.coin_id != self.coin_id {
            return Err(LaunchpadError::PositionCoinMismatch {
                position: balance.coin_id,
                expected: self.coin_id,
                actual: balance.coin_id,
            });
        }
        self.supply = safe_sub_u64(self.supply, balance.value)?;
        Ok(balance.value)
    }
}

/// Post-trade state computed ahead of a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradePlan {
    /// Base currency moving in (buy) or out (sell)
    pub sui_amount: u64,
    /// Tokens minted (buy) or burned (sell)
    pub token_amount: u64,
    new_sui_reserve: u64,
    new_token_reserve: u64,
    new_total_supply: u64,
    new_volume: u64,
    new_window_start: u64,
}

#[derive(Debug)]
pub struct Coin {
    pub id: ObjectId,
    pub symbol: String,
    pub creator: Address,
    pub metadata_id: ObjectId,
    pub created_at: u64,
    treasury: TreasuryCap,
    sui_reserve: Balance,
    token_reserve: u64,
    total_supply: u64,
    volume_24h: u64,
    volume_window_start: u64,
    fee: FeeSchedule,
    price_scale: u64,
    volume_window_ms: u64,
}

/// Serializable snapshot of a coin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinInfo {
    pub id: ObjectId,
    pub symbol: String,
    pub creator: Address,
    pub metadata_id: ObjectId,
    pub created_at: u64,
    pub sui_reserve: u64,
    pub token_reserve: u64,
    pub total_supply: u64,
    pub volume_24h: u64,
    pub price: u64,
}

impl Coin {
    /// New coin whose base-currency reserve is the whole `reserve`
    pub fn new(
        id: ObjectId,
        symbol: &str,
        creator: Address,
        metadata_id: ObjectId,
        reserve: Balance,
        config: &LaunchpadConfig,
        now_ms: u64,
    ) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            creator,
            metadata_id,
            created_at: now_ms,
            treasury: TreasuryCap::new(id),
            sui_reserve: reserve,
            token_reserve: config.initial_token_reserve,
            total_supply: 0,
            volume_24h: 0,
            volume_window_start: now_ms,
            fee: config.fee,
            price_scale: config.price_scale,
            volume_window_ms: config.volume_window_ms,
        }
    }

    pub fn sui_reserve(&self) -> u64 {
        self.sui_reserve.value()
    }

    pub fn token_reserve(&self) -> u64 {
        self.token_reserve
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn volume_24h(&self) -> u64 {
        self.volume_24h
    }

    pub fn fee(&self) -> &FeeSchedule {
        &self.fee
    }

    pub fn treasury(&self) -> &TreasuryCap {
        &self.treasury
    }

    pub fn quote_buy(&self, sui_in: u64) -> LaunchpadResult<u64> {
        curve::quote_buy(self.sui_reserve(), self.token_reserve, sui_in, &self.fee)
    }

    pub fn quote_sell(&self, tokens_in: u64) -> LaunchpadResult<u64> {
        curve::quote_sell(self.sui_reserve(), self.token_reserve, tokens_in, &self.fee)
    }

    pub fn current_price(&self) -> LaunchpadResult<u64> {
        curve::current_price(self.sui_reserve(), self.token_reserve, self.price_scale)
    }

    /// Check a buy of `tokens_out` for `sui_in` and compute its result
    pub fn plan_buy(&self, sui_in: u64, tokens_out: u64, now_ms: u64) -> LaunchpadResult<TradePlan> {
        if tokens_out > self.token_reserve {
            return Err(LaunchpadError::InsufficientReserves {
                requested: tokens_out,
                available: self.token_reserve,
            });
        }

        let (new_volume, new_window_start) = self.accumulate_volume(sui_in, now_ms)?;
        Ok(TradePlan {
            sui_amount: sui_in,
            token_amount: tokens_out,
            new_sui_reserve: safe_add_u64(self.sui_reserve(), sui_in)?,
            new_token_reserve: self.token_reserve - tokens_out,
            new_total_supply: safe_add_u64(self.total_supply, tokens_out)?,
            new_volume,
            new_window_start,
        })
    }

    /// Check a sell of `tokens_in` paying `sui_out` and compute its result
    pub fn plan_sell(&self, tokens_in: u64, sui_out: u64, now_ms: u64) -> LaunchpadResult<TradePlan> {
        if sui_out > self.sui_reserve() {
            return Err(LaunchpadError::InsufficientReserves {
                requested: sui_out,
                available: self.sui_reserve(),
            });
        }

        let (new_volume, new_window_start) = self.accumulate_volume(sui_out, now_ms)?;
        Ok(TradePlan {
            sui_amount: sui_out,
            token_amount: tokens_in,
            new_sui_reserve: self.sui_reserve() - sui_out,
            new_token_reserve: safe_add_u64(self.token_reserve, tokens_in)?,
            new_total_supply: safe_sub_u64(self.total_supply, tokens_in)?,
            new_volume,
            new_window_start,
        })
    }

    /// Price the coin will quote once `plan` is committed
    pub fn price_after(&self, plan: &TradePlan) -> LaunchpadResult<u64> {
        curve::current_price(plan.new_sui_reserve, plan.new_token_reserve, self.price_scale)
    }

    /// Apply a buy plan: drain the payment into the reserve and mint tokens.
    /// The payment is only drained once minting succeeded.
    pub fn commit_buy(&mut self, plan: TradePlan, payment: &mut Balance) -> LaunchpadResult<TokenBalance> {
        if payment.value() != plan.sui_amount {
            return Err(LaunchpadError::invalid_amount(format!(
                "payment of {} does not match planned {}",
                payment.value(),
                plan.sui_amount
            )));
        }

        let minted = self.treasury.mint(plan.token_amount)?;
        self.sui_reserve.join(payment.withdraw_all())?;
        self.apply(&plan);
        Ok(minted)
    }

    /// Apply a sell plan: burn the tokens and release base currency
    pub fn commit_sell(&mut self, plan: TradePlan, tokens: TokenBalance) -> LaunchpadResult<Balance> {
        if tokens.coin_id() != self.id {
            return Err(LaunchpadError::PositionCoinMismatch {
                position: tokens.coin_id(),
                expected: self.id,
                actual: tokens.coin_id(),
            });
        }

        self.treasury.burn(tokens)?;
        let proceeds = self.sui_reserve.split(plan.sui_amount)?;
        self.apply(&plan);
        Ok(proceeds)
    }

    pub fn info(&self) -> LaunchpadResult<CoinInfo> {
        Ok(CoinInfo {
            id: self.id,
            symbol: self.symbol.clone(),
            creator: self.creator,
            metadata_id: self.metadata_id,
            created_at: self.created_at,
            sui_reserve: self.sui_reserve(),
            token_reserve: self.token_reserve,
            total_supply: self.total_supply,
            volume_24h: self.volume_24h,
            price: self.current_price()?,
        })
    }

    fn apply(&mut self, plan: &TradePlan) {
        debug_assert_eq!(self.sui_reserve.value(), plan.new_sui_reserve);
        self.token_reserve = plan.new_token_reserve;
        self.total_supply = plan.new_total_supply;
        self.volume_24h = plan.new_volume;
        self.volume_window_start = plan.new_window_start;
    }

    /// Volume after adding `amount`, resetting once the window has elapsed
    fn accumulate_volume(&self, amount: u64, now_ms: u64) -> LaunchpadResult<(u64, u64)> {
        if now_ms.saturating_sub(self.volume_window_start) >= self.volume_window_ms {
            return Ok((amount, now_ms));
        }
        Ok((safe_add_u64(self.volume_24h, amount)?, self.volume_window_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CREATION_FEE, INITIAL_TOKEN_RESERVE, VOLUME_WINDOW_MS};

    fn coin() -> Coin {
        Coin::new(
            ObjectId::new(10),
            "MOON",
            Address::from_low_u64(1),
            ObjectId::new(11),
            Balance::new(CREATION_FEE),
            &LaunchpadConfig::default(),
            1_000,
        )
    }

    #[test]
    fn test_new_coin_state() {
        let coin = coin();
        assert_eq!(coin.sui_reserve(), CREATION_FEE);
        assert_eq!(coin.token_reserve(), INITIAL_TOKEN_RESERVE);
        assert_eq!(coin.total_supply(), 0);
        assert_eq!(coin.volume_24h(), 0);
        assert_eq!(coin.treasury().coin_id(), coin.id);
    }

    #[test]
    fn test_buy_plan_and_commit() {
        let mut coin = coin();
        let tokens_out = coin.quote_buy(1_000_000).unwrap();
        let plan = coin.plan_buy(1_000_000, tokens_out, 2_000).unwrap();

        // Planning alone changes nothing
        assert_eq!(coin.total_supply(), 0);

        let minted = coin.commit_buy(plan, &mut Balance::new(1_000_000)).unwrap();
        assert_eq!(minted.value(), tokens_out);
        assert_eq!(coin.sui_reserve(), CREATION_FEE + 1_000_000);
        assert_eq!(coin.token_reserve(), INITIAL_TOKEN_RESERVE - tokens_out);
        assert_eq!(coin.total_supply(), tokens_out);
        assert_eq!(coin.treasury().supply(), tokens_out);
        assert_eq!(coin.volume_24h(), 1_000_000);
        assert_eq!(coin.token_reserve() + coin.total_supply(), INITIAL_TOKEN_RESERVE);
    }

    #[test]
    fn test_commit_buy_rejects_wrong_payment() {
        let mut coin = coin();
        let plan = coin.plan_buy(500, 1, 2_000).unwrap();
        let mut short = Balance::new(499);
        assert!(coin.commit_buy(plan, &mut short).is_err());
        assert_eq!(short.value(), 499);
        assert_eq!(coin.total_supply(), 0);
        assert_eq!(coin.sui_reserve(), CREATION_FEE);
    }

    #[test]
    fn test_plan_buy_over_reserve() {
        let coin = coin();
        let err = coin
            .plan_buy(1, INITIAL_TOKEN_RESERVE + 1, 2_000)
            .unwrap_err();
        assert!(matches!(err, LaunchpadError::InsufficientReserves { .. }));
    }

    #[test]
    fn test_sell_round_trip() {
        let mut coin = coin();
        let tokens_out = coin.quote_buy(1_000_000).unwrap();
        let plan = coin.plan_buy(1_000_000, tokens_out, 2_000).unwrap();
        let minted = coin.commit_buy(plan, &mut Balance::new(1_000_000)).unwrap();

        let sui_out = coin.quote_sell(minted.value()).unwrap();
        let plan = coin.plan_sell(minted.value(), sui_out, 3_000).unwrap();
        let proceeds = coin.commit_sell(plan, minted).unwrap();

        assert_eq!(proceeds.value(), sui_out);
        assert!(sui_out < 1_000_000);
        assert_eq!(coin.total_supply(), 0);
        assert_eq!(coin.treasury().supply(), 0);
        assert_eq!(coin.token_reserve(), INITIAL_TOKEN_RESERVE);
        assert_eq!(coin.sui_reserve(), CREATION_FEE + 1_000_000 - sui_out);
        assert_eq!(coin.volume_24h(), 1_000_000 + sui_out);
    }

    #[test]
    fn test_commit_sell_rejects_foreign_tokens() {
        let mut coin = coin();
        let mut other_cap = TreasuryCap::new(ObjectId::new(99));
        let foreign = other_cap.mint(0).unwrap();

        let plan = coin.plan_sell(0, 0, 2_000).unwrap();
        let err = coin.commit_sell(plan, foreign).unwrap_err();
        assert!(matches!(err, LaunchpadError::PositionCoinMismatch { .. }));
    }

    #[test]
    fn test_volume_window_rolls_over() {
        let mut coin = coin();
        let plan = coin.plan_buy(100, 0, 1_000).unwrap();
        coin.commit_buy(plan, &mut Balance::new(100)).unwrap();
        let plan = coin.plan_buy(50, 0, 1_000 + VOLUME_WINDOW_MS - 1).unwrap();
        coin.commit_buy(plan, &mut Balance::new(50)).unwrap();
        assert_eq!(coin.volume_24h(), 150);

        let plan = coin.plan_buy(7, 0, 1_000 + VOLUME_WINDOW_MS).unwrap();
        coin.commit_buy(plan, &mut Balance::new(7)).unwrap();
        assert_eq!(coin.volume_24h(), 7);
    }

    #[test]
    fn test_treasury_burn_checks_supply() {
        let mut cap = TreasuryCap::new(ObjectId::new(1));
        let minted = cap.mint(10).unwrap();
        let mut extra = TreasuryCap::new(ObjectId::new(1)).mint(5).unwrap();
        extra.join(minted).unwrap();

        // 15 units against a supply of 10
        assert_eq!(cap.burn(extra), Err(LaunchpadError::MathUnderflow));
    }
}
