//! # Exchange Engine
//!
//! Buys and sells against a coin's bonding curve. Each trade holds the coin's
//! lock for its whole duration and only mutates state once every check has
//! passed. Lock order is coin first, then the position table. Trade events
//! are emitted while the coin is still locked, so a sink sees trades on one
//! coin in commit order and must not call back into views of that coin.

use tracing::{debug, info, warn};

use crate::balance::Balance;
use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::events::{LaunchpadEvent, TradeExecuted, TradeSide};
use crate::launchpad::Launchpad;
use crate::position::Position;
use crate::types::{ObjectId, TxContext};

impl Launchpad {
    pub fn quote_buy(&self, coin_id: ObjectId, sui_in: u64) -> LaunchpadResult<u64> {
        self.objects.coin(coin_id)?.lock().quote_buy(sui_in)
    }

    pub fn quote_sell(&self, coin_id: ObjectId, tokens_in: u64) -> LaunchpadResult<u64> {
        self.objects.coin(coin_id)?.lock().quote_sell(tokens_in)
    }

    /// Price of one token in base currency, scaled by the configured price scale
    pub fn current_price(&self, coin_id: ObjectId) -> LaunchpadResult<u64> {
        self.objects.coin(coin_id)?.lock().current_price()
    }

    /// Spend the whole `payment` on tokens of `coin_id`.
    ///
    /// Returns the id of the new position, owned by the caller. On any error
    /// the coin and `payment` are unchanged.
    pub fn buy(
        &self,
        ctx: &TxContext,
        coin_id: ObjectId,
        payment: &mut Balance,
        min_tokens_out: u64,
    ) -> LaunchpadResult<ObjectId> {
        let sui_in = payment.value();
        if sui_in == 0 {
            warn!(coin = %coin_id, trader = %ctx.sender, "rejected empty buy");
            return Err(LaunchpadError::invalid_amount("buy payment must be non-zero"));
        }

        let shared = self.objects.coin(coin_id)?;
        let mut coin = shared.lock();

        let tokens_out = coin.quote_buy(sui_in)?;
        if tokens_out < min_tokens_out {
            warn!(coin = %coin_id, tokens_out, min_tokens_out, "buy slippage exceeded");
            return Err(LaunchpadError::SlippageExceeded {
                expected_min: min_tokens_out,
                actual: tokens_out,
            });
        }

        let plan = coin.plan_buy(sui_in, tokens_out, ctx.timestamp_ms)?;
        let new_price = coin.price_after(&plan)?;
        let minted = coin.commit_buy(plan, payment)?;

        // Position lands before the coin is released so supply and holdings agree
        let position_id = self.ids.fresh_id();
        let symbol = coin.symbol.clone();
        self.objects
            .transfer(Position::new(position_id, &symbol, ctx.sender, minted));

        self.events.emit(LaunchpadEvent::Trade(TradeExecuted {
            coin_id,
            trader: ctx.sender,
            side: TradeSide::Buy,
            sui_amount: sui_in,
            token_amount: tokens_out,
            new_price,
            timestamp_ms: ctx.timestamp_ms,
        }));
        drop(coin);

        info!(
            symbol = %symbol,
            coin = %coin_id,
            trader = %ctx.sender,
            sui_in,
            tokens_out,
            new_price,
            "buy executed"
        );
        Ok(position_id)
    }

    /// Sell a whole position back to the curve.
    ///
    /// The position is consumed only on success. Returns the base currency
    /// released to the caller.
    pub fn sell(
        &self,
        ctx: &TxContext,
        coin_id: ObjectId,
        position_id: ObjectId,
        min_sui_out: u64,
    ) -> LaunchpadResult<Balance> {
        let shared = self.objects.coin(coin_id)?;
        let mut coin = shared.lock();
        let mut positions = self.objects.positions();

        let position = positions
            .get(&position_id)
            .ok_or(LaunchpadError::ObjectNotFound(position_id))?;
        if let Err(e) = position.ensure_owner(&ctx.sender) {
            warn!(position = %position_id, caller = %ctx.sender, "sell by non-owner");
            return Err(e);
        }
        if position.coin_id() != coin_id {
            return Err(LaunchpadError::PositionCoinMismatch {
                position: position_id,
                expected: coin_id,
                actual: position.coin_id(),
            });
        }

        let token_amount = position.balance();
        let sui_out = coin.quote_sell(token_amount)?;
        if sui_out < min_sui_out {
            warn!(coin = %coin_id, sui_out, min_sui_out, "sell slippage exceeded");
            return Err(LaunchpadError::SlippageExceeded {
                expected_min: min_sui_out,
                actual: sui_out,
            });
        }

        let plan = coin.plan_sell(token_amount, sui_out, ctx.timestamp_ms)?;
        let new_price = coin.price_after(&plan)?;

        let position = positions
            .remove(&position_id)
            .ok_or(LaunchpadError::ObjectNotFound(position_id))?;
        let proceeds = coin.commit_sell(plan, position.into_balance())?;
        drop(positions);
        let symbol = coin.symbol.clone();

        self.events.emit(LaunchpadEvent::Trade(TradeExecuted {
            coin_id,
            trader: ctx.sender,
            side: TradeSide::Sell,
            sui_amount: sui_out,
            token_amount,
            new_price,
            timestamp_ms: ctx.timestamp_ms,
        }));
        drop(coin);
        debug!(position = %position_id, "position consumed");
        info!(
            symbol = %symbol,
            coin = %coin_id,
            trader = %ctx.sender,
            tokens_in = token_amount,
            sui_out,
            new_price,
            "sell executed"
        );
        Ok(proceeds)
    }
}
