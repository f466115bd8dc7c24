//! # Launchpad
//!
//! Entry point tying the registries, the object store and the host
//! collaborators together. Coin creation and metadata operations live here;
//! trading lives in [`crate::exchange`].

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::balance::Balance;
use crate::coin::{Coin, CoinInfo};
use crate::config::LaunchpadConfig;
use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::events::{CoinCreated, EventSink, LaunchpadEvent, TracingEventSink};
use crate::host::{IdAllocator, SequentialIdAllocator};
use crate::metadata::{Metadata, MetadataFields};
use crate::position::PositionInfo;
use crate::registry::{CoinRegistry, MetadataRegistry};
use crate::store::ObjectStore;
use crate::types::{Address, ObjectId, TxContext};
use crate::validation::validate_symbol;

/// Identities of a freshly published coin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedCoin {
    pub coin_id: ObjectId,
    pub metadata_id: ObjectId,
}

pub struct Launchpad {
    pub(crate) config: LaunchpadConfig,
    pub(crate) coin_registry: CoinRegistry,
    pub(crate) metadata_registry: MetadataRegistry,
    pub(crate) objects: ObjectStore,
    pub(crate) ids: Arc<dyn IdAllocator>,
    pub(crate) events: Arc<dyn EventSink>,
    /// Serializes creations so both registries change together
    creation_lock: Mutex<()>,
}

impl Launchpad {
    pub fn new(
        config: LaunchpadConfig,
        ids: Arc<dyn IdAllocator>,
        events: Arc<dyn EventSink>,
    ) -> LaunchpadResult<Self> {
        config.validate()?;
        let fee_bps = config.fee.fee_bps()?;

        let coin_registry = CoinRegistry::new(ids.fresh_id());
        let metadata_registry = MetadataRegistry::new(ids.fresh_id());
        info!(
            coin_registry = %coin_registry.id(),
            metadata_registry = %metadata_registry.id(),
            creation_fee = config.creation_fee,
            fee_bps,
            "launchpad initialized"
        );

        Ok(Self {
            config,
            coin_registry,
            metadata_registry,
            objects: ObjectStore::new(),
            ids,
            events,
            creation_lock: Mutex::new(()),
        })
    }

    /// Sequential ids and events logged through `tracing`
    pub fn with_config(config: LaunchpadConfig) -> LaunchpadResult<Self> {
        Self::new(
            config,
            Arc::new(SequentialIdAllocator::new()),
            Arc::new(TracingEventSink),
        )
    }

    pub fn config(&self) -> &LaunchpadConfig {
        &self.config
    }

    pub fn coin_registry(&self) -> &CoinRegistry {
        &self.coin_registry
    }

    pub fn metadata_registry(&self) -> &MetadataRegistry {
        &self.metadata_registry
    }

    // ========================================================================
    // Coin Lifecycle
    // ========================================================================

    /// Create and publish a coin with its metadata.
    ///
    /// Checks run in order: duplicate symbol, payment below the creation fee,
    /// invalid symbol. On success the whole payment becomes the coin's
    /// base-currency reserve; on failure `payment` is left untouched and no
    /// registry or object changes.
    pub fn create_coin(
        &self,
        ctx: &TxContext,
        symbol: &str,
        fields: MetadataFields,
        payment: &mut Balance,
    ) -> LaunchpadResult<CreatedCoin> {
        let _creation = self.creation_lock.lock();

        if self.coin_registry.contains(symbol) {
            warn!(symbol, creator = %ctx.sender, "rejected duplicate symbol");
            return Err(LaunchpadError::duplicate_symbol(symbol));
        }

        if payment.value() < self.config.creation_fee {
            warn!(symbol, paid = payment.value(), fee = self.config.creation_fee, "creation fee not met");
            return Err(LaunchpadError::invalid_amount(format!(
                "creation requires {} but {} was paid",
                self.config.creation_fee,
                payment.value()
            )));
        }

        if let Err(e) = validate_symbol(symbol) {
            warn!(symbol, "rejected invalid symbol");
            return Err(e);
        }

        let metadata_id = self.ids.fresh_id();
        let coin_id = self.ids.fresh_id();
        let name = fields.name.clone();
        let metadata = Metadata::new(metadata_id, symbol, fields, ctx.sender, ctx.timestamp_ms);

        let coin = Coin::new(
            coin_id,
            symbol,
            ctx.sender,
            metadata_id,
            payment.withdraw_all(),
            &self.config,
            ctx.timestamp_ms,
        );
        let initial_reserve = coin.sui_reserve();

        // Objects are reachable before their symbol resolves
        self.objects.share_metadata(metadata);
        self.objects.share_coin(coin);
        self.metadata_registry.register_metadata(coin_id, metadata_id, symbol);
        self.coin_registry.register(symbol, coin_id)?;

        self.events.emit(LaunchpadEvent::CoinCreated(CoinCreated {
            symbol: symbol.to_string(),
            creator: ctx.sender,
            coin_id,
            metadata_id,
            name,
            timestamp_ms: ctx.timestamp_ms,
        }));
        info!(symbol, coin = %coin_id, metadata = %metadata_id, initial_reserve, "coin created");

        Ok(CreatedCoin {
            coin_id,
            metadata_id,
        })
    }

    // ========================================================================
    // Metadata Operations
    // ========================================================================

    pub fn update_description(
        &self,
        ctx: &TxContext,
        metadata_id: ObjectId,
        description: &str,
    ) -> LaunchpadResult<()> {
        let shared = self.objects.metadata(metadata_id)?;
        let event = shared
            .write()
            .update_description(description, ctx, self.config.metadata_policy)?;

        self.events.emit(LaunchpadEvent::MetadataUpdated(event));
        debug!(metadata = %metadata_id, by = %ctx.sender, "description updated");
        Ok(())
    }

    pub fn set_attribute(
        &self,
        ctx: &TxContext,
        metadata_id: ObjectId,
        key: &str,
        value: &str,
    ) -> LaunchpadResult<()> {
        let shared = self.objects.metadata(metadata_id)?;
        let event = shared
            .write()
            .set_attribute(key, value, ctx, self.config.metadata_policy)?;

        self.events.emit(LaunchpadEvent::MetadataUpdated(event));
        debug!(metadata = %metadata_id, key, "attribute set");
        Ok(())
    }

    /// Remove an attribute, returning its value. Nothing is emitted when the
    /// key was absent.
    pub fn remove_attribute(
        &self,
        ctx: &TxContext,
        metadata_id: ObjectId,
        key: &str,
    ) -> LaunchpadResult<Option<String>> {
        let shared = self.objects.metadata(metadata_id)?;
        let removed = shared
            .write()
            .remove_attribute(key, ctx, self.config.metadata_policy)?;

        Ok(removed.map(|(value, event)| {
            self.events.emit(LaunchpadEvent::MetadataUpdated(event));
            value
        }))
    }

    pub fn get_attribute(&self, metadata_id: ObjectId, key: &str) -> LaunchpadResult<Option<String>> {
        let shared = self.objects.metadata(metadata_id)?;
        let value = shared.read().get_attribute(key).map(str::to_string);
        Ok(value)
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn lookup_coin(&self, symbol: &str) -> Option<ObjectId> {
        self.coin_registry.lookup(symbol)
    }

    pub fn lookup_metadata_by_coin(&self, coin_id: ObjectId) -> Option<ObjectId> {
        self.metadata_registry.lookup_by_coin(coin_id)
    }

    pub fn lookup_metadata_by_symbol(&self, symbol: &str) -> Option<ObjectId> {
        self.metadata_registry.lookup_by_symbol(symbol)
    }

    /// Copy of a metadata record
    pub fn metadata(&self, metadata_id: ObjectId) -> LaunchpadResult<Metadata> {
        Ok(self.objects.metadata(metadata_id)?.read().clone())
    }

    pub fn coin_info(&self, coin_id: ObjectId) -> LaunchpadResult<CoinInfo> {
        self.objects.coin(coin_id)?.lock().info()
    }

    pub fn total_coins(&self) -> u64 {
        self.coin_registry.total_created()
    }

    pub fn position(&self, position_id: ObjectId) -> LaunchpadResult<PositionInfo> {
        self.objects.position_info(position_id)
    }

    pub fn positions_of(&self, owner: &Address) -> Vec<PositionInfo> {
        self.objects.positions_of(owner)
    }

    // ========================================================================
    // Position Management
    // ========================================================================

    /// Move `amount` out of a position into a new one owned by the caller
    pub fn split_position(
        &self,
        ctx: &TxContext,
        position_id: ObjectId,
        amount: u64,
    ) -> LaunchpadResult<ObjectId> {
        let mut positions = self.objects.positions();
        let position = positions
            .get_mut(&position_id)
            .ok_or(LaunchpadError::ObjectNotFound(position_id))?;
        position.ensure_owner(&ctx.sender)?;
        if amount > position.balance() {
            return Err(LaunchpadError::InsufficientBalance {
                requested: amount,
                available: position.balance(),
            });
        }

        let new_id = self.ids.fresh_id();
        let part = position.split(new_id, amount)?;
        positions.insert(new_id, part);
        debug!(position = %position_id, new_position = %new_id, amount, "position split");
        Ok(new_id)
    }

    /// Fold `from` into `into`. Both must belong to the caller and the same coin.
    pub fn merge_positions(&self, ctx: &TxContext, into: ObjectId, from: ObjectId) -> LaunchpadResult<()> {
        if into == from {
            return Err(LaunchpadError::invalid_amount("cannot merge a position into itself"));
        }

        let mut positions = self.objects.positions();
        let target = positions.get(&into).ok_or(LaunchpadError::ObjectNotFound(into))?;
        let source = positions.get(&from).ok_or(LaunchpadError::ObjectNotFound(from))?;
        target.ensure_owner(&ctx.sender)?;
        source.ensure_owner(&ctx.sender)?;
        if source.coin_id() != target.coin_id() {
            return Err(LaunchpadError::PositionCoinMismatch {
                position: from,
                expected: target.coin_id(),
                actual: source.coin_id(),
            });
        }

        let source = positions.remove(&from).ok_or(LaunchpadError::ObjectNotFound(from))?;
        let target = positions.get_mut(&into).ok_or(LaunchpadError::ObjectNotFound(into))?;
        target.join(source)?;
        debug!(into = %into, from = %from, "positions merged");
        Ok(())
    }

    pub fn transfer_position(
        &self,
        ctx: &TxContext,
        position_id: ObjectId,
        recipient: Address,
    ) -> LaunchpadResult<()> {
        let mut positions = self.objects.positions();
        let position = positions
            .get_mut(&position_id)
            .ok_or(LaunchpadError::ObjectNotFound(position_id))?;
        position.ensure_owner(&ctx.sender)?;
        position.owner = recipient;
        debug!(position = %position_id, to = %recipient, "position transferred");
        Ok(())
    }
}
