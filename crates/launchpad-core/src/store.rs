//! # Object Store
//!
//! Holds published objects. Coins and metadata records are shared: once
//! published they stay reachable by id for the life of the store, and there
//! is no way to remove or privatize them. Each shared object has its own
//! lock, so writers to one coin are serialized while different coins never
//! contend. Positions are owned objects keyed by id.

use parking_lot::{Mutex, MutexGuard, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use crate::coin::Coin;
use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::metadata::Metadata;
use crate::position::{Position, PositionInfo};
use crate::types::{Address, ObjectId};

pub type SharedCoin = Arc<Mutex<Coin>>;
pub type SharedMetadata = Arc<RwLock<Metadata>>;

#[derive(Debug, Default)]
pub struct ObjectStore {
    coins: RwLock<HashMap<ObjectId, SharedCoin>>,
    metadata: RwLock<HashMap<ObjectId, SharedMetadata>>,
    positions: Mutex<HashMap<ObjectId, Position>>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a coin as a shared object
    pub fn share_coin(&self, coin: Coin) -> SharedCoin {
        let id = coin.id;
        let shared = Arc::new(Mutex::new(coin));
        self.coins.write().insert(id, Arc::clone(&shared));
        shared
    }

    /// Publish a metadata record as a shared object
    pub fn share_metadata(&self, metadata: Metadata) -> SharedMetadata {
        let id = metadata.id;
        let shared = Arc::new(RwLock::new(metadata));
        self.metadata.write().insert(id, Arc::clone(&shared));
        shared
    }

    pub fn coin(&self, id: ObjectId) -> LaunchpadResult<SharedCoin> {
        self.coins
            .read()
            .get(&id)
            .cloned()
            .ok_or(LaunchpadError::ObjectNotFound(id))
    }

    pub fn metadata(&self, id: ObjectId) -> LaunchpadResult<SharedMetadata> {
        self.metadata
            .read()
            .get(&id)
            .cloned()
            .ok_or(LaunchpadError::ObjectNotFound(id))
    }

    pub fn coin_count(&self) -> usize {
        self.coins.read().len()
    }

    pub fn metadata_count(&self) -> usize {
        self.metadata.read().len()
    }

    /// Exclusive access to the owned-position table for multi-step updates
    pub(crate) fn positions(&self) -> MutexGuard<'_, HashMap<ObjectId, Position>> {
        self.positions.lock()
    }

    /// Hand a position to its owner
    pub fn transfer(&self, position: Position) {
        self.positions.lock().insert(position.id, position);
    }

    pub fn position_info(&self, id: ObjectId) -> LaunchpadResult<PositionInfo> {
        self.positions
            .lock()
            .get(&id)
            .map(Position::info)
            .ok_or(LaunchpadError::ObjectNotFound(id))
    }

    /// Every position owned by `owner`, ordered by id
    pub fn positions_of(&self, owner: &Address) -> Vec<PositionInfo> {
        let mut owned: Vec<_> = self
            .positions
            .lock()
            .values()
            .filter(|p| p.owner == *owner)
            .map(Position::info)
            .collect();
        owned.sort_by_key(|p| p.id);
        owned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::Balance;
    use crate::config::LaunchpadConfig;
    use crate::metadata::MetadataFields;

    #[test]
    fn test_shared_objects_are_reachable() {
        let store = ObjectStore::new();
        let creator = Address::from_low_u64(1);
        let coin = Coin::new(
            ObjectId::new(10),
            "MOON",
            creator,
            ObjectId::new(11),
            Balance::new(5),
            &LaunchpadConfig::default(),
            0,
        );
        let meta = Metadata::new(ObjectId::new(11), "MOON", MetadataFields::default(), creator, 0);

        store.share_coin(coin);
        store.share_metadata(meta);

        assert_eq!(store.coin(ObjectId::new(10)).unwrap().lock().symbol, "MOON");
        assert_eq!(store.metadata(ObjectId::new(11)).unwrap().read().symbol, "MOON");
        assert_eq!(store.coin_count(), 1);
        assert_eq!(store.metadata_count(), 1);
        assert_eq!(
            store.coin(ObjectId::new(12)).unwrap_err(),
            LaunchpadError::ObjectNotFound(ObjectId::new(12))
        );
    }

    #[test]
    fn test_positions_by_owner() {
        let store = ObjectStore::new();
        let mut coin = Coin::new(
            ObjectId::new(10),
            "MOON",
            Address::from_low_u64(1),
            ObjectId::new(11),
            Balance::new(5),
            &LaunchpadConfig::default(),
            0,
        );
        let plan = coin.plan_buy(0, 0, 0).unwrap();
        let minted = coin.commit_buy(plan, &mut Balance::zero()).unwrap();

        let alice = Address::from_low_u64(2);
        store.transfer(Position::new(ObjectId::new(30), "MOON", alice, minted));

        assert_eq!(store.positions_of(&alice).len(), 1);
        assert!(store.positions_of(&Address::from_low_u64(3)).is_empty());
        assert_eq!(store.position_info(ObjectId::new(30)).unwrap().owner, alice);
    }
}
