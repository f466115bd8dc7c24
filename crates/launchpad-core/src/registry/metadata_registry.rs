use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use crate::types::ObjectId;

/// Coin -> metadata and symbol -> metadata indices, written together
#[derive(Debug)]
pub struct MetadataRegistry {
    id: ObjectId,
    state: RwLock<MetadataRegistryState>,
}

#[derive(Debug, Default)]
struct MetadataRegistryState {
    by_coin: HashMap<ObjectId, ObjectId>,
    by_symbol: HashMap<String, ObjectId>,
    total_registered: u64,
}

impl MetadataRegistry {
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            state: RwLock::new(MetadataRegistryState::default()),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Record both mappings. Symbol uniqueness is the coin registry's job,
    /// which must have accepted `symbol` first.
    pub(crate) fn register_metadata(&self, coin_id: ObjectId, metadata_id: ObjectId, symbol: &str) {
        let mut state = self.state.write();
        state.by_coin.insert(coin_id, metadata_id);
        state.by_symbol.insert(symbol.to_string(), metadata_id);
        state.total_registered += 1;
        debug!(symbol, coin = %coin_id, metadata = %metadata_id, "metadata registered");
    }

    pub fn lookup_by_coin(&self, coin_id: ObjectId) -> Option<ObjectId> {
        self.state.read().by_coin.get(&coin_id).copied()
    }

    pub fn lookup_by_symbol(&self, symbol: &str) -> Option<ObjectId> {
        self.state.read().by_symbol.get(symbol).copied()
    }

    pub fn total_registered(&self) -> u64 {
        self.state.read().total_registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_mappings_point_at_metadata() {
        let registry = MetadataRegistry::new(ObjectId::new(2));
        registry.register_metadata(ObjectId::new(10), ObjectId::new(11), "MOON");

        assert_eq!(registry.lookup_by_coin(ObjectId::new(10)), Some(ObjectId::new(11)));
        assert_eq!(registry.lookup_by_symbol("MOON"), Some(ObjectId::new(11)));
        assert_eq!(registry.total_registered(), 1);
    }

    #[test]
    fn test_absent_lookups() {
        let registry = MetadataRegistry::new(ObjectId::new(2));
        assert_eq!(registry.lookup_by_coin(ObjectId::new(10)), None);
        assert_eq!(registry.lookup_by_symbol("MOON"), None);
        assert_eq!(registry.total_registered(), 0);
    }
}
