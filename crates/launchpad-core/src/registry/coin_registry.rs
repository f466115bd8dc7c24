use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::types::ObjectId;

/// Symbol -> coin index. A symbol is registered at most once, ever.
#[derive(Debug)]
pub struct CoinRegistry {
    id: ObjectId,
    state: RwLock<CoinRegistryState>,
}

#[derive(Debug, Default)]
struct CoinRegistryState {
    coins: HashMap<String, ObjectId>,
    total_created: u64,
}

impl CoinRegistry {
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            state: RwLock::new(CoinRegistryState::default()),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Insert `symbol -> coin_id` if the symbol is free
    pub(crate) fn register(&self, symbol: &str, coin_id: ObjectId) -> LaunchpadResult<()> {
        let mut state = self.state.write();
        if state.coins.contains_key(symbol) {
            return Err(LaunchpadError::duplicate_symbol(symbol));
        }

        state.coins.insert(symbol.to_string(), coin_id);
        state.total_created += 1;
        debug!(symbol, coin = %coin_id, total = state.total_created, "coin registered");
        Ok(())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.state.read().coins.contains_key(symbol)
    }

    pub fn lookup(&self, symbol: &str) -> Option<ObjectId> {
        self.state.read().coins.get(symbol).copied()
    }

    /// Number of successful registrations
    pub fn total_created(&self) -> u64 {
        self.state.read().total_created
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let registry = CoinRegistry::new(ObjectId::new(1));
        registry.register("MOON", ObjectId::new(10)).unwrap();

        assert!(registry.contains("MOON"));
        assert_eq!(registry.lookup("MOON"), Some(ObjectId::new(10)));
        assert_eq!(registry.lookup("MOON"), Some(ObjectId::new(10)));
        assert_eq!(registry.lookup("SUN"), None);
        assert_eq!(registry.total_created(), 1);
    }

    #[test]
    fn test_duplicate_leaves_registry_unchanged() {
        let registry = CoinRegistry::new(ObjectId::new(1));
        registry.register("🚀", ObjectId::new(10)).unwrap();

        let err = registry.register("🚀", ObjectId::new(11)).unwrap_err();
        assert_eq!(err, LaunchpadError::DuplicateSymbol("🚀".to_string()));
        assert_eq!(registry.lookup("🚀"), Some(ObjectId::new(10)));
        assert_eq!(registry.total_created(), 1);
    }

    #[test]
    fn test_symbols_compare_by_bytes() {
        let registry = CoinRegistry::new(ObjectId::new(1));
        registry.register("moon", ObjectId::new(10)).unwrap();
        assert!(registry.register("MOON", ObjectId::new(11)).is_ok());
        assert_eq!(registry.total_created(), 2);
    }

    #[test]
    fn test_concurrent_registration_single_winner() {
        use std::sync::Arc;

        let registry = Arc::new(CoinRegistry::new(ObjectId::new(1)));
        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.register("SAME", ObjectId::new(100 + i)).is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(registry.total_created(), 1);
    }
}
