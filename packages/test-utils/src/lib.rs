pub mod constants;
pub mod helpers;

use launchpad_core::{
    Address, Balance, CreatedCoin, EventSink, Launchpad, LaunchpadConfig, LaunchpadResult,
    MemoryEventSink, MetadataFields, ObjectId, SequentialIdAllocator, TxContext,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::constants::{CREATOR, GENESIS_MS};

/// Install a `RUST_LOG`-driven subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext {
    pub launchpad: Launchpad,
    pub events: Arc<MemoryEventSink>,
    clock: AtomicU64,
}

impl TestContext {
    /// Launchpad with the default configuration
    pub fn new() -> Self {
        Self::with_config(LaunchpadConfig::default())
    }

    pub fn with_config(config: LaunchpadConfig) -> Self {
        init_tracing();
        let events = Arc::new(MemoryEventSink::new());
        let launchpad = Launchpad::new(
            config,
            Arc::new(SequentialIdAllocator::new()),
            Arc::clone(&events) as Arc<dyn EventSink>,
        )
        .expect("test config must be valid");

        Self {
            launchpad,
            events,
            clock: AtomicU64::new(GENESIS_MS),
        }
    }

    pub fn now(&self) -> u64 {
        self.clock.load(Ordering::SeqCst)
    }

    pub fn advance(&self, ms: u64) {
        self.clock.fetch_add(ms, Ordering::SeqCst);
    }

    /// Transaction context for `sender` at the current clock
    pub fn ctx(&self, sender: Address) -> TxContext {
        TxContext::new(sender, self.now())
    }

    pub fn creation_fee(&self) -> u64 {
        self.launchpad.config().creation_fee
    }

    /// Create `symbol` as `CREATOR`, paying exactly the creation fee
    pub fn create_coin(&self, symbol: &str) -> LaunchpadResult<CreatedCoin> {
        let mut payment = Balance::new(self.creation_fee());
        self.launchpad.create_coin(
            &self.ctx(CREATOR),
            symbol,
            MetadataFields::new(format!("{symbol} token"), "", ""),
            &mut payment,
        )
    }

    /// Buy with a fresh payment of `sui_in` and no slippage bound
    pub fn buy(&self, trader: Address, coin_id: ObjectId, sui_in: u64) -> LaunchpadResult<ObjectId> {
        let mut payment = Balance::new(sui_in);
        self.launchpad.buy(&self.ctx(trader), coin_id, &mut payment, 0)
    }

    pub fn sell(&self, trader: Address, coin_id: ObjectId, position_id: ObjectId) -> LaunchpadResult<u64> {
        self.launchpad
            .sell(&self.ctx(trader), coin_id, position_id, 0)
            .map(Balance::into_value)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
